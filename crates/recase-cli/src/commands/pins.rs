//! Pinned-list commands

use crate::args::PinnedAction;
use crate::registry::DEFAULT_REGISTRY;
use colored::Colorize;
use recase_core::{CaseId, RecaseError, RecaseResult};
use std::path::PathBuf;

/// Pin a style to the top of the picker
pub async fn pin(case: &str, store_path: PathBuf) -> RecaseResult<()> {
    let id = CaseId::new(case);
    if !DEFAULT_REGISTRY.contains(&id) {
        return Err(RecaseError::unknown_case(case));
    }

    let mut tracker = super::load_tracker(store_path).await;
    tracker.pin(id).await;
    println!("Pinned {}", case.green());
    Ok(())
}

/// Remove a style from the pinned list
pub async fn unpin(case: &str, store_path: PathBuf) -> RecaseResult<()> {
    let id = CaseId::new(case);
    let mut tracker = super::load_tracker(store_path).await;

    if tracker.is_pinned(&id) {
        tracker.unpin(&id).await;
        println!("Unpinned {}", case);
    } else {
        println!("{} is not pinned", case);
    }
    Ok(())
}

/// Route a `recase pinned` action (defaults to show)
pub async fn route_action(
    action: Option<PinnedAction>,
    store_path: PathBuf,
) -> RecaseResult<()> {
    match action.unwrap_or(PinnedAction::Show) {
        PinnedAction::Show => show(store_path).await,
        PinnedAction::Clear => clear(store_path).await,
    }
}

async fn show(store_path: PathBuf) -> RecaseResult<()> {
    let tracker = super::load_tracker(store_path).await;
    if tracker.pinned().is_empty() {
        println!("No pinned styles");
        return Ok(());
    }
    for id in tracker.pinned().items() {
        println!("{} {}", "★".yellow(), id);
    }
    Ok(())
}

async fn clear(store_path: PathBuf) -> RecaseResult<()> {
    let mut tracker = super::load_tracker(store_path).await;
    tracker.clear_pinned().await;
    println!("Cleared pinned styles");
    Ok(())
}
