//! Recent-list commands

use crate::args::RecentAction;
use colored::Colorize;
use recase_core::{CaseId, RecaseResult};
use std::path::PathBuf;

/// Route a `recase recent` action (defaults to show)
pub async fn route_action(
    action: Option<RecentAction>,
    store_path: PathBuf,
) -> RecaseResult<()> {
    match action.unwrap_or(RecentAction::Show) {
        RecentAction::Show => show(store_path).await,
        RecentAction::Remove { case } => remove(&case, store_path).await,
        RecentAction::Clear => clear(store_path).await,
    }
}

async fn show(store_path: PathBuf) -> RecaseResult<()> {
    let tracker = super::load_tracker(store_path).await;
    if tracker.recent().is_empty() {
        println!("No recently used styles");
        return Ok(());
    }
    for id in tracker.recent().items() {
        println!("{} {}", "↺".cyan(), id);
    }
    Ok(())
}

async fn remove(case: &str, store_path: PathBuf) -> RecaseResult<()> {
    let id = CaseId::new(case);
    let mut tracker = super::load_tracker(store_path).await;

    if tracker.recent().contains(&id) {
        tracker.remove_recent(&id).await;
        println!("Removed {} from recent styles", case);
    } else {
        println!("{} is not in the recent list", case);
    }
    Ok(())
}

async fn clear(store_path: PathBuf) -> RecaseResult<()> {
    let mut tracker = super::load_tracker(store_path).await;
    tracker.clear_recent().await;
    println!("Cleared recent styles");
    Ok(())
}
