//! Style listing command

use crate::registry::DEFAULT_REGISTRY;
use colored::Colorize;
use recase_core::{CaseId, RecaseResult};
use std::path::PathBuf;

/// List every style with pinned and recent markers
pub async fn list(store_path: PathBuf) -> RecaseResult<()> {
    let registry = &*DEFAULT_REGISTRY;
    let tracker = super::load_tracker(store_path).await;
    let sections = tracker.sections(registry);

    if !sections.pinned.is_empty() {
        println!("{}", "Pinned".bold());
        for id in &sections.pinned {
            println!("  {} {}", "★".yellow(), describe(id));
        }
        println!();
    }

    if !sections.recent.is_empty() {
        println!("{}", "Recent".bold());
        for id in &sections.recent {
            println!("  {} {}", "↺".cyan(), describe(id));
        }
        println!();
    }

    println!("{}", "Styles".bold());
    for id in &sections.others {
        println!("    {}", describe(id));
    }

    Ok(())
}

fn describe(id: &CaseId) -> String {
    match DEFAULT_REGISTRY.get(id) {
        Some(style) => format!("{:<18} {}", style.id().to_string(), style.title()),
        None => format!("{:<18} {}", id.to_string(), "(no longer available)".dimmed()),
    }
}
