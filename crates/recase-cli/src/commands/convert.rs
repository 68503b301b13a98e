//! Conversion commands: interactive picker and one-shot apply

use crate::registry::DEFAULT_REGISTRY;
use crate::{clipboard, input};
use colored::Colorize;
use dialoguer::FuzzySelect;
use dialoguer::theme::ColorfulTheme;
use recase_core::{CaseId, RecaseError, RecaseResult, apply_to_lines};
use std::path::PathBuf;

/// Interactive invocation: pick a style, convert, record the use
pub async fn interactive(
    text: Option<String>,
    copy: bool,
    store_path: PathBuf,
) -> RecaseResult<()> {
    let registry = &*DEFAULT_REGISTRY;
    let mut tracker = super::load_tracker(store_path).await;

    // Picker order: pinned, recent, then the rest. Entries whose style is
    // no longer registered are skipped.
    let sections = tracker.sections(registry);
    let mut choices: Vec<(CaseId, String)> = Vec::with_capacity(registry.len());
    for id in &sections.pinned {
        if registry.contains(id) {
            choices.push((id.clone(), format!("★ {}", id)));
        }
    }
    for id in &sections.recent {
        if registry.contains(id) {
            choices.push((id.clone(), format!("↺ {}", id)));
        }
    }
    for id in &sections.others {
        choices.push((id.clone(), format!("  {}", id)));
    }

    let labels: Vec<&String> = choices.iter().map(|(_, label)| label).collect();
    let selection = FuzzySelect::with_theme(&ColorfulTheme::default())
        .with_prompt("Convert to")
        .items(&labels)
        .default(0)
        .interact()
        .map_err(|err| RecaseError::io(format!("style picker failed: {}", err), None))?;

    let id = choices[selection].0.clone();
    let style = registry
        .get(&id)
        .ok_or_else(|| RecaseError::unknown_case(id.as_str()))?;

    let source = input::resolve(text)?;
    let output = apply_to_lines(&source, |line| style.convert(line));

    tracker.record_use(id).await;
    deliver(&output, copy)
}

/// Direct invocation: apply a pre-selected style once, lists untouched
pub async fn apply_direct(case: &str, text: Option<String>, copy: bool) -> RecaseResult<()> {
    let id = CaseId::new(case);
    let style = DEFAULT_REGISTRY
        .get(&id)
        .ok_or_else(|| RecaseError::unknown_case(case))?;

    let source = input::resolve(text)?;
    let output = apply_to_lines(&source, |line| style.convert(line));
    deliver(&output, copy)
}

fn deliver(output: &str, copy: bool) -> RecaseResult<()> {
    println!("{}", output);
    if copy {
        clipboard::write_text(output)?;
        eprintln!("{}", "copied to clipboard".dimmed());
    }
    Ok(())
}
