//! recase CLI application
//!
//! Convert clipboard or piped text between case styles, with pinned
//! favorites and a recently-used window.
//!
//! # Modes
//!
//! ## 1. Interactive Mode (Default)
//! Fuzzy-pick a style from the pinned/recent/all ordering, convert, and
//! print. The selection is recorded in the recent list.
//!
//! - **Command:** `recase` or `recase "some text"`
//!
//! ## 2. Direct Mode (One-shot)
//! Apply a pre-selected style once and exit. Best for scripting; the
//! pinned and recent lists are left untouched.
//!
//! - **Command:** `recase apply snake_case "Some Text"`
//!
//! ## 3. List Management
//! Inspect and edit the pinned and recent lists.
//!
//! - **Commands:** `recase list`, `recase pin <case>`, `recase unpin
//!   <case>`, `recase recent clear`, `recase pinned show`
//!
//! Input falls back from the text argument to piped stdin to the system
//! clipboard. Pass `--copy` to write the result back to the clipboard.

mod args;
mod clipboard;
mod commands;
mod config;
mod input;
mod registry;
mod router;

use clap::Parser;
use recase_core::RecaseResult;

#[tokio::main]
async fn main() -> RecaseResult<()> {
    // Initialize logging with environment-based filtering
    // Set RUST_LOG=debug for verbose logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = args::Cli::parse();
    router::route(cli).await
}
