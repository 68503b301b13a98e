//! CLI argument definitions using clap
//!
//! Unified CLI structure:
//! - recase                       # Interactive style picker (clipboard text)
//! - recase "some text"           # Interactive picker over the given text
//! - recase apply snake_case      # One-shot conversion, lists untouched
//! - recase list                  # Show styles with pinned/recent markers
//! - recase pin/unpin <case>      # Manage favorites
//! - recase recent/pinned ...     # Inspect or clear the lists

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "recase")]
#[command(about = "Convert clipboard or piped text between case styles")]
#[command(
    long_about = r#"recase - convert clipboard or piped text between case styles

USAGE:
  recase                         # Pick a style interactively (reads the clipboard)
  recase "some text"             # Pick a style interactively for the given text
  recase apply snake_case        # Apply a style once without touching the lists
  echo "text" | recase apply camelCase

LIST COMMANDS:
  recase list                    # Show every style with pinned/recent markers
  recase pin camelCase           # Pin a favorite style
  recase unpin camelCase         # Remove it from the favorites
  recase recent clear            # Forget the recently used styles

For detailed help: recase --help"#
)]
#[command(version)]
pub struct Cli {
    /// Text to convert (falls back to piped stdin, then the clipboard)
    pub text: Option<String>,

    /// Copy the converted text back to the clipboard
    #[arg(long, global = true)]
    pub copy: bool,

    /// Path to the preferences file
    #[arg(long, global = true, env = "RECASE_STORE_PATH")]
    pub store_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply a style once without touching the pinned or recent lists
    Apply {
        /// Style identifier (see `recase list`)
        case: String,

        /// Text to convert (falls back to piped stdin, then the clipboard)
        text: Option<String>,
    },

    /// List every style with pinned and recent markers
    List,

    /// Pin a style to the top of the picker
    Pin {
        /// Style identifier
        case: String,
    },

    /// Remove a style from the pinned list
    Unpin {
        /// Style identifier
        case: String,
    },

    /// Show or edit the recently used styles
    Recent {
        #[command(subcommand)]
        action: Option<RecentAction>,
    },

    /// Show or clear the pinned styles
    Pinned {
        #[command(subcommand)]
        action: Option<PinnedAction>,
    },
}

#[derive(Subcommand, Clone)]
pub enum RecentAction {
    /// Show the recently used styles
    Show,

    /// Remove one style from the recent list
    Remove {
        /// Style identifier
        case: String,
    },

    /// Clear the recent list
    Clear,
}

#[derive(Subcommand, Clone)]
pub enum PinnedAction {
    /// Show the pinned styles
    Show,

    /// Clear the pinned list
    Clear,
}
