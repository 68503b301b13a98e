//! Command routing logic for CLI

use crate::args::{Cli, Commands};
use crate::commands;
use recase_core::RecaseResult;

/// Route CLI commands to their respective handlers
pub async fn route(cli: Cli) -> RecaseResult<()> {
    let store_path = crate::config::store_path(cli.store_path.clone());

    if let Some(command) = &cli.command {
        return match command {
            Commands::Apply { case, text } => {
                commands::convert::apply_direct(case, text.clone(), cli.copy).await
            }
            Commands::List => commands::styles::list(store_path).await,
            Commands::Pin { case } => commands::pins::pin(case, store_path).await,
            Commands::Unpin { case } => commands::pins::unpin(case, store_path).await,
            Commands::Recent { action } => {
                commands::recents::route_action(action.clone(), store_path).await
            }
            Commands::Pinned { action } => {
                commands::pins::route_action(action.clone(), store_path).await
            }
        };
    }

    commands::convert::interactive(cli.text.clone(), cli.copy, store_path).await
}
