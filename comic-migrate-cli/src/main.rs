//! comic-migrate CLI
//!
//! One-shot migrations for the comics service's `comics.json` catalog.

mod cli_types;
mod commands;
mod error;
mod logging;

use clap::Parser;

use cli_types::{Cli, Commands};
use comic_migrate_core::Migration;
pub(crate) use error::CliError;
pub(crate) use logging::log_blank;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logger(cli.quiet, cli.verbose) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    let result = match cli.command {
        Commands::FixSlugs { args } => commands::migrate::run_migration(Migration::FixSlugs, args),
        Commands::BackfillSources { args } => {
            commands::migrate::run_migration(Migration::BackfillSources, args)
        }
        Commands::Rules { migration } => commands::rules::run_rules(migration),
    };

    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
#[path = "tests/cli_tests.rs"]
mod tests;
