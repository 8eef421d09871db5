//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use comic_migrate_core::Migration;

#[derive(Parser)]
#[command(name = "comic-migrate")]
#[command(about = "Patch comics.json catalogs in place", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments shared by every migration command.
#[derive(Args, Clone, Debug)]
pub(crate) struct MigrateArgs {
    /// Path to comics.json file to migrate
    pub input_file: PathBuf,

    /// Output file path (default: overwrite input file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Show what would be changed without modifying files
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Replace the built-in rule table with a TOML file
    #[arg(long)]
    pub rules: Option<PathBuf>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Fix wrong slugs, platform moves, discontinued comics, and schedules
    FixSlugs {
        #[command(flatten)]
        args: MigrateArgs,
    },

    /// Add source and sourceIdentifier to comics that lack them
    BackfillSources {
        #[command(flatten)]
        args: MigrateArgs,
    },

    /// Print a migration's built-in rule table as TOML
    Rules {
        /// Migration whose rules to print (fix-slugs, backfill-sources)
        migration: Migration,
    },
}
