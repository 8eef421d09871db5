//! Console logger.
//!
//! Everything the CLI prints goes through the `log` macros. Normal runs show
//! bare messages on stdout; `--verbose` adds a timestamp and level to every
//! line and enables debug output from the core crate.

use std::io::Write;

use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

pub(crate) fn init_logger(quiet: bool, verbose: bool) -> Result<(), CliError> {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .target(env_logger::Target::Stdout)
        .format(move |buf, record| {
            if verbose {
                let ts = buf.timestamp_millis();
                writeln!(buf, "{ts} {:<5} {}", record.level(), record.args())
            } else if record.level() == Level::Error {
                writeln!(
                    buf,
                    "{} {}",
                    "ERROR:".if_supports_color(Stdout, |t| t.red()),
                    record.args()
                )
            } else {
                writeln!(buf, "{}", record.args())
            }
        });
    builder
        .try_init()
        .map_err(|e| CliError::config(format!("Failed to initialize logger: {e}")))
}

/// Emit an empty line at info level.
pub(crate) fn log_blank() {
    log::info!("");
}
