use comic_migrate_core::MigrateError;
use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Loading, patching, or writing the catalog failed
    #[error("{0}")]
    Migrate(#[from] MigrateError),

    /// Logger or rule configuration error
    #[error("Config error: {0}")]
    Config(String),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
