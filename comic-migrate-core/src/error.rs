use thiserror::Error;

/// Errors that can occur while loading, patching, or writing a catalog.
#[derive(Debug, Error)]
pub enum MigrateError {
    /// The input catalog does not exist on disk
    #[error("Input file not found: {0}")]
    InputNotFound(String),

    /// I/O error while reading or writing a catalog file
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// The catalog file is not valid JSON
    #[error("JSON parse error in {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },

    /// The document has no top-level `items` key
    #[error("Invalid comics.json format - missing 'items' key")]
    MissingItems,

    /// A value that must be a JSON object is something else
    #[error("Invalid comics.json format - {0} is not an object")]
    NotAnObject(String),

    /// A rule table file could not be read or parsed
    #[error("Invalid rules file {path}: {message}")]
    Rules { path: String, message: String },

    /// The patched document could not be serialized
    #[error("Failed to serialize catalog: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl MigrateError {
    pub fn io(path: impl std::fmt::Display, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_string(),
            source,
        }
    }

    pub fn not_an_object(what: impl Into<String>) -> Self {
        Self::NotAnObject(what.into())
    }

    pub fn rules(path: impl std::fmt::Display, message: impl Into<String>) -> Self {
        Self::Rules {
            path: path.to_string(),
            message: message.into(),
        }
    }
}
