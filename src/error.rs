use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

// Errors raised while reading bundled content. They never reach the UI:
// the loaders log them and hand back an empty value instead.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Resource '{name}' not found in {bundle}")]
    ResourceNotFound { name: String, bundle: String },

    #[error("Resource '{name}' is not valid UTF-8: {source}")]
    Encoding {
        name: String,
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("Failed to decode resource '{name}': {source}")]
    Decode {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

impl CatalogError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::ResourceNotFound { .. })
    }
}

// Enum for handling application-level errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Serialization error: {0:#}")]
    Serialization(#[from] serde_json::Error), // Errors related to settings serialization.

    #[error("IO error: {0:#}")]
    IO(#[from] std::io::Error),

    #[error("Logger error: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("Logger already initialized")]
    LoggerAlreadySet,
}
