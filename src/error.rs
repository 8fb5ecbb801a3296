use thiserror::Error;

/// Crate-wide error type
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Endpoint not configured: {0}")]
    Unconfigured(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Probe failed: {0}")]
    Probe(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    #[error("Unknown export method: {0}")]
    UnknownMethod(String),
}

/// Convenience Result type using our Error
pub type Result<T> = std::result::Result<T, Error>;
