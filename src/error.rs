//! Error types for gradient generation and rendering.

use thiserror::Error;

/// Errors raised while generating or rendering layers.
#[derive(Debug, Error)]
pub enum DiamondsError {
    /// Neither explicit colors nor a random color count were supplied.
    #[error("please provide colors or random colors number")]
    InvalidInput,

    /// A layer descriptor carried a type the renderer does not know.
    #[error("unsupported layer type '{kind}'")]
    UnsupportedLayer { kind: String },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for diamonds operations.
pub type Result<T> = std::result::Result<T, DiamondsError>;
