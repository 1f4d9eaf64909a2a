use thiserror::Error;

/// Top-level error type for the hollow crate.
#[derive(Debug, Error)]
pub enum HollowError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to input geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("invalid segment: {reason}")]
    InvalidSegment { reason: String },
}

/// Errors related to shape operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The polygon set operation could not produce a result.
    #[error("geometry operation failed: {0}")]
    Failed(String),
}

/// Errors raised while loading pipeline inputs.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed input: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Convenience type alias for results using [`HollowError`].
pub type Result<T> = std::result::Result<T, HollowError>;
