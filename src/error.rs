use thiserror::Error;

/// Convenience result type for processing operations.
pub type ProcessingResult<T> = Result<T, ProcessingError>;

/// Error type returned by processing operations.
///
/// This is a single error enum shared across table construction, transformation,
/// and IO. Engine failures (malformed queries, type mismatches, files Polars
/// cannot decode) are wrapped unmodified.
#[derive(Debug, Error)]
pub enum ProcessingError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Error propagated from the Polars engine.
    #[error("polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// In-memory table construction received columns of unequal length.
    #[error("shape mismatch: {message}")]
    ShapeMismatch { message: String },
}
