//! Domain error types for the report generator.
//!
//! Uses thiserror for ergonomic error handling with automatic Display implementations.

/// Application-level errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Sorting method is not one the engine knows how to apply
    #[error("Unsupported sorting method: {0}")]
    UnsupportedSortingMethod(String),

    /// Persisted trends record could not be read
    #[error("Failed to load trends from {path}: {message}")]
    TrendsLoad { path: String, message: String },

    /// Input report could not be parsed
    #[error("Failed to parse report: {0}")]
    ParseFailed(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// File system operation failed
    #[error("File system error: {0}")]
    FileSystem(String),
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

// Conversion implementations for common error types

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidInput(format!("JSON parsing error: {}", err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::FileSystem(err.to_string())
    }
}
