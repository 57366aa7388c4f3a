//! Error types for the searchit front end.

/// Top-level error type for the terminal front end.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration file or value error.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error on the terminal or a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from the search client.
    #[error(transparent)]
    Search(#[from] searchit_client::SearchError),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, AppError>;
