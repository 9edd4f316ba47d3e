use thiserror::Error;

/// Result type for rankeval operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for rankeval operations
#[derive(Error, Debug)]
pub enum Error {
    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset loading errors (malformed queries/qrels input)
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Connectivity or protocol-level failures while dispatching a query
    #[error("Transport error: {0}")]
    Transport(String),

    /// Non-success responses from the search backend; carries the response body
    #[error("Backend error: {0}")]
    Backend(String),

    /// Log persistence errors at end of run
    #[error("Log write error: {0}")]
    LogWrite(String),

    /// Any other error
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Creates a dataset error
    pub fn dataset(msg: impl Into<String>) -> Self {
        Self::Dataset(msg.into())
    }

    /// Creates a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Creates a backend error
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }

    /// Creates a log write error
    pub fn log_write(msg: impl Into<String>) -> Self {
        Self::LogWrite(msg.into())
    }
}
