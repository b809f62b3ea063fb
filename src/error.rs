use thiserror::Error;

/// Errors reported by the algorithm suites.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A precondition was violated or a decoder was handed malformed data.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The operation requires a non-empty input stream.
    #[error("input is empty")]
    EmptyInput,
}

impl Error {
    /// Shorthand for an [`Error::InvalidInput`] with a formatted message.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
