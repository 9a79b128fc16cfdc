//! Common error types used throughout profilecard.
//!
//! These errors describe a profile or envelope that breaks one of its
//! invariants. They never reach an HTTP client; the server validates
//! configuration at startup and the fact path always degrades to a fallback.

/// Common error type for profilecard.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A profile or envelope field holds an unusable value.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A timestamp does not have the `YYYY-MM-DDTHH:MM:SS(.ffffff)Z` shape.
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// An envelope was assembled with an empty fact.
    #[error("Fact text is empty")]
    EmptyFact,
}

impl Error {
    /// Create a new InvalidInput error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a new InvalidTimestamp error.
    pub fn invalid_timestamp<S: Into<String>>(value: S) -> Self {
        Self::InvalidTimestamp(value.into())
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
