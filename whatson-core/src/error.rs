//! Error types for the whatson ecosystem.

use thiserror::Error;

/// Errors that can occur in whatson operations.
///
/// Unparsable event dates are deliberately not represented here: the
/// filter engine excludes such events instead of raising.
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Feed request failed: {0}")]
    Transport(String),

    #[error("Feed decode error: {0}")]
    Decode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("ICS generation error: {0}")]
    IcsGenerate(String),
}

/// Result type alias for whatson operations.
pub type FeedResult<T> = Result<T, FeedError>;
