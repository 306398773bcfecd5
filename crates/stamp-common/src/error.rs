use thiserror::Error;

/// Error returned when text cannot be read as a Unix timestamp.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseTimestampError {
    /// The input was empty.
    #[error("empty timestamp")]
    Empty,

    /// The input was not a base-10 signed integer.
    #[error("invalid digit in timestamp {0:?}")]
    InvalidDigit(String),

    /// The input was numeric but does not fit in 64 bits.
    #[error("timestamp {0:?} out of range for i64")]
    OutOfRange(String),
}

/// Convenience type alias for timestamp parsing.
pub type ParseResult<T> = Result<T, ParseTimestampError>;
