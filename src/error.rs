//! Error type for checksum computation and verification.

use thiserror::Error;

/// Invalid input to check digit computation or verification.
///
/// All failures are detected before any arithmetic runs, so a malformed
/// sequence never yields a numeric answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChecksumError {
    /// The input sequence was empty; there is nothing to checksum.
    #[error("empty digit sequence")]
    Empty,
    /// Verification needs at least one body digit plus the check digit.
    #[error("sequence of length {len} is too short to verify; need at least 2 digits")]
    TooShort { len: usize },
    /// An element was outside the decimal digit range.
    #[error("value {value} at index {index} is not a decimal digit (0-9)")]
    InvalidDigit { index: usize, value: u8 },
}
