//! Luhn check digit computation and verification per ISO/IEC 7812.
//!
//! Catches accidental single-digit transcription errors and most
//! adjacent-digit transpositions in numeric identifiers such as
//! payment-card numbers. Not a cryptographic integrity mechanism.
//!
//! Callers split an external representation (e.g. a digit string) into a
//! slice of digit values before calling; parsing is out of scope here.

use crate::error::ChecksumError;

/// Reject any element outside the decimal digit range [0, 9].
fn validate_digits(digits: &[u8]) -> Result<(), ChecksumError> {
    for (index, &value) in digits.iter().enumerate() {
        if value > 9 {
            tracing::trace!(index, value, "rejecting value outside digit range");
            return Err(ChecksumError::InvalidDigit { index, value });
        }
    }
    Ok(())
}

/// Weighted Luhn sum: walk right to left, doubling every other digit
/// starting with the rightmost. A doubled value above 9 is reduced by 9
/// (the doubled value is at most 18, so this equals its digit sum).
fn luhn_sum(digits: &[u8]) -> u32 {
    let mut sum = 0u32;
    let mut double = true;
    for &d in digits.iter().rev() {
        let mut v = u32::from(d);
        if double {
            v *= 2;
            if v > 9 {
                v -= 9;
            }
        }
        sum += v;
        double = !double;
    }
    sum
}

/// Compute the check digit for `digits`, the identifier without its check
/// digit. Every element must be in [0, 9].
///
/// The result brings the weighted sum to the next multiple of 10, so it is
/// always a single digit: a sum already at a multiple of 10 yields 0.
pub fn check_digit(digits: &[u8]) -> Result<u8, ChecksumError> {
    if digits.is_empty() {
        return Err(ChecksumError::Empty);
    }
    validate_digits(digits)?;
    let sum = luhn_sum(digits);
    Ok(((10 - sum % 10) % 10) as u8)
}

/// Verify a full sequence whose last element is the claimed check digit.
///
/// Needs at least 2 elements so a non-empty body remains after the claimed
/// digit is split off. The comparison is exact equality on a single digit.
pub fn verify(digits: &[u8]) -> Result<bool, ChecksumError> {
    if digits.len() < 2 {
        return Err(ChecksumError::TooShort { len: digits.len() });
    }
    validate_digits(digits)?;
    let (body, claimed) = digits.split_at(digits.len() - 1);
    Ok(check_digit(body)? == claimed[0])
}
