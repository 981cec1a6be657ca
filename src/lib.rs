//! Luhn check digit computation and verification (ISO/IEC 7812).

pub mod checksum;
pub mod error;
