/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Error types for FlatRow field parsing.
//!
//! This module provides the typed error taxonomy for malformed numeric
//! fields, using `thiserror` for Display derivation. Both parsing modes
//! (position-returning and value-returning) report the same three
//! conditions.

use thiserror::Error;

/// Result type alias using [`ParseError`] as the error type.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that occur while parsing one numeric field.
///
/// The variant set is exhaustive: every malformed field maps onto exactly
/// one of these conditions. Payloads are diagnostic only and never affect
/// which inputs are accepted or rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// A `-` sign immediately followed by the delimiter or the end of the
    /// field, with no digits in between.
    #[error("orphaned minus sign: no digits before end of field")]
    OrphanSign,

    /// A byte inside the field (after any sign) that is neither an ASCII
    /// digit nor the delimiter.
    #[error("illegal character 0x{byte:02x} at offset {offset}")]
    IllegalCharacter {
        /// The offending byte.
        byte: u8,
        /// Absolute offset of the byte within the buffer.
        offset: usize,
    },

    /// The accumulated magnitude exceeds the signed 32-bit range:
    /// 2147483647 for positive values, 2147483648 for negative ones.
    #[error("numeric value overflows signed 32-bit range")]
    OverflowOrUnderflow,
}
