/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Decimal text parsing of signed 32-bit integer fields.
//!
//! Only ASCII digits and an optional leading `-` are allowed. The field
//! ends at the first delimiter byte within the window, or at the window's
//! limit (the last field of a record carries no trailing delimiter).

use flatrow_core::error::{ParseError, Result};
use flatrow_core::parser::FieldParser;
use flatrow_core::value::IntValue;
use memchr::memchr;

/// Largest magnitude representable for a positive value.
const OVERFLOW_BOUND: i64 = 0x7fff_ffff;
/// Largest magnitude representable for a negative value. One further than
/// the positive bound: two's-complement asymmetry.
const UNDERFLOW_BOUND: i64 = 0x8000_0000;

/// Parses decimal text fields into [`IntValue`] containers.
///
/// Both calling conventions run the same parsing law and accept or reject
/// exactly the same inputs:
/// - [`parse_field`](FieldParser::parse_field) takes a `(start, limit)`
///   window, writes into a reusable container, and returns the position
///   just past the consumed delimiter. Built for tight bulk-ingestion
///   loops over many records.
/// - [`parse_direct`](DecimalIntParser::parse_direct) takes a
///   `(start, length)` window and returns the value itself, for call sites
///   that already validated field boundaries.
#[derive(Debug, Clone, Default)]
pub struct DecimalIntParser {
    /// Copy of the most recently parsed value, for [`FieldParser::last_result`].
    last: IntValue,
}

impl DecimalIntParser {
    /// Creates a new parser.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last: IntValue::new(0),
        }
    }

    /// Parses the field `bytes[start..start + length]` and returns its value.
    ///
    /// The field still ends early at the first `delimiter` byte within the
    /// window; bytes past the delimiter are not inspected.
    ///
    /// # Arguments
    /// * `bytes` - The record buffer
    /// * `start` - First byte of the field
    /// * `length` - Field window length; `start + length` must not exceed
    ///   `bytes.len()` and `length` must be at least 1
    /// * `delimiter` - The byte terminating the field
    ///
    /// # Errors
    /// Returns [`ParseError`] if the field is not a well-formed decimal
    /// integer in the signed 32-bit range.
    #[inline]
    pub fn parse_direct(bytes: &[u8], start: usize, length: usize, delimiter: u8) -> Result<i32> {
        parse_decimal(bytes, start, start + length, delimiter).map(|(value, _)| value)
    }
}

impl FieldParser for DecimalIntParser {
    type Value = IntValue;

    fn parse_field(
        &mut self,
        bytes: &[u8],
        start: usize,
        limit: usize,
        delimiter: u8,
        holder: &mut IntValue,
    ) -> Result<usize> {
        let (value, next) = parse_decimal(bytes, start, limit, delimiter)?;
        holder.set_value(value);
        self.last.set_value(value);
        Ok(next)
    }

    fn last_result(&self) -> &IntValue {
        &self.last
    }
}

/// The single parsing routine both calling conventions adapt.
///
/// Returns the parsed value and the position just past the consumed
/// delimiter, or `limit` when the field ran to the window's end without
/// one. Requires `start < limit <= bytes.len()`.
fn parse_decimal(
    bytes: &[u8],
    start: usize,
    limit: usize,
    delimiter: u8,
) -> Result<(i32, usize)> {
    let mut pos = start;
    let mut neg = false;

    if bytes[pos] == b'-' {
        neg = true;
        pos += 1;

        // A sign with no digits before the field ends.
        if pos == limit || bytes[pos] == delimiter {
            return Err(ParseError::OrphanSign);
        }
    }

    // Field end: first delimiter within the window, else the limit itself.
    let (field_end, next) = match memchr(delimiter, &bytes[pos..limit]) {
        Some(offset) => (pos + offset, pos + offset + 1),
        None => (limit, limit),
    };

    let mut val: i64 = 0;
    for i in pos..field_end {
        let b = bytes[i];
        if !b.is_ascii_digit() {
            return Err(ParseError::IllegalCharacter { byte: b, offset: i });
        }
        val = val * 10 + i64::from(b - b'0');

        // Checked after every digit so an overflowing prefix fails before
        // any later byte is inspected.
        if val > OVERFLOW_BOUND && (!neg || val > UNDERFLOW_BOUND) {
            return Err(ParseError::OverflowOrUnderflow);
        }
    }

    let val = if neg { -val } else { val };
    Ok((val as i32, next))
}
