/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! The capability trait shared by all field-type parsers.
//!
//! Each concrete parser (one per primitive type) implements its own parsing
//! law behind the same three operations: create a reusable result
//! container, parse one delimiter-bounded field into it, and expose the
//! most recently parsed value. A dispatch layer selecting parsers per
//! column only needs this surface.

use crate::error::Result;

/// One field-type parser over raw byte buffers.
///
/// Implementations parse a single field — the sub-range `[start, limit)`
/// of a buffer, terminated early by the first `delimiter` byte — without
/// allocating and without scanning past the field's end.
///
/// A parser instance is cheap to construct and not meant for shared
/// mutable use; parallel ingestion uses one instance per worker.
pub trait FieldParser {
    /// The reusable container type this parser writes into.
    type Value: Default;

    /// Creates a fresh reusable result container.
    ///
    /// Callers create one container per parsing context, not per field.
    #[must_use]
    fn create_value(&self) -> Self::Value {
        Self::Value::default()
    }

    /// Parses one field from `bytes[start..limit]`.
    ///
    /// On success the parsed value is written into `holder` and the
    /// returned position is just past the consumed delimiter, or `limit`
    /// when the field ran to the buffer limit without one. On failure
    /// `holder`'s content is unspecified and must not be read.
    ///
    /// # Arguments
    /// * `bytes` - The record buffer
    /// * `start` - First byte of the field; must satisfy `start < limit`
    /// * `limit` - Exclusive upper bound; must satisfy `limit <= bytes.len()`
    /// * `delimiter` - The byte terminating the field
    /// * `holder` - Caller-owned container, overwritten only on success
    ///
    /// # Errors
    /// Returns [`ParseError`](crate::error::ParseError) if the field is
    /// malformed for this parser's type.
    fn parse_field(
        &mut self,
        bytes: &[u8],
        start: usize,
        limit: usize,
        delimiter: u8,
        holder: &mut Self::Value,
    ) -> Result<usize>;

    /// Returns the most recently successfully parsed value.
    ///
    /// Meaningful only after a successful [`parse_field`](Self::parse_field)
    /// call; exists so callers can read "the last value" uniformly across
    /// parser variants without knowing which one is in use.
    fn last_result(&self) -> &Self::Value;
}
