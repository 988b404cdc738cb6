/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Reusable value containers for field parsing.
//!
//! Containers are caller-owned mutable cells that a parser overwrites on
//! each successful parse, so bulk ingestion of millions of fields allocates
//! nothing per field. Every container is constructible without arguments
//! (`Default`) and exposes a setter for its value; that is the whole
//! contract the parsers rely on.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reusable container for a signed 32-bit integer field value.
///
/// Create one per parsing context (not per field) and pass it to
/// [`parse_field`](crate::parser::FieldParser::parse_field) for every field
/// of that column. After a failed parse its content is unspecified and must
/// not be read.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[repr(transparent)]
#[serde(transparent)]
pub struct IntValue(i32);

impl IntValue {
    /// Creates a container holding the given value.
    ///
    /// # Arguments
    /// * `value` - The initial integer value
    #[inline]
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the contained value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Overwrites the contained value.
    ///
    /// # Arguments
    /// * `value` - The new integer value
    #[inline]
    pub const fn set_value(&mut self, value: i32) {
        self.0 = value;
    }
}

impl From<i32> for IntValue {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<IntValue> for i32 {
    fn from(value: IntValue) -> Self {
        value.0
    }
}

impl fmt::Display for IntValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
