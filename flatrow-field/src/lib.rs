/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # FlatRow Field
//!
//! Zero-copy field parsers for delimited text records.
//!
//! This crate provides high-performance parsing of single fields out of raw
//! byte buffers, bounded by a per-call delimiter byte or the buffer limit.
//!
//! ## Features
//!
//! - **Zero-copy parsing**: Fields are read in place from the caller's buffer
//! - **SIMD-accelerated**: Uses `memchr` for fast delimiter search
//! - **Reusable results**: Values land in caller-owned containers, no
//!   per-field allocation

pub mod decimal;

pub use decimal::DecimalIntParser;
pub use flatrow_core::{FieldParser, IntValue, ParseError};
