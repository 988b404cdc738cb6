/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # FlatRow Core
//!
//! Core types, traits, and error definitions for the FlatRow field parsing
//! library.
//!
//! This crate provides the building blocks shared by all FlatRow parser
//! crates:
//! - **Error types**: The malformed-field taxonomy with `thiserror`
//! - **Value containers**: Reusable cells such as [`IntValue`]
//! - **The `FieldParser` trait**: The capability surface every field-type
//!   parser implements
//!
//! ## Zero-Copy Design
//!
//! Parsers read caller-owned byte buffers in place and write results into
//! reusable containers, so bulk ingestion performs no per-field allocation.

pub mod error;
pub mod parser;
pub mod value;

pub use error::{ParseError, Result};
pub use parser::FieldParser;
pub use value::IntValue;
