//! Low-level source primitives for the jlex tokenizer.
//!
//! This crate has no jlex dependencies. It owns the text a scan reads from
//! and the vocabulary for talking about locations in it:
//!
//! - [`SourceBuffer`]: sentinel-terminated copy of the source plus a line index
//! - [`Cursor`]: byte cursor used by the scanner
//! - [`Position`] / [`Span`]: 1-based line and column locations
//! - [`chars`]: character class predicates shared by scanner and tooling

pub mod chars;
mod cursor;
mod position;
mod source_buffer;

pub use cursor::Cursor;
pub use position::{Position, Span};
pub use source_buffer::SourceBuffer;
