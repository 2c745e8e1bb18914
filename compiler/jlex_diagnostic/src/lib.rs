//! Diagnostics for lexical errors.
//!
//! - Stable error codes for searchability (`L0001`...)
//! - Clear messages (what went wrong)
//! - Primary span (where it went wrong)
//! - Severity (whether scanning could continue)
//!
//! Lexical errors are values: the scanner records a [`Diagnostic`] and keeps
//! going. Only an unterminated block comment is [`Severity::Fatal`].

mod diagnostic;
pub mod emitter;
mod lex_error;

pub use diagnostic::{Diagnostic, Diagnostics, Severity};
pub use lex_error::{ErrorCode, LexErrorKind};
