use std::fmt;

use crate::Severity;

/// Category of a lexical error.
///
/// Error tokens carry the same category as the diagnostic recorded for them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LexErrorKind {
    /// A character that cannot start any token (e.g. `#`).
    IllegalCharacter,
    /// A line break or end-of-input before the closing `"`.
    UnterminatedStringLiteral,
    /// No closing `'` after one character.
    UnterminatedCharLiteral,
    /// `/*` without a matching `*/`. Fatal.
    UnterminatedComment,
    /// Bad exponent, trailing `_`, empty radix prefix, overflow, or
    /// identifier characters glued to a number.
    MalformedNumericLiteral,
    /// `''`.
    EmptyCharLiteral,
    /// Unknown escape inside a string or char literal. Diagnostic only;
    /// the literal token is still produced.
    InvalidEscapeSequence,
}

impl LexErrorKind {
    pub const ALL: [LexErrorKind; 7] = [
        LexErrorKind::IllegalCharacter,
        LexErrorKind::UnterminatedStringLiteral,
        LexErrorKind::UnterminatedCharLiteral,
        LexErrorKind::UnterminatedComment,
        LexErrorKind::MalformedNumericLiteral,
        LexErrorKind::EmptyCharLiteral,
        LexErrorKind::InvalidEscapeSequence,
    ];

    pub fn code(self) -> ErrorCode {
        match self {
            LexErrorKind::IllegalCharacter => ErrorCode::L0001,
            LexErrorKind::UnterminatedStringLiteral => ErrorCode::L0002,
            LexErrorKind::UnterminatedCharLiteral => ErrorCode::L0003,
            LexErrorKind::UnterminatedComment => ErrorCode::L0004,
            LexErrorKind::MalformedNumericLiteral => ErrorCode::L0005,
            LexErrorKind::EmptyCharLiteral => ErrorCode::L0006,
            LexErrorKind::InvalidEscapeSequence => ErrorCode::L0007,
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            LexErrorKind::UnterminatedComment => Severity::Fatal,
            _ => Severity::Recoverable,
        }
    }

    /// Short lowercase title, used as the header of rendered snippets.
    pub fn title(self) -> &'static str {
        match self {
            LexErrorKind::IllegalCharacter => "illegal character",
            LexErrorKind::UnterminatedStringLiteral => "unterminated string literal",
            LexErrorKind::UnterminatedCharLiteral => "unterminated character literal",
            LexErrorKind::UnterminatedComment => "unterminated block comment",
            LexErrorKind::MalformedNumericLiteral => "malformed numeric literal",
            LexErrorKind::EmptyCharLiteral => "empty character literal",
            LexErrorKind::InvalidEscapeSequence => "invalid escape sequence",
        }
    }

    /// `CamelCase` name, as used in token dumps.
    pub fn name(self) -> &'static str {
        match self {
            LexErrorKind::IllegalCharacter => "IllegalCharacter",
            LexErrorKind::UnterminatedStringLiteral => "UnterminatedStringLiteral",
            LexErrorKind::UnterminatedCharLiteral => "UnterminatedCharLiteral",
            LexErrorKind::UnterminatedComment => "UnterminatedComment",
            LexErrorKind::MalformedNumericLiteral => "MalformedNumericLiteral",
            LexErrorKind::EmptyCharLiteral => "EmptyCharLiteral",
            LexErrorKind::InvalidEscapeSequence => "InvalidEscapeSequence",
        }
    }
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Stable code for each lexical error category.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Illegal character
    L0001,
    /// Unterminated string literal
    L0002,
    /// Unterminated character literal
    L0003,
    /// Unterminated block comment
    L0004,
    /// Malformed numeric literal
    L0005,
    /// Empty character literal
    L0006,
    /// Invalid escape sequence
    L0007,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::L0001 => "L0001",
            ErrorCode::L0002 => "L0002",
            ErrorCode::L0003 => "L0003",
            ErrorCode::L0004 => "L0004",
            ErrorCode::L0005 => "L0005",
            ErrorCode::L0006 => "L0006",
            ErrorCode::L0007 => "L0007",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
