//! Tokens produced by the scanner.

use std::fmt;

use jlex_core::Span;
use jlex_diagnostic::LexErrorKind;

use crate::{Keyword, Operator, Punctuation};

/// A classified lexeme.
///
/// `lexeme` borrows the source buffer and always equals
/// `source[span.start.offset..span.end.offset]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub lexeme: &'src str,
    pub span: Span,
    /// Decoded value for literal tokens, `None` otherwise.
    pub value: Option<LiteralValue>,
}

impl<'src> Token<'src> {
    #[inline]
    pub fn new(
        kind: TokenKind,
        lexeme: &'src str,
        span: Span,
        value: Option<LiteralValue>,
    ) -> Self {
        Token {
            kind,
            lexeme,
            span,
            value,
        }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

impl fmt::Display for Token<'_> {
    /// `line:col Kind lexeme`, with the lexeme escaped.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} {:?}", self.span.start, self.kind, self.lexeme)
    }
}

/// Token classification. Closed: consumers match it exhaustively.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Identifier,
    Keyword(Keyword),
    IntLiteral,
    FloatLiteral,
    CharLiteral,
    StringLiteral,
    BooleanLiteral,
    Operator(Operator),
    Punctuation(Punctuation),
    LineComment,
    BlockComment,
    Whitespace,
    EndOfInput,
    Error(LexErrorKind),
}

impl TokenKind {
    /// Whitespace and comments.
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::LineComment | TokenKind::BlockComment
        )
    }

    #[inline]
    pub fn is_error(self) -> bool {
        matches!(self, TokenKind::Error(_))
    }

    #[inline]
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::IntLiteral
                | TokenKind::FloatLiteral
                | TokenKind::CharLiteral
                | TokenKind::StringLiteral
                | TokenKind::BooleanLiteral
        )
    }

    /// The variant name without payload, e.g. `"Keyword"` for `Keyword(Class)`.
    pub fn category_name(self) -> &'static str {
        match self {
            TokenKind::Identifier => "Identifier",
            TokenKind::Keyword(_) => "Keyword",
            TokenKind::IntLiteral => "IntLiteral",
            TokenKind::FloatLiteral => "FloatLiteral",
            TokenKind::CharLiteral => "CharLiteral",
            TokenKind::StringLiteral => "StringLiteral",
            TokenKind::BooleanLiteral => "BooleanLiteral",
            TokenKind::Operator(_) => "Operator",
            TokenKind::Punctuation(_) => "Punctuation",
            TokenKind::LineComment => "LineComment",
            TokenKind::BlockComment => "BlockComment",
            TokenKind::Whitespace => "Whitespace",
            TokenKind::EndOfInput => "EndOfInput",
            TokenKind::Error(_) => "Error",
        }
    }
}

/// Literal-type hint from a numeric suffix.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NumericSuffix {
    /// `l` / `L`
    Long,
    /// `f` / `F`
    Float,
    /// `d` / `D`
    Double,
}

/// Decoded literal value.
#[derive(Clone, Debug, PartialEq)]
pub enum LiteralValue {
    Int {
        value: u64,
        suffix: Option<NumericSuffix>,
    },
    Float {
        value: f64,
        suffix: Option<NumericSuffix>,
    },
    Char(char),
    Str(String),
    Bool(bool),
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Int { value, .. } => write!(f, "{value}"),
            LiteralValue::Float { value, .. } => write!(f, "{value}"),
            LiteralValue::Char(c) => write!(f, "{c}"),
            LiteralValue::Str(s) => f.write_str(s),
            LiteralValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// Size assertion: `TokenKind` is two bytes (tag + payload tag).
const _: () = assert!(std::mem::size_of::<TokenKind>() <= 2);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trivia_classification() {
        assert!(TokenKind::Whitespace.is_trivia());
        assert!(TokenKind::LineComment.is_trivia());
        assert!(TokenKind::BlockComment.is_trivia());
        assert!(!TokenKind::Identifier.is_trivia());
        assert!(!TokenKind::EndOfInput.is_trivia());
    }

    #[test]
    fn category_names_drop_payload() {
        assert_eq!(TokenKind::Keyword(Keyword::Class).category_name(), "Keyword");
        assert_eq!(
            TokenKind::Error(LexErrorKind::IllegalCharacter).category_name(),
            "Error"
        );
        assert_eq!(TokenKind::Operator(Operator::Plus).category_name(), "Operator");
    }

    #[test]
    fn literals() {
        assert!(TokenKind::BooleanLiteral.is_literal());
        assert!(TokenKind::CharLiteral.is_literal());
        assert!(!TokenKind::Keyword(Keyword::Null).is_literal());
    }

    #[test]
    fn literal_value_display() {
        assert_eq!(
            LiteralValue::Int {
                value: 42,
                suffix: Some(NumericSuffix::Long)
            }
            .to_string(),
            "42"
        );
        assert_eq!(LiteralValue::Str("a\tb".into()).to_string(), "a\tb");
        assert_eq!(LiteralValue::Bool(false).to_string(), "false");
    }
}
