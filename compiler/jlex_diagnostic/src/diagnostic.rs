//! Diagnostic records and the ordered collection a scan fills.

use std::fmt;

use jlex_core::Span;

use crate::{ErrorCode, LexErrorKind};

/// Whether scanning could continue after the problem.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Scanning resumed at a defined point.
    Recoverable,
    /// Scanning stopped; the next token was `EndOfInput`.
    Fatal,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Recoverable => "error",
            Severity::Fatal => "fatal error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One lexical problem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub span: Span,
    pub category: LexErrorKind,
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    /// Severity follows from the category.
    pub fn new(category: LexErrorKind, span: Span, message: impl Into<String>) -> Self {
        Diagnostic {
            span,
            category,
            severity: category.severity(),
            message: message.into(),
        }
    }

    #[cold]
    pub fn illegal_character(span: Span, c: char) -> Self {
        let shown = if c.is_control() || c.is_whitespace() {
            format!("{c:?}")
        } else {
            format!("`{c}`")
        };
        Self::new(
            LexErrorKind::IllegalCharacter,
            span,
            format!("illegal character {shown}"),
        )
    }

    #[cold]
    pub fn unterminated_string(span: Span) -> Self {
        Self::new(
            LexErrorKind::UnterminatedStringLiteral,
            span,
            "unterminated string literal: missing closing `\"` before end of line",
        )
    }

    #[cold]
    pub fn unterminated_char(span: Span) -> Self {
        Self::new(
            LexErrorKind::UnterminatedCharLiteral,
            span,
            "unterminated character literal: expected closing `'`",
        )
    }

    #[cold]
    pub fn unterminated_comment(span: Span) -> Self {
        Self::new(
            LexErrorKind::UnterminatedComment,
            span,
            "unterminated block comment: missing `*/`",
        )
    }

    #[cold]
    pub fn malformed_number(span: Span, lexeme: &str, reason: &str) -> Self {
        Self::new(
            LexErrorKind::MalformedNumericLiteral,
            span,
            format!("malformed numeric literal `{lexeme}`: {reason}"),
        )
    }

    #[cold]
    pub fn empty_char(span: Span) -> Self {
        Self::new(LexErrorKind::EmptyCharLiteral, span, "empty character literal")
    }

    #[cold]
    pub fn invalid_escape(span: Span, escape: &str) -> Self {
        Self::new(
            LexErrorKind::InvalidEscapeSequence,
            span,
            format!("invalid escape sequence `{escape}`"),
        )
    }

    pub fn code(&self) -> ErrorCode {
        self.category.code()
    }

    pub fn is_fatal(&self) -> bool {
        self.severity == Severity::Fatal
    }

    /// `line:col: message`.
    pub fn rendered(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.span.start, self.message)
    }
}

/// Append-only diagnostics for one scan, ordered by source position.
///
/// Entries with the same start keep the order they were pushed in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic.
    ///
    /// Scanning moves forward, so this is an append in the common case.
    pub fn push(&mut self, diag: Diagnostic) {
        let start = diag.span.start.offset;
        match self.items.last() {
            Some(last) if last.span.start.offset > start => {
                let at = self
                    .items
                    .partition_point(|d| d.span.start.offset <= start);
                self.items.insert(at, diag);
            }
            _ => self.items.push(diag),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.items
    }

    pub fn by_category(&self, kind: LexErrorKind) -> impl Iterator<Item = &Diagnostic> + '_ {
        self.items.iter().filter(move |d| d.category == kind)
    }

    pub fn count_of(&self, kind: LexErrorKind) -> usize {
        self.by_category(kind).count()
    }

    pub fn has_fatal(&self) -> bool {
        self.items.iter().any(Diagnostic::is_fatal)
    }

    /// One `line:col: message` string per diagnostic.
    pub fn rendered(&self) -> Vec<String> {
        self.items.iter().map(Diagnostic::rendered).collect()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for diag in &self.items {
            writeln!(f, "{diag}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
