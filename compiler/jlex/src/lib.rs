//! Profile-driven lexical analyzer for Java-like source.
//!
//! Scanning is a single forward pass over a [`SourceBuffer`]. What counts
//! as a keyword, operator, or numeric suffix comes from a
//! [`LanguageProfile`], so dialects differ only in configuration.
//!
//! # Architecture
//!
//! - [`Scanner`]: byte-dispatch state machine producing [`Token`]s
//! - [`TokenStream`]: single-token lookahead over visible tokens
//! - [`LanguageProfile`] / [`ProfileBuilder`]: keyword, symbol, and policy tables
//! - [`Classifier`]: character and lexeme queries under a profile
//!
//! Lexical errors become `Error` tokens plus a [`Diagnostic`]; scanning
//! continues after every error except an unterminated block comment.
//!
//! ```
//! use jlex::{lex, LanguageProfile, SourceBuffer, TokenKind};
//!
//! let buffer = SourceBuffer::new("int x = 42;");
//! let output = lex(&buffer, &LanguageProfile::java());
//! assert_eq!(output.tokens.len(), 6);
//! assert_eq!(output.tokens[3].kind, TokenKind::IntLiteral);
//! assert!(output.diagnostics.is_empty());
//! ```

mod classifier;
mod escape;
mod keywords;
mod profile;
mod scanner;
mod stream;
mod symbol;
mod token;

pub use classifier::{
    is_digit, is_identifier_continue, is_identifier_start, is_line_break, is_whitespace,
    Classifier,
};
pub use keywords::Keyword;
pub use profile::{LanguageProfile, ProfileBuilder, ProfileError, StringRecovery};
pub use scanner::{ScanState, Scanner};
pub use stream::TokenStream;
pub use symbol::{Operator, Punctuation, Symbol};
pub use token::{LiteralValue, NumericSuffix, Token, TokenKind};

pub use jlex_core::{Position, SourceBuffer, Span};
pub use jlex_diagnostic::{Diagnostic, Diagnostics, ErrorCode, LexErrorKind, Severity};

/// Every visible token of one source, `EndOfInput` last, and its diagnostics.
#[derive(Clone, Debug)]
pub struct LexOutput<'src> {
    pub tokens: Vec<Token<'src>>,
    pub diagnostics: Diagnostics,
}

impl LexOutput<'_> {
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Scan a whole buffer.
#[tracing::instrument(level = "debug", skip_all, fields(len = buffer.len()))]
pub fn lex<'src>(buffer: &'src SourceBuffer, profile: &LanguageProfile) -> LexOutput<'src> {
    let mut scanner = Scanner::new(buffer, profile);
    let mut tokens = Vec::with_capacity(buffer.len() as usize / 4 + 1);
    loop {
        let tok = scanner.next_token();
        let done = tok.is_eof();
        tokens.push(tok);
        if done {
            break;
        }
    }
    LexOutput {
        tokens,
        diagnostics: scanner.into_diagnostics(),
    }
}
