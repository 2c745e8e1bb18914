//! Language profiles: the keyword set, symbol table, numeric suffixes, and
//! lexing policies a scan runs under.
//!
//! Profiles are immutable once built and are shared by reference, so
//! several dialects can be scanned side by side in one process.
//!
//! ```text
//! let strict = LanguageProfile::java();
//! let lenient = ProfileBuilder::java()
//!     .digit_leading_identifiers(true)
//!     .string_recovery(StringRecovery::NextSemicolon)
//!     .build()?;
//! ```

use rustc_hash::FxHashMap;

use crate::keywords::KeywordTable;
use crate::symbol::SymbolTable;
use crate::{Classifier, Keyword, NumericSuffix, Operator, Punctuation, Symbol, TokenKind};

/// Where scanning resumes after an unterminated string literal.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum StringRecovery {
    /// The error token ends at the line break; scanning restarts there.
    #[default]
    NextLine,
    /// The error token extends up to (not including) the next `;`.
    /// Falls back to [`NextLine`](Self::NextLine) when no `;` follows.
    NextSemicolon,
}

/// Invalid profile configuration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    #[error("symbol spelling is empty")]
    EmptySymbol,

    #[error("symbol `{text}` is mapped to both {existing:?} and {new:?}")]
    ConflictingSymbol {
        text: String,
        existing: Symbol,
        new: Symbol,
    },

    #[error("symbol `{text}` collides with {reason}")]
    SymbolCollision { text: String, reason: &'static str },

    #[error("keyword `{text}` is not a valid identifier")]
    InvalidKeyword { text: String },

    #[error("keyword `{text}` is mapped to both `{existing}` and `{new}`")]
    ConflictingKeyword {
        text: String,
        existing: Keyword,
        new: Keyword,
    },

    #[error("`{suffix}` cannot be a numeric suffix")]
    InvalidSuffix { suffix: char },
}

/// Everything a scan needs to know about the language.
#[derive(Clone, Debug)]
pub struct LanguageProfile {
    pub(crate) keywords: KeywordTable,
    pub(crate) symbols: SymbolTable,
    pub(crate) suffixes: [Option<NumericSuffix>; 128],
    surface_whitespace: bool,
    surface_comments: bool,
    surface_errors: bool,
    string_recovery: StringRecovery,
    digit_leading_identifiers: bool,
}

impl LanguageProfile {
    /// Java: full keyword set (including `true`, `false`, `null`, `var`),
    /// every operator and separator except `@`, suffixes `l L f F d D`,
    /// trivia suppressed, error tokens surfaced.
    pub fn java() -> Self {
        ProfileBuilder::java().assemble()
    }

    /// [`java()`](Self::java) plus `@` as punctuation.
    pub fn java_with_annotations() -> Self {
        ProfileBuilder::java().symbol("@", Punctuation::At).assemble()
    }

    /// Start a builder from this profile's current settings.
    pub fn to_builder(&self) -> ProfileBuilder {
        ProfileBuilder {
            keywords: self
                .keywords
                .iter()
                .map(|(text, kw)| (text.to_owned(), kw))
                .collect(),
            symbols: self
                .symbols
                .iter()
                .map(|(text, sym)| (text.to_owned(), sym))
                .collect(),
            suffixes: self.suffixes,
            surface_whitespace: self.surface_whitespace,
            surface_comments: self.surface_comments,
            surface_errors: self.surface_errors,
            string_recovery: self.string_recovery,
            digit_leading_identifiers: self.digit_leading_identifiers,
            error: None,
        }
    }

    pub fn classifier(&self) -> Classifier<'_> {
        Classifier::new(self)
    }

    pub fn surfaces_whitespace(&self) -> bool {
        self.surface_whitespace
    }

    pub fn surfaces_comments(&self) -> bool {
        self.surface_comments
    }

    pub fn surfaces_errors(&self) -> bool {
        self.surface_errors
    }

    pub fn string_recovery(&self) -> StringRecovery {
        self.string_recovery
    }

    pub fn allows_digit_leading_identifiers(&self) -> bool {
        self.digit_leading_identifiers
    }

    pub fn keyword_count(&self) -> usize {
        self.keywords.len()
    }

    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    /// Whether `next_token` hands out tokens of this kind.
    #[inline]
    pub fn is_visible(&self, kind: TokenKind) -> bool {
        match kind {
            TokenKind::Whitespace => self.surface_whitespace,
            TokenKind::LineComment | TokenKind::BlockComment => self.surface_comments,
            TokenKind::Error(_) => self.surface_errors,
            _ => true,
        }
    }
}

impl Default for LanguageProfile {
    fn default() -> Self {
        Self::java()
    }
}

/// Builder for custom dialects.
///
/// Problems are remembered as they happen and reported by
/// [`build`](Self::build); the first one wins.
#[derive(Clone, Debug)]
pub struct ProfileBuilder {
    keywords: FxHashMap<String, Keyword>,
    symbols: FxHashMap<String, Symbol>,
    suffixes: [Option<NumericSuffix>; 128],
    surface_whitespace: bool,
    surface_comments: bool,
    surface_errors: bool,
    string_recovery: StringRecovery,
    digit_leading_identifiers: bool,
    error: Option<ProfileError>,
}

impl Default for ProfileBuilder {
    fn default() -> Self {
        Self::empty()
    }
}

impl ProfileBuilder {
    /// No keywords, symbols, or suffixes. Policies match [`java`](Self::java).
    pub fn empty() -> Self {
        ProfileBuilder {
            keywords: FxHashMap::default(),
            symbols: FxHashMap::default(),
            suffixes: [None; 128],
            surface_whitespace: false,
            surface_comments: false,
            surface_errors: true,
            string_recovery: StringRecovery::NextLine,
            digit_leading_identifiers: false,
            error: None,
        }
    }

    /// Seeded with the Java tables.
    pub fn java() -> Self {
        let mut builder = Self::empty();
        for &kw in Keyword::ALL {
            builder = builder.keyword(kw.as_str(), kw);
        }
        for &op in Operator::ALL {
            builder = builder.symbol(op.as_str(), op);
        }
        for &p in Punctuation::ALL {
            if p != Punctuation::At {
                builder = builder.symbol(p.as_str(), p);
            }
        }
        builder
            .suffix('l', NumericSuffix::Long)
            .suffix('L', NumericSuffix::Long)
            .suffix('f', NumericSuffix::Float)
            .suffix('F', NumericSuffix::Float)
            .suffix('d', NumericSuffix::Double)
            .suffix('D', NumericSuffix::Double)
    }

    #[must_use]
    pub fn keyword(mut self, text: &str, kw: Keyword) -> Self {
        if let Err(e) = self.check_keyword(text, kw) {
            self.fail(e);
        } else {
            self.keywords.insert(text.to_owned(), kw);
        }
        self
    }

    #[must_use]
    pub fn without_keyword(mut self, text: &str) -> Self {
        self.keywords.remove(text);
        self
    }

    #[must_use]
    pub fn symbol(mut self, text: &str, sym: impl Into<Symbol>) -> Self {
        let sym = sym.into();
        if let Err(e) = self.check_symbol(text, sym) {
            self.fail(e);
        } else {
            self.symbols.insert(text.to_owned(), sym);
        }
        self
    }

    #[must_use]
    pub fn without_symbol(mut self, text: &str) -> Self {
        self.symbols.remove(text);
        self
    }

    /// Accept `c` directly after a numeric literal as a type hint.
    #[must_use]
    pub fn suffix(mut self, c: char, suffix: NumericSuffix) -> Self {
        // Exponent markers and radix letters would make literals ambiguous.
        if c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E' | 'x' | 'X' | 'b' | 'B') {
            self.suffixes[c as usize] = Some(suffix);
        } else {
            self.fail(ProfileError::InvalidSuffix { suffix: c });
        }
        self
    }

    #[must_use]
    pub fn without_suffix(mut self, c: char) -> Self {
        if c.is_ascii() {
            self.suffixes[c as usize] = None;
        }
        self
    }

    #[must_use]
    pub fn surface_whitespace(mut self, on: bool) -> Self {
        self.surface_whitespace = on;
        self
    }

    #[must_use]
    pub fn surface_comments(mut self, on: bool) -> Self {
        self.surface_comments = on;
        self
    }

    #[must_use]
    pub fn surface_errors(mut self, on: bool) -> Self {
        self.surface_errors = on;
        self
    }

    #[must_use]
    pub fn string_recovery(mut self, policy: StringRecovery) -> Self {
        self.string_recovery = policy;
        self
    }

    #[must_use]
    pub fn digit_leading_identifiers(mut self, on: bool) -> Self {
        self.digit_leading_identifiers = on;
        self
    }

    pub fn build(mut self) -> Result<LanguageProfile, ProfileError> {
        match self.error.take() {
            Some(e) => Err(e),
            None => Ok(self.assemble()),
        }
    }

    /// Freeze the tables. Callers guarantee every entry was validated.
    fn assemble(self) -> LanguageProfile {
        LanguageProfile {
            keywords: KeywordTable::from_entries(
                self.keywords.iter().map(|(text, &kw)| (text.as_str(), kw)),
            ),
            symbols: SymbolTable::from_entries(
                self.symbols.iter().map(|(text, &sym)| (text.as_str(), sym)),
            ),
            suffixes: self.suffixes,
            surface_whitespace: self.surface_whitespace,
            surface_comments: self.surface_comments,
            surface_errors: self.surface_errors,
            string_recovery: self.string_recovery,
            digit_leading_identifiers: self.digit_leading_identifiers,
        }
    }

    fn fail(&mut self, e: ProfileError) {
        if self.error.is_none() {
            self.error = Some(e);
        }
    }

    fn check_keyword(&self, text: &str, kw: Keyword) -> Result<(), ProfileError> {
        let mut chars = text.chars();
        let shaped = chars
            .next()
            .is_some_and(jlex_core::chars::is_identifier_start)
            && chars.all(jlex_core::chars::is_identifier_continue);
        if !shaped {
            return Err(ProfileError::InvalidKeyword {
                text: text.to_owned(),
            });
        }
        match self.keywords.get(text) {
            Some(&existing) if existing != kw => Err(ProfileError::ConflictingKeyword {
                text: text.to_owned(),
                existing,
                new: kw,
            }),
            _ => Ok(()),
        }
    }

    fn check_symbol(&self, text: &str, sym: Symbol) -> Result<(), ProfileError> {
        if text.is_empty() {
            return Err(ProfileError::EmptySymbol);
        }
        let collision = |reason| ProfileError::SymbolCollision {
            text: text.to_owned(),
            reason,
        };
        for c in text.chars() {
            let reason = match c {
                '"' | '\'' => Some("string and character literals"),
                '_' | '$' => Some("identifiers"),
                c if c.is_ascii_digit() => Some("numeric literals"),
                c if c.is_ascii_alphabetic() => Some("identifiers"),
                c if jlex_core::chars::is_whitespace(c) => Some("whitespace"),
                c if !c.is_ascii_punctuation() => Some("non-ASCII or control characters"),
                _ => None,
            };
            if let Some(reason) = reason {
                return Err(collision(reason));
            }
        }
        if text.contains("//") || text.contains("/*") {
            return Err(collision("comment openers"));
        }
        match self.symbols.get(text) {
            Some(&existing) if existing != sym => Err(ProfileError::ConflictingSymbol {
                text: text.to_owned(),
                existing,
                new: sym,
            }),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests;
