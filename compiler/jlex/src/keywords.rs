//! Keyword vocabulary and length-bucketed lookup.
//!
//! [`Keyword`] is the closed set of keywords a token can carry. Which
//! spellings map to which keyword is decided by the [`LanguageProfile`];
//! the Java spellings are [`Keyword::as_str`].
//!
//! Lookup only happens after the scanner has taken the longest
//! identifier-shaped run, so `classify` never matches `class`.
//!
//! [`LanguageProfile`]: crate::LanguageProfile

use std::fmt;

macro_rules! keywords {
    ($($variant:ident => $text:literal,)*) => {
        /// A reserved word.
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Keyword {
            $($variant,)*
        }

        impl Keyword {
            /// Every keyword, in declaration order.
            pub const ALL: &'static [Keyword] = &[$(Keyword::$variant,)*];

            /// Java spelling.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Keyword::$variant => $text,)*
                }
            }
        }
    };
}

keywords! {
    Abstract => "abstract",
    Assert => "assert",
    Boolean => "boolean",
    Break => "break",
    Byte => "byte",
    Case => "case",
    Catch => "catch",
    Char => "char",
    Class => "class",
    Const => "const",
    Continue => "continue",
    Default => "default",
    Do => "do",
    Double => "double",
    Else => "else",
    Enum => "enum",
    Extends => "extends",
    Final => "final",
    Finally => "finally",
    Float => "float",
    For => "for",
    Goto => "goto",
    If => "if",
    Implements => "implements",
    Import => "import",
    Instanceof => "instanceof",
    Int => "int",
    Interface => "interface",
    Long => "long",
    Native => "native",
    New => "new",
    Package => "package",
    Private => "private",
    Protected => "protected",
    Public => "public",
    Return => "return",
    Short => "short",
    Static => "static",
    Strictfp => "strictfp",
    Super => "super",
    Switch => "switch",
    Synchronized => "synchronized",
    This => "this",
    Throw => "throw",
    Throws => "throws",
    Transient => "transient",
    Try => "try",
    Void => "void",
    Volatile => "volatile",
    While => "while",
    True => "true",
    False => "false",
    Null => "null",
    Var => "var",
}

impl Keyword {
    /// `true` and `false` surface as boolean literals rather than keywords.
    pub fn boolean_value(self) -> Option<bool> {
        match self {
            Keyword::True => Some(true),
            Keyword::False => Some(false),
            _ => None,
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword spellings bucketed by byte length.
///
/// Identifiers whose length has no bucket are rejected without any string
/// comparison; otherwise only the handful of spellings of that exact
/// length are compared.
#[derive(Clone, Debug, Default)]
pub(crate) struct KeywordTable {
    buckets: Vec<Vec<(Box<str>, Keyword)>>,
}

impl KeywordTable {
    pub(crate) fn from_entries<'a>(entries: impl IntoIterator<Item = (&'a str, Keyword)>) -> Self {
        let mut buckets: Vec<Vec<(Box<str>, Keyword)>> = Vec::new();
        for (text, kw) in entries {
            let len = text.len();
            if buckets.len() <= len {
                buckets.resize_with(len + 1, Vec::new);
            }
            buckets[len].push((text.into(), kw));
        }
        for bucket in &mut buckets {
            bucket.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        }
        KeywordTable { buckets }
    }

    #[inline]
    pub(crate) fn lookup(&self, text: &str) -> Option<Keyword> {
        let bucket = self.buckets.get(text.len())?;
        bucket
            .iter()
            .find(|(spelling, _)| &**spelling == text)
            .map(|&(_, kw)| kw)
    }

    pub(crate) fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, Keyword)> {
        self.buckets
            .iter()
            .flatten()
            .map(|(text, kw)| (&**text, *kw))
    }
}

#[cfg(test)]
mod tests;
