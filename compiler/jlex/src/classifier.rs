//! Character and lexeme classification under a profile.
//!
//! The profile-independent predicates live in [`jlex_core::chars`] and are
//! re-exported here; [`Classifier`] adds the parts a profile decides.

pub use jlex_core::chars::{
    is_digit, is_identifier_continue, is_identifier_start, is_line_break, is_whitespace,
};

use crate::{Keyword, LanguageProfile, NumericSuffix, Symbol};

/// Profile-bound classification queries. Cheap to copy.
#[derive(Copy, Clone, Debug)]
pub struct Classifier<'p> {
    profile: &'p LanguageProfile,
}

impl<'p> Classifier<'p> {
    pub fn new(profile: &'p LanguageProfile) -> Self {
        Classifier { profile }
    }

    pub fn profile(&self) -> &'p LanguageProfile {
        self.profile
    }

    /// Whether some symbol in the profile starts with `c`.
    #[inline]
    pub fn is_operator_start(&self, c: char) -> bool {
        c.is_ascii() && self.profile.symbols.starts_symbol(c as u8)
    }

    /// Keyword for a complete identifier-shaped run.
    #[inline]
    pub fn keyword(&self, text: &str) -> Option<Keyword> {
        self.profile.keywords.lookup(text)
    }

    /// Maximal-munch symbol at the start of `rest`, with its byte length.
    #[inline]
    pub fn longest_symbol(&self, rest: &str) -> Option<(Symbol, u32)> {
        self.profile.symbols.longest_match(rest)
    }

    /// Numeric suffix spelled by byte `b`, if the profile accepts one.
    #[inline]
    pub fn suffix(&self, b: u8) -> Option<NumericSuffix> {
        self.profile.suffixes.get(b as usize).copied().flatten()
    }
}
