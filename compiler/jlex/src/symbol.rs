//! Operators, separators, and the maximal-munch symbol table.

use std::fmt;

macro_rules! symbol_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal,)* }) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($variant,)*
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant,)*];

            /// Java spelling.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text,)*
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

symbol_enum! {
    /// Operator symbols.
    Operator {
        Plus => "+",
        Minus => "-",
        Star => "*",
        Slash => "/",
        Percent => "%",
        Assign => "=",
        PlusAssign => "+=",
        MinusAssign => "-=",
        StarAssign => "*=",
        SlashAssign => "/=",
        PercentAssign => "%=",
        AndAssign => "&=",
        OrAssign => "|=",
        XorAssign => "^=",
        ShlAssign => "<<=",
        ShrAssign => ">>=",
        UShrAssign => ">>>=",
        Increment => "++",
        Decrement => "--",
        Eq => "==",
        NotEq => "!=",
        Gt => ">",
        Lt => "<",
        GtEq => ">=",
        LtEq => "<=",
        AndAnd => "&&",
        OrOr => "||",
        Not => "!",
        BitAnd => "&",
        BitOr => "|",
        BitXor => "^",
        Tilde => "~",
        Shl => "<<",
        Shr => ">>",
        UShr => ">>>",
        Question => "?",
        Colon => ":",
        Arrow => "->",
        ColonColon => "::",
    }
}

symbol_enum! {
    /// Separator symbols.
    Punctuation {
        LParen => "(",
        RParen => ")",
        LBrace => "{",
        RBrace => "}",
        LBracket => "[",
        RBracket => "]",
        Semicolon => ";",
        Comma => ",",
        Dot => ".",
        Ellipsis => "...",
        At => "@",
    }
}

/// What a symbol spelling resolves to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    Op(Operator),
    Punct(Punctuation),
}

impl From<Operator> for Symbol {
    fn from(op: Operator) -> Self {
        Symbol::Op(op)
    }
}

impl From<Punctuation> for Symbol {
    fn from(p: Punctuation) -> Self {
        Symbol::Punct(p)
    }
}

/// Symbol spellings indexed by first byte, longest first.
///
/// Symbols are ASCII, so the first byte of the remaining input selects a
/// short candidate list; the first candidate that prefixes the input is
/// the maximal munch.
#[derive(Clone, Debug)]
pub(crate) struct SymbolTable {
    by_first_byte: [Vec<(Box<str>, Symbol)>; 128],
    len: usize,
}

impl SymbolTable {
    /// Entries must be non-empty ASCII.
    pub(crate) fn from_entries<'a>(entries: impl IntoIterator<Item = (&'a str, Symbol)>) -> Self {
        let mut by_first_byte: [Vec<(Box<str>, Symbol)>; 128] = std::array::from_fn(|_| Vec::new());
        let mut len = 0;
        for (text, sym) in entries {
            let Some(&first) = text.as_bytes().first() else {
                continue;
            };
            if let Some(slot) = by_first_byte.get_mut(first as usize) {
                slot.push((text.into(), sym));
                len += 1;
            }
        }
        for slot in &mut by_first_byte {
            slot.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));
        }
        SymbolTable { by_first_byte, len }
    }

    /// Longest symbol prefixing `rest`, with its byte length.
    #[inline]
    #[allow(clippy::cast_possible_truncation, reason = "symbols are a few bytes")]
    pub(crate) fn longest_match(&self, rest: &str) -> Option<(Symbol, u32)> {
        let first = *rest.as_bytes().first()?;
        let candidates = self.by_first_byte.get(first as usize)?;
        candidates
            .iter()
            .find(|(text, _)| rest.starts_with(&**text))
            .map(|(text, sym)| (*sym, text.len() as u32))
    }

    #[inline]
    pub(crate) fn starts_symbol(&self, b: u8) -> bool {
        self.by_first_byte
            .get(b as usize)
            .is_some_and(|slot| !slot.is_empty())
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, Symbol)> {
        self.by_first_byte
            .iter()
            .flatten()
            .map(|(text, sym)| (&**text, *sym))
    }
}

#[cfg(test)]
mod tests;
