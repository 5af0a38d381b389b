//! Token definitions for validation-error path lexing
//!
//! A path such as `instance.definitions["One.Two"].items[3]` lexes into
//! `Bare("definitions")`, `Quoted("One.Two")`, `Bare("items")`, `Index(3)`.

use std::fmt;

/// Tokens produced by the path tokenizer
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// Unquoted text between `.` separators; may merge with neighbouring
    /// bare fragments when the real key contains dots
    Bare(String),
    /// Bracketed, quote-delimited key taken verbatim (`["a.b"]` or `['a.b']`)
    Quoted(String),
    /// Bracketed array index (`[3]`)
    Index(usize),
}

impl Token {
    /// Check if token has more than one possible reading
    #[inline]
    #[must_use]
    pub fn is_ambiguous(&self) -> bool {
        matches!(self, Token::Bare(_))
    }

    /// Check if token names exactly one key or index
    #[inline]
    #[must_use]
    pub fn is_definite(&self) -> bool {
        !self.is_ambiguous()
    }

    /// Get string representation for debugging
    #[must_use]
    pub fn as_debug_str(&self) -> &'static str {
        match self {
            Token::Bare(_) => "bare",
            Token::Quoted(_) => "quoted",
            Token::Index(_) => "index",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Bare(fragment) => write!(f, ".{fragment}"),
            Token::Quoted(literal) => write!(f, "[\"{literal}\"]"),
            Token::Index(index) => write!(f, "[{index}]"),
        }
    }
}

/// Number of consecutive `Bare` tokens at the start of `tokens`
#[inline]
#[must_use]
pub fn bare_run(tokens: &[Token]) -> usize {
    tokens.iter().take_while(|token| token.is_ambiguous()).count()
}

/// Join a run of `Bare` tokens back into the dotted key it may stand for
///
/// Non-bare tokens are never part of a merge; callers pass a slice obtained
/// from [`bare_run`].
#[must_use]
pub fn merge_bare(tokens: &[Token]) -> String {
    let mut key = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if let Token::Bare(fragment) = token {
            if i > 0 {
                key.push('.');
            }
            key.push_str(fragment);
        }
    }
    key
}
