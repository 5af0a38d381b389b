//! Validation-error path tokenizer
//!
//! Lexes `<root>(.<fragment>|["literal"]|['literal']|[digits])*` into a
//! sequence of [`Token`](super::tokens::Token)s. The leading root marker is
//! consumed and never emitted.

mod brackets;
mod core;

pub use self::core::PathTokenizer;

use super::{error::PathResult, tokens::Token};

/// Tokenize a path, discarding whatever root marker it starts with
///
/// # Errors
///
/// Returns a `Syntax` error for unterminated brackets, mismatched quotes,
/// bracket content that is neither a quoted literal nor an index, and stray
/// closing brackets.
#[inline]
pub fn tokenize(path: &str) -> PathResult<Vec<Token>> {
    PathTokenizer::new(path).tokenize()
}
