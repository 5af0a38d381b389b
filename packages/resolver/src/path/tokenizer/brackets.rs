//! Bracket group tokenization
//!
//! Handles `["literal"]`, `['literal']` and `[digits]`. Literals are taken
//! verbatim: no escape processing and no splitting on `.`.

use super::core::PathTokenizer;
use crate::path::{
    error::{PathResult, syntax_error},
    tokens::Token,
};

/// Parse the bracket group opening at `open` and return the index just past
/// its closing `]`
pub(crate) fn parse_bracket(tokenizer: &mut PathTokenizer<'_>, open: usize) -> PathResult<usize> {
    let content = open + 1;
    let Some(&first) = tokenizer.chars.get(content) else {
        return Err(syntax_error(tokenizer.input, "unterminated bracket", open));
    };

    match first {
        '"' | '\'' => parse_quoted(tokenizer, open, first),
        c if c.is_ascii_digit() => parse_index(tokenizer, open),
        ']' => Err(syntax_error(tokenizer.input, "empty bracket", open)),
        _ => Err(syntax_error(
            tokenizer.input,
            "bracket content is neither a quoted literal nor an index",
            content,
        )),
    }
}

/// Parse a quoted literal; it ends at the first `quote` directly followed by `]`
fn parse_quoted(tokenizer: &mut PathTokenizer<'_>, open: usize, quote: char) -> PathResult<usize> {
    let chars = &tokenizer.chars;
    let start = open + 2;

    let close = (start..chars.len()).find(|&j| chars[j] == quote && chars.get(j + 1) == Some(&']'));

    match close {
        Some(end) => {
            let literal: String = chars[start..end].iter().collect();
            tokenizer.tokens.push(Token::Quoted(literal));
            Ok(end + 2)
        }
        None => {
            let other = if quote == '"' { '\'' } else { '"' };
            let mismatched = (start..chars.len())
                .any(|j| chars[j] == other && chars.get(j + 1) == Some(&']'));
            let reason = if mismatched {
                "mismatched quote in bracket"
            } else {
                "unterminated quoted literal"
            };
            Err(syntax_error(tokenizer.input, reason, open))
        }
    }
}

/// Parse an all-digit index; leading zeros are allowed (`[01]` is `1`)
fn parse_index(tokenizer: &mut PathTokenizer<'_>, open: usize) -> PathResult<usize> {
    let chars = &tokenizer.chars;
    let start = open + 1;
    let mut end = start;
    while end < chars.len() && chars[end].is_ascii_digit() {
        end += 1;
    }

    match chars.get(end) {
        Some(']') => {}
        Some(_) => {
            return Err(syntax_error(
                tokenizer.input,
                "bracket content is neither a quoted literal nor an index",
                end,
            ));
        }
        None => return Err(syntax_error(tokenizer.input, "unterminated bracket", open)),
    }

    let digits: String = chars[start..end].iter().collect();
    let index = digits
        .parse::<usize>()
        .map_err(|_| syntax_error(tokenizer.input, "index out of range", start))?;

    tokenizer.tokens.push(Token::Index(index));
    Ok(end + 1)
}
