//! Core tokenizer state and scanning loop

use super::brackets;
use crate::path::{
    error::{PathResult, root_marker_error},
    tokens::Token,
};

/// Tokenizer over a single path string
pub struct PathTokenizer<'a> {
    pub(crate) input: &'a str,
    pub(crate) chars: Vec<char>,
    pub(crate) tokens: Vec<Token>,
    root_marker: Option<&'a str>,
}

impl<'a> PathTokenizer<'a> {
    /// Create new tokenizer that accepts any root marker
    #[inline]
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.chars().collect(),
            tokens: Vec::new(),
            root_marker: None,
        }
    }

    /// Require the first segment to equal `marker`
    #[inline]
    #[must_use]
    pub fn with_root_marker(mut self, marker: Option<&'a str>) -> Self {
        self.root_marker = marker;
        self
    }

    /// Tokenize the whole input
    ///
    /// # Errors
    ///
    /// Returns a `Syntax` error for malformed input and a `RootMarker` error
    /// when a configured marker does not match the first segment.
    pub fn tokenize(mut self) -> PathResult<Vec<Token>> {
        let mut i = self.skip_root_marker()?;
        let mut fragment = String::new();

        while i < self.chars.len() {
            match self.chars[i] {
                '.' => {
                    self.push_fragment(&mut fragment);
                    i += 1;
                }
                '[' => {
                    self.push_fragment(&mut fragment);
                    i = brackets::parse_bracket(&mut self, i)?;
                }
                c => {
                    fragment.push(c);
                    i += 1;
                }
            }
        }
        self.push_fragment(&mut fragment);

        log::trace!("tokenized '{}' into {:?}", self.input, self.tokens);
        Ok(self.tokens)
    }

    /// Consume the root marker and return the index just past it
    fn skip_root_marker(&self) -> PathResult<usize> {
        let end = self
            .chars
            .iter()
            .position(|&c| c == '.' || c == '[')
            .unwrap_or(self.chars.len());

        if let Some(expected) = self.root_marker {
            let found: String = self.chars[..end].iter().collect();
            if found != expected {
                return Err(root_marker_error(expected, &found));
            }
        }

        Ok(end)
    }

    /// Emit the pending bare fragment, skipping empty ones (`a..b`, `a.[0]`)
    fn push_fragment(&mut self, fragment: &mut String) {
        if !fragment.is_empty() {
            self.tokens.push(Token::Bare(std::mem::take(fragment)));
        }
    }
}
