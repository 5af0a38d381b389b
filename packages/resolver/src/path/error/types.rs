//! Path Error Types
//!
//! Core error types for path tokenizing and resolution.

/// Path translation error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed path syntax
    Syntax,
    /// First segment differs from the configured root marker
    RootMarker,
    /// Well-formed path that no key sequence in the value matches
    Unresolvable,
    /// Search abandoned after exceeding the configured step budget
    BudgetExhausted,
}

/// Main path translation error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Path Error: {message}")]
pub struct PathError {
    pub kind: ErrorKind,
    pub message: String,
    /// Character offset into the path string, for syntax errors
    pub position: Option<usize>,
}

/// Result type for path operations
pub type PathResult<T> = Result<T, PathError>;

impl PathError {
    #[must_use]
    pub fn new(kind: ErrorKind, message: String) -> Self {
        Self {
            kind,
            message,
            position: None,
        }
    }

    #[must_use]
    pub fn at(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Whether the error came from the tokenizer rather than the search
    #[inline]
    #[must_use]
    pub fn is_syntax(&self) -> bool {
        matches!(self.kind, ErrorKind::Syntax | ErrorKind::RootMarker)
    }
}
