//! Error constructor functions
//!
//! Factory functions for path errors with consistent message formatting.

use super::types::{ErrorKind, PathError};

/// Creates a malformed path error
///
/// # Arguments
/// * `path` - The path string being tokenized
/// * `reason` - Why the path is malformed
/// * `position` - Character offset where the problem was detected
///
/// # Examples
/// ```
/// use dotpath_resolver::path::error::{syntax_error, ErrorKind};
///
/// let error = syntax_error("instance.a[\"b", "unterminated bracket", 10);
/// assert_eq!(error.kind(), ErrorKind::Syntax);
/// assert_eq!(error.position, Some(10));
/// ```
pub fn syntax_error(path: &str, reason: impl Into<String>, position: usize) -> PathError {
    PathError::new(
        ErrorKind::Syntax,
        format!(
            "Invalid path '{}': {} at position {}",
            path,
            reason.into(),
            position
        ),
    )
    .at(position)
}

/// Creates a root marker mismatch error
pub fn root_marker_error(expected: &str, found: &str) -> PathError {
    PathError::new(
        ErrorKind::RootMarker,
        format!("expected root marker '{expected}', found '{found}'"),
    )
    .at(0)
}

/// Creates an error for a path no key sequence in the value matches
pub fn unresolvable_error(path: &str) -> PathError {
    PathError::new(
        ErrorKind::Unresolvable,
        format!("no key sequence in the value matches '{path}'"),
    )
}

/// Creates an error for a search that exceeded its step budget
pub fn budget_error(limit: u64) -> PathError {
    PathError::new(
        ErrorKind::BudgetExhausted,
        format!("search abandoned after {limit} key lookups"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syntax_error_carries_position_and_reason() {
        let error = syntax_error("a[x]", "bracket content is neither quoted nor digits", 2);
        assert!(error.is_syntax());
        assert_eq!(error.position, Some(2));
        assert_eq!(
            error.to_string(),
            "Path Error: Invalid path 'a[x]': bracket content is neither quoted nor digits at position 2"
        );
    }

    #[test]
    fn search_errors_are_not_syntax() {
        assert!(!unresolvable_error("a.b").is_syntax());
        assert!(!budget_error(10).is_syntax());
        assert!(root_marker_error("instance", "data").is_syntax());
    }
}
