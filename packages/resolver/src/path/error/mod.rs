//! Path translation error handling
//!
//! Error types and constructor functions for tokenizer and resolver failures.
//! Every failure collapses to "no match" at the public `resolve` boundary; the
//! kinds here exist for logging and for the diagnostic `try_resolve` API.

pub mod constructors;
mod types;

pub use constructors::{budget_error, root_marker_error, syntax_error, unresolvable_error};
pub use types::{ErrorKind, PathError, PathResult};
