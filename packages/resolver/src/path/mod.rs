//! Path translation module
//!
//! Lexes validation-error paths into tokens and resolves those tokens against
//! a data value with a depth-first backtracking search.
//!
//! # Components
//!
//! - [`tokenizer`]: splits `root.a["b.c"][0]` into `Bare`, `Quoted` and `Index` tokens
//! - [`resolver`]: reconciles ambiguous dotted segments with the real shape of the value
//! - [`value`]: the [`PathTarget`] seam and the owned [`DataValue`] tree
//! - [`resolved`]: the [`ResolvedPath`] handed back to callers

pub mod error;
pub mod resolved;
pub mod resolver;
pub mod stats;
pub mod tokenizer;
pub mod tokens;
pub mod value;

pub use self::{
    error::{ErrorKind, PathError, PathResult},
    resolved::{PathSegment, ResolvedPath},
    resolver::Resolver,
    stats::SearchStats,
    tokenizer::tokenize,
    tokens::Token,
    value::{DataValue, PathTarget, Scalar, Shape},
};
