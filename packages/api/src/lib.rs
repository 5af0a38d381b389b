//! dotpath public API
//!
//! Maps the location string of a JSON-schema validation error, such as
//! `instance.www.google.com.a[1]`, onto the exact keys and indices it names in
//! the validated value, even when object keys themselves contain dots.
//!
//! ```
//! let value = serde_json::json!({
//!     "google.com": { "a": ["hello", "here is the target"] },
//!     "gmail.com": {}
//! });
//!
//! let keys = dotpath::resolve("instance.google.com.a[1]", &value).map(|p| p.into_keys());
//! assert_eq!(keys, Some(vec!["google.com".into(), "a".into(), "1".into()]));
//!
//! assert!(dotpath::resolve("instance.google.net.a", &value).is_none());
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;

// Re-export all public API components
pub use builder::*;

// Re-export important types from the resolver package
pub use dotpath_resolver::{
    ConfigResult, ConfigurationError, DataValue, ErrorKind, PathError, PathResult, PathSegment,
    PathTarget, ResolvedPath, ResolverConfig, Scalar, SearchStats, Shape, Token,
};

/// Main entry point providing static constructors
pub struct DotPath;

impl DotPath {
    /// Create a new translator builder
    ///
    /// Shorthand for `TranslatorBuilder::new()`
    pub fn builder() -> TranslatorBuilder {
        TranslatorBuilder::new()
    }

    /// Resolve with the default configuration
    ///
    /// Shorthand for the free [`resolve`] function
    #[must_use]
    pub fn resolve<V: PathTarget>(path: &str, root: &V) -> Option<ResolvedPath> {
        resolve(path, root)
    }
}

/// Resolve `path` against `root` with the default configuration
///
/// The first path segment is taken as the root marker and discarded. Returns
/// `None` when the path is malformed or no key sequence in `root` matches it;
/// partial matches are never returned.
#[must_use]
pub fn resolve<V: PathTarget>(path: &str, root: &V) -> Option<ResolvedPath> {
    dotpath_resolver::Resolver::default().resolve(path, root)
}

/// Resolve a path against a value given as JSON text
///
/// Returns `None` if `json` does not parse or the path does not resolve.
#[must_use]
pub fn resolve_json_str(path: &str, json: &str) -> Option<ResolvedPath> {
    match serde_json::from_str::<serde_json::Value>(json) {
        Ok(value) => resolve(path, &value),
        Err(e) => {
            log::debug!("value for path '{}' is not valid JSON: {}", path, e);
            None
        }
    }
}
