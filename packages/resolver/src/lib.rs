//! # dotpath resolver
//!
//! Translates the textual location of a JSON-schema validation error, such as
//! `instance.google.com.a[1]`, into the exact sequence of keys and indices it
//! names inside the validated value.
//!
//! Object keys may contain `.` themselves, so the textual form alone is
//! ambiguous: `google.com.a` could be `["google", "com", "a"]` or
//! `["google.com", "a"]`. The resolver settles the question by searching the
//! actual value, preferring the shortest key merge at every level and
//! backtracking when a reading leads nowhere.
//!
//! ```
//! use dotpath_resolver::{DataValue, Resolver};
//!
//! let value = DataValue::from(serde_json::json!({
//!     "google.com": { "a": ["x", "y"] },
//!     "gmail.com": {}
//! }));
//!
//! let resolved = Resolver::default()
//!     .resolve("instance.google.com.a[1]", &value)
//!     .map(|path| path.into_keys());
//!
//! assert_eq!(resolved, Some(vec!["google.com".to_string(), "a".to_string(), "1".to_string()]));
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod config;
pub mod path;

pub use config::{ConfigResult, ConfigurationError, ResolverConfig, Validator};
pub use path::{
    DataValue, ErrorKind, PathError, PathResult, PathSegment, PathTarget, ResolvedPath,
    Resolver, Scalar, SearchStats, Shape, Token,
};
