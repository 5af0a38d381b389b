//! Path resolver
//!
//! Pipes a path string through the tokenizer and the backtracking search.
//! Malformed syntax and exhausted searches both come back from
//! [`Resolver::resolve`] as `None`; [`Resolver::try_resolve`] keeps the reason.

mod search;

use crate::config::{ConfigResult, ResolverConfig, Validator};
use crate::path::{
    error::{ErrorKind, PathResult, unresolvable_error},
    resolved::ResolvedPath,
    stats::SearchStats,
    tokenizer::PathTokenizer,
    tokens::Token,
    value::PathTarget,
};

/// Stateless path resolver
///
/// Holds only its configuration, so one instance can be shared freely across
/// threads and calls.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    config: ResolverConfig,
}

impl Resolver {
    /// Create a resolver over a validated configuration
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` if the root marker is empty or contains
    /// path syntax, or if the step budget is zero.
    pub fn new(config: ResolverConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Tokenize `path`, enforcing the configured root marker
    ///
    /// # Errors
    ///
    /// Returns a `Syntax` or `RootMarker` error for malformed paths.
    pub fn tokenize(&self, path: &str) -> PathResult<Vec<Token>> {
        PathTokenizer::new(path)
            .with_root_marker(self.config.root_marker.as_deref())
            .tokenize()
    }

    /// Resolve `path` against `root`, or `None` if no resolution exists
    #[must_use]
    pub fn resolve<V: PathTarget>(&self, path: &str, root: &V) -> Option<ResolvedPath> {
        match self.try_resolve(path, root) {
            Ok(resolved) => Some(resolved),
            Err(error) => {
                log::debug!("path '{path}' not resolved: {error}");
                None
            }
        }
    }

    /// Resolve `path` against `root`, keeping the reason for failure
    ///
    /// # Errors
    ///
    /// - `Syntax` / `RootMarker` if the path is malformed
    /// - `Unresolvable` if no key sequence in `root` matches
    /// - `BudgetExhausted` if the configured step budget ran out
    pub fn try_resolve<V: PathTarget>(&self, path: &str, root: &V) -> PathResult<ResolvedPath> {
        self.resolve_with_stats(path, root).0
    }

    /// Resolve an already tokenized path
    #[must_use]
    pub fn resolve_tokens<V: PathTarget>(&self, tokens: &[Token], root: &V) -> Option<ResolvedPath> {
        let mut stats = SearchStats::default();
        match search::search(tokens, root, self.config.max_steps, &mut stats) {
            Ok(found) => found,
            Err(error) => {
                log::debug!("token search abandoned: {error}");
                None
            }
        }
    }

    /// Resolve `path` and report what the search cost
    pub fn resolve_with_stats<V: PathTarget>(
        &self,
        path: &str,
        root: &V,
    ) -> (PathResult<ResolvedPath>, SearchStats) {
        let mut stats = SearchStats::default();

        let tokens = match self.tokenize(path) {
            Ok(tokens) => tokens,
            Err(error) => return (Err(error), stats),
        };

        let outcome = search::search(&tokens, root, self.config.max_steps, &mut stats)
            .and_then(|found| found.ok_or_else(|| unresolvable_error(path)));

        if let Err(error) = &outcome {
            if error.kind() == ErrorKind::BudgetExhausted {
                tracing::warn!(
                    path,
                    lookups = stats.lookups,
                    backtracks = stats.backtracks,
                    "path resolution abandoned after exhausting its step budget"
                );
            }
        }

        (outcome, stats)
    }
}
