//! Configured path translator

use dotpath_resolver::{
    ConfigResult, PathResult, PathTarget, ResolvedPath, Resolver, ResolverConfig, SearchStats,
    Token,
};

/// Path translator built by [`TranslatorBuilder`](super::TranslatorBuilder)
///
/// Cheap to clone and safe to share between threads; it holds nothing but
/// its configuration.
#[derive(Debug, Clone, Default)]
pub struct PathTranslator {
    resolver: Resolver,
    debug_enabled: bool,
}

impl PathTranslator {
    pub(crate) fn new(config: ResolverConfig, debug_enabled: bool) -> ConfigResult<Self> {
        Ok(Self {
            resolver: Resolver::new(config)?,
            debug_enabled,
        })
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &ResolverConfig {
        self.resolver.config()
    }

    /// Map `path` onto the location it names in `root`
    ///
    /// Returns `None` when the path is malformed or nothing in `root` matches.
    #[must_use]
    pub fn resolve<V: PathTarget>(&self, path: &str, root: &V) -> Option<ResolvedPath> {
        self.try_resolve(path, root).ok()
    }

    /// Like [`resolve`](Self::resolve), keeping the reason for failure
    ///
    /// # Errors
    ///
    /// Returns the tokenizer or search error that prevented resolution.
    pub fn try_resolve<V: PathTarget>(&self, path: &str, root: &V) -> PathResult<ResolvedPath> {
        let (outcome, stats) = self.resolver.resolve_with_stats(path, root);
        if self.debug_enabled {
            log_outcome(path, &outcome, &stats);
        }
        outcome
    }

    /// Resolve and report what the search cost
    pub fn resolve_with_stats<V: PathTarget>(
        &self,
        path: &str,
        root: &V,
    ) -> (PathResult<ResolvedPath>, SearchStats) {
        self.resolver.resolve_with_stats(path, root)
    }

    /// Tokenize `path` without resolving it
    ///
    /// # Errors
    ///
    /// Returns a `Syntax` or `RootMarker` error for malformed paths.
    pub fn tokenize(&self, path: &str) -> PathResult<Vec<Token>> {
        self.resolver.tokenize(path)
    }
}

fn log_outcome(path: &str, outcome: &PathResult<ResolvedPath>, stats: &SearchStats) {
    match outcome {
        Ok(resolved) => log::debug!(
            "translated '{}' to {} ({} lookups, {} backtracks)",
            path,
            resolved,
            stats.lookups,
            stats.backtracks
        ),
        Err(error) => log::debug!(
            "could not translate '{}': {} ({} lookups, {} backtracks)",
            path,
            error,
            stats.lookups,
            stats.backtracks
        ),
    }
}
