//! Fluent `TranslatorBuilder` structure
//!
//! Collects resolver settings through method chaining and validates them
//! once, in [`TranslatorBuilder::build`].

use dotpath_resolver::{ConfigResult, ResolverConfig};

use super::translator::PathTranslator;

/// Fluent builder for a configured [`PathTranslator`]
///
/// ```
/// use dotpath::DotPath;
///
/// let translator = DotPath::builder()
///     .root_marker("instance")
///     .max_steps(10_000)
///     .build()
///     .expect("valid configuration");
///
/// let value = serde_json::json!({ "www.google.com": { "a": "x" } });
/// assert_eq!(
///     translator.resolve("instance.www.google.com.a", &value).map(|p| p.into_keys()),
///     Some(vec!["www.google.com".to_string(), "a".to_string()])
/// );
/// ```
#[derive(Debug, Clone, Default)]
#[must_use = "builders do nothing until `build` is called"]
pub struct TranslatorBuilder {
    /// Resolver settings being assembled
    pub(crate) config: ResolverConfig,
    /// Debug logging enabled flag
    pub(crate) debug_enabled: bool,
}

impl TranslatorBuilder {
    /// Start from the default configuration: any root marker, no step budget
    pub fn new() -> Self {
        Self::default()
    }

    /// Require every path to start with `marker`
    ///
    /// # Arguments
    /// * `marker` - Expected first segment, e.g. `"instance"`
    pub fn root_marker(mut self, marker: impl Into<String>) -> Self {
        self.config.root_marker = Some(marker.into());
        self
    }

    /// Accept and discard any first segment (the default)
    pub fn any_root_marker(mut self) -> Self {
        self.config.root_marker = None;
        self
    }

    /// Abandon a resolution after `max_steps` key lookups
    ///
    /// Bounds the cost of pathological values holding many overlapping
    /// dotted keys at one level. An abandoned search resolves to `None`.
    pub fn max_steps(mut self, max_steps: u64) -> Self {
        self.config.max_steps = Some(max_steps);
        self
    }

    /// Log the outcome of every translation at debug level
    pub fn debug(mut self) -> Self {
        self.debug_enabled = true;
        self
    }

    /// Replace all settings with an existing configuration
    pub fn config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Validate the settings and create the translator
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` if the root marker is empty or contains
    /// path syntax, or if the step budget is zero.
    pub fn build(self) -> ConfigResult<PathTranslator> {
        PathTranslator::new(self.config, self.debug_enabled)
    }
}
