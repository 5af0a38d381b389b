//! Resolver configuration
//!
//! Plain configuration struct with defaults and validation. The api package
//! wraps it in a fluent builder.

/// Configuration validation result type
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid root marker: {0}")]
    InvalidRootMarker(String),

    #[error("Invalid search budget: {0}")]
    InvalidBudget(String),
}

/// Configuration validation trait
pub trait Validator {
    /// Validates the configuration settings
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` variant if any validation fails:
    /// - `InvalidRootMarker` - if the marker is empty or contains `.` or `[`
    /// - `InvalidBudget` - if the step budget is zero
    fn validate(&self) -> ConfigResult<()>;
}

/// Settings for tokenizing and resolving paths
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Required first segment; `None` discards whatever the path starts with
    pub root_marker: Option<String>,
    /// Maximum candidate lookups per resolution; `None` is unbounded
    pub max_steps: Option<u64>,
}

impl ResolverConfig {
    /// Conventional marker emitted by JSON-schema validators
    pub const INSTANCE_MARKER: &'static str = "instance";

    #[inline]
    #[must_use]
    pub fn with_root_marker(mut self, marker: impl Into<String>) -> Self {
        self.root_marker = Some(marker.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn with_max_steps(mut self, max_steps: u64) -> Self {
        self.max_steps = Some(max_steps);
        self
    }
}

impl Validator for ResolverConfig {
    fn validate(&self) -> ConfigResult<()> {
        if let Some(marker) = &self.root_marker {
            if marker.is_empty() {
                return Err(ConfigurationError::InvalidRootMarker(
                    "root marker cannot be empty".to_string(),
                ));
            }
            if marker.contains(['.', '[']) {
                return Err(ConfigurationError::InvalidRootMarker(format!(
                    "root marker '{marker}' cannot contain '.' or '['"
                )));
            }
        }

        if self.max_steps == Some(0) {
            return Err(ConfigurationError::InvalidBudget(
                "max_steps cannot be zero".to_string(),
            ));
        }

        Ok(())
    }
}
