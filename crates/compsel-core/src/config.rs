//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Options controlling how selectors are parsed.
///
/// # Defaults
///
/// - `allow_unquoted_strings`: `false`; unquoted values other than `true`
///   and `false` must be numeric literals.
///
/// # Example
///
/// ```
/// use compsel_core::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert!(!config.allow_unquoted_strings());
///
/// let strings = EngineConfig::new(true);
/// assert!(strings.allow_unquoted_strings());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Whether unquoted values are kept as strings instead of numbers.
    allow_unquoted_strings: bool,
}

impl EngineConfig {
    /// Creates a new configuration with explicit values.
    #[must_use]
    pub const fn new(allow_unquoted_strings: bool) -> Self {
        Self {
            allow_unquoted_strings,
        }
    }

    /// Returns whether unquoted values are kept as strings.
    #[must_use]
    pub const fn allow_unquoted_strings(&self) -> bool {
        self.allow_unquoted_strings
    }
}
