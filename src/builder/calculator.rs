//! Builder for constructing calculator sessions.

use crate::builder::error::BuildError;
use crate::config::CalculatorConfig;
use crate::core::FormatOptions;
use crate::math::AngleMode;
use crate::session::Calculator;
use crate::storage::KeyValueStore;
use crate::theme::SystemPreferences;
use stillwater::validation::Validation;

/// Builder for [`Calculator`] sessions with a fluent API.
///
/// # Example
///
/// ```rust
/// use abacus::builder::CalculatorBuilder;
/// use abacus::math::AngleMode;
/// use abacus::storage::InMemoryStore;
///
/// let mut calc = CalculatorBuilder::new()
///     .store(InMemoryStore::new())
///     .angle_mode(AngleMode::Radians)
///     .history_capacity(10)
///     .build()
///     .unwrap();
///
/// calc.press_line("0 cos").unwrap();
/// assert_eq!(calc.display(), "1");
/// assert_eq!(calc.history().capacity(), 10);
/// ```
pub struct CalculatorBuilder<K: KeyValueStore> {
    store: Option<K>,
    config: CalculatorConfig,
    system: SystemPreferences,
}

impl<K: KeyValueStore> CalculatorBuilder<K> {
    pub fn new() -> Self {
        Self {
            store: None,
            config: CalculatorConfig::default(),
            system: SystemPreferences::default(),
        }
    }

    /// Set the backing store (required).
    pub fn store(mut self, store: K) -> Self {
        self.store = Some(store);
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: CalculatorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn angle_mode(mut self, mode: AngleMode) -> Self {
        self.config.angle_mode = mode;
        self
    }

    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.config.history_capacity = capacity;
        self
    }

    pub fn format(mut self, format: FormatOptions) -> Self {
        self.config.format = format;
        self
    }

    /// Dark-mode and reduced-motion preferences of the host.
    pub fn system_preferences(mut self, system: SystemPreferences) -> Self {
        self.system = system;
        self
    }

    /// Build the session.
    /// Returns an error if the store is missing or the configuration is
    /// invalid; every violation is reported at once.
    pub fn build(self) -> Result<Calculator<K>, BuildError> {
        let store = self.store.ok_or(BuildError::MissingStore)?;

        if let Validation::Failure(errors) = self.config.validate() {
            return Err(BuildError::InvalidConfig(errors.iter().cloned().collect()));
        }

        Ok(Calculator::from_parts(store, &self.config, self.system))
    }
}

impl<K: KeyValueStore> Default for CalculatorBuilder<K> {
    fn default() -> Self {
        Self::new()
    }
}
