//! Calculator configuration loaded from TOML.

use crate::core::{FormatOptions, DEFAULT_HISTORY_CAPACITY};
use crate::math::AngleMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Largest number of significant digits an `f64` can carry.
const MAX_DIGITS: usize = 17;

/// Tunable settings of a calculator session.
///
/// Every field has a default, so an empty file is a valid configuration.
///
/// # Example
///
/// ```rust
/// use abacus::config::CalculatorConfig;
/// use abacus::math::AngleMode;
///
/// let config = CalculatorConfig::from_toml_str(
///     r#"
///     angle_mode = "radians"
///
///     [format]
///     significant_digits = 10
///     "#,
/// )
/// .unwrap();
///
/// assert_eq!(config.angle_mode, AngleMode::Radians);
/// assert_eq!(config.history_capacity, 50);
/// assert_eq!(config.format.significant_digits, 10);
/// assert_eq!(config.format.exponential_digits, 6);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub angle_mode: AngleMode,
    pub history_capacity: usize,
    pub format: FormatOptions,
    /// Where the CLI keeps its persisted state
    pub storage_path: Option<PathBuf>,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            angle_mode: AngleMode::default(),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            format: FormatOptions::default(),
            storage_path: None,
        }
    }
}

/// A single reason a configuration is unusable.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("history_capacity must be at least 1")]
    ZeroHistoryCapacity,

    #[error("format.significant_digits must be between 1 and 17 (got {0})")]
    SignificantDigits(usize),

    #[error("format.exponential_digits must be at most 17 (got {0})")]
    ExponentialDigits(usize),

    #[error("format.{name} must be a positive finite number (got {value})")]
    Threshold { name: &'static str, value: f64 },

    #[error("format.lower_threshold ({lower}) must be below format.upper_threshold ({upper})")]
    ThresholdOrder { lower: f64, upper: f64 },
}

/// Errors that can occur when loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {}", describe(.0))]
    Invalid(Vec<ConfigViolation>),
}

fn describe(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl CalculatorConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validated()
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Check every setting, accumulating all violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let format = &self.format;
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();

        checks.push(ensure(
            self.history_capacity >= 1,
            ConfigViolation::ZeroHistoryCapacity,
        ));
        checks.push(ensure(
            (1..=MAX_DIGITS).contains(&format.significant_digits),
            ConfigViolation::SignificantDigits(format.significant_digits),
        ));
        checks.push(ensure(
            format.exponential_digits <= MAX_DIGITS,
            ConfigViolation::ExponentialDigits(format.exponential_digits),
        ));

        let thresholds = [
            ("lower_threshold", format.lower_threshold),
            ("upper_threshold", format.upper_threshold),
        ];
        for (name, value) in thresholds {
            checks.push(ensure(
                value.is_finite() && value > 0.0,
                ConfigViolation::Threshold { name, value },
            ));
        }

        // NaN compares false, so a broken threshold is not reported twice.
        if format.lower_threshold >= format.upper_threshold {
            checks.push(Validation::fail(ConfigViolation::ThresholdOrder {
                lower: format.lower_threshold,
                upper: format.upper_threshold,
            }));
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Validate, converting failures into [`ConfigError::Invalid`].
    pub fn validated(self) -> Result<Self, ConfigError> {
        match self.validate() {
            Validation::Success(()) => Ok(self),
            Validation::Failure(errors) => {
                Err(ConfigError::Invalid(errors.iter().cloned().collect()))
            }
        }
    }
}

fn ensure(
    condition: bool,
    violation: ConfigViolation,
) -> Validation<(), NonEmptyVec<ConfigViolation>> {
    if condition {
        Validation::success(())
    } else {
        Validation::fail(violation)
    }
}
