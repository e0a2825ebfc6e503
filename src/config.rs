//! Configuration management and validation.
//!
//! Provides the parser configuration shared by the three front ends:
//! propellant plausibility ranges, the synthetic root used by the forgiving
//! markup parse, ENG naming fallbacks, and the two switches that promote
//! normally non-fatal findings to errors.

use crate::constants::{DEFAULT_ENG_FALLBACK_NAME, DEFAULT_SYNTHETIC_ROOT, propellant_ranges};
use crate::error::{BurnsimError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Inclusive plausibility range for one property
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    const fn from_pair(pair: (f64, f64)) -> Self {
        Self::new(pair.0, pair.1)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Plausibility ranges for the five numeric propellant properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropellantRanges {
    pub isp_star: ValueRange,
    pub burn_rate_a: ValueRange,
    pub burn_rate_n: ValueRange,
    pub density: ValueRange,
    pub specific_heat_ratio: ValueRange,
}

impl Default for PropellantRanges {
    fn default() -> Self {
        Self {
            isp_star: ValueRange::from_pair(propellant_ranges::ISP_STAR),
            burn_rate_a: ValueRange::from_pair(propellant_ranges::BURN_RATE_A),
            burn_rate_n: ValueRange::from_pair(propellant_ranges::BURN_RATE_N),
            density: ValueRange::from_pair(propellant_ranges::DENSITY),
            specific_heat_ratio: ValueRange::from_pair(propellant_ranges::SPECIFIC_HEAT_RATIO),
        }
    }
}

/// Settings shared by all parsers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Plausibility ranges checked after propellant normalization
    pub propellant_ranges: PropellantRanges,

    /// Element name used when retrying markup wrapped in a root
    pub synthetic_root: String,

    /// Name for an ENG motor with no designation and no usable filename
    pub eng_fallback_name: String,

    /// Treat unparseable ENG header numerics as errors instead of nulls
    pub strict_header_numerics: bool,

    /// Report propellant range violations as errors instead of warnings
    pub range_violations_fatal: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            propellant_ranges: PropellantRanges::default(),
            synthetic_root: DEFAULT_SYNTHETIC_ROOT.to_string(),
            eng_fallback_name: DEFAULT_ENG_FALLBACK_NAME.to_string(),
            strict_header_numerics: false,
            range_violations_fatal: false,
        }
    }
}

impl ParserConfig {
    /// Load configuration from a JSON file; missing keys keep their defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(BurnsimError::InputNotFound {
                path: path.to_path_buf(),
            });
        }

        let text = std::fs::read_to_string(path)?;
        let config: ParserConfig = serde_json::from_str(&text)?;
        config.validate()?;

        debug!("Loaded parser configuration from {}", path.display());
        Ok(config)
    }

    /// Check the configuration is internally consistent
    pub fn validate(&self) -> Result<()> {
        let root = self.synthetic_root.trim();
        if root.is_empty()
            || !root
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
            || root.starts_with(|c: char| c.is_ascii_digit() || c == '-')
        {
            return Err(BurnsimError::configuration(format!(
                "synthetic_root '{}' is not a valid element name",
                self.synthetic_root
            )));
        }

        if self.eng_fallback_name.trim().is_empty() {
            return Err(BurnsimError::configuration(
                "eng_fallback_name must not be empty",
            ));
        }

        let ranges = [
            ("isp_star", self.propellant_ranges.isp_star),
            ("burn_rate_a", self.propellant_ranges.burn_rate_a),
            ("burn_rate_n", self.propellant_ranges.burn_rate_n),
            ("density", self.propellant_ranges.density),
            ("specific_heat_ratio", self.propellant_ranges.specific_heat_ratio),
        ];
        for (field, range) in ranges {
            if !(range.min.is_finite() && range.max.is_finite()) || range.min > range.max {
                return Err(BurnsimError::configuration(format!(
                    "range for {} is invalid: {}..{}",
                    field, range.min, range.max
                )));
            }
        }

        Ok(())
    }

    /// Use a different synthetic root element
    pub fn with_synthetic_root(mut self, root: impl Into<String>) -> Self {
        self.synthetic_root = root.into();
        self
    }

    /// Use a different ENG fallback name
    pub fn with_eng_fallback_name(mut self, name: impl Into<String>) -> Self {
        self.eng_fallback_name = name.into();
        self
    }

    /// Make malformed ENG header numerics fatal
    pub fn with_strict_header_numerics(mut self) -> Self {
        self.strict_header_numerics = true;
        self
    }

    /// Make propellant range violations fatal
    pub fn with_fatal_range_violations(mut self) -> Self {
        self.range_violations_fatal = true;
        self
    }

    /// Replace the propellant plausibility ranges
    pub fn with_propellant_ranges(mut self, ranges: PropellantRanges) -> Self {
        self.propellant_ranges = ranges;
        self
    }
}
