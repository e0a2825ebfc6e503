//! Core data structures for BurnSim ingest.
//!
//! Defines the schema-tagged wrapper every parser returns, its provenance and
//! status blocks, and the propellant, motor and ENG records carried as
//! payload. Field names match the JSON produced for the rendering layer.

use crate::common::report::Diagnostics;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the source text reached the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    File,
    Paste,
}

impl SourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::File => "file",
            SourceType::Paste => "paste",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(SourceType::File),
            "paste" => Ok(SourceType::Paste),
            other => Err(format!("Unknown source type: {}", other)),
        }
    }
}

/// Provenance block of a wrapper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub source_type: SourceType,
    pub original_filename: String,
    #[serde(with = "iso_millis")]
    pub ingested_utc: DateTime<Utc>,
}

impl Source {
    /// Provenance stamped with the current time
    pub fn new(source_type: SourceType, original_filename: &str) -> Self {
        Self {
            source_type,
            original_filename: original_filename.to_string(),
            ingested_utc: Utc::now(),
        }
    }
}

/// Overall outcome of a parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseStatus {
    Ok,
    Warning,
    Error,
}

impl fmt::Display for ParseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ParseStatus::Ok => "ok",
            ParseStatus::Warning => "warning",
            ParseStatus::Error => "error",
        };
        f.write_str(text)
    }
}

/// Status block of a wrapper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseOutcome {
    pub status: ParseStatus,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ParseOutcome {
    /// Derive the status from the collected messages
    pub fn from_diagnostics(diagnostics: Diagnostics) -> Self {
        let (errors, warnings) = diagnostics.into_parts();
        let status = if !errors.is_empty() {
            ParseStatus::Error
        } else if !warnings.is_empty() {
            ParseStatus::Warning
        } else {
            ParseStatus::Ok
        };

        Self {
            status,
            errors,
            warnings,
        }
    }
}

/// Schema-tagged envelope returned by every parser
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseWrapper<P> {
    pub schema: String,
    pub schema_version: String,
    pub source: Source,
    pub parse: ParseOutcome,
    #[serde(flatten)]
    pub payload: P,
}

impl<P: Default> ParseWrapper<P> {
    /// Assemble a wrapper, dropping the payload when any error was collected
    pub fn assemble(schema: &str, source: Source, diagnostics: Diagnostics, payload: P) -> Self {
        let parse = ParseOutcome::from_diagnostics(diagnostics);
        let payload = if parse.status == ParseStatus::Error {
            P::default()
        } else {
            payload
        };

        Self {
            schema: schema.to_string(),
            schema_version: crate::constants::SCHEMA_VERSION.to_string(),
            source,
            parse,
            payload,
        }
    }

    /// Wrapper for a parse that failed before producing anything
    pub fn failed(schema: &str, source: Source, diagnostics: Diagnostics) -> Self {
        Self::assemble(schema, source, diagnostics, P::default())
    }

    pub fn status(&self) -> ParseStatus {
        self.parse.status
    }

    pub fn is_error(&self) -> bool {
        self.parse.status == ParseStatus::Error
    }

    /// Record a post-hoc warning; never downgrades an error
    pub(crate) fn push_warning(&mut self, message: impl Into<String>) {
        self.parse.warnings.push(message.into());
        if self.parse.status != ParseStatus::Error {
            self.parse.status = ParseStatus::Warning;
        }
    }
}

// =============================================================================
// Formula payload
// =============================================================================

/// Normalized propellant definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropellantRecord {
    pub propellant_id: String,
    pub name: String,
    pub isp_star: f64,
    pub burn_rate_a: f64,
    pub burn_rate_n: f64,
    pub density: f64,
    pub specific_heat_ratio: f64,
    pub notes: String,
    /// 1-based position in the source
    pub original_index: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormulaPayload {
    pub propellants: Vec<PropellantRecord>,
}

pub type FormulaWrapper = ParseWrapper<FormulaPayload>;

// =============================================================================
// Motor payload
// =============================================================================

/// Motor attributes exactly as given in the source
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MotorHeader {
    pub name: Option<String>,
    pub diameter_mm: Option<String>,
    pub length: Option<String>,
    pub delays: Option<String>,
    pub hardware_weight: Option<String>,
    pub mfg_code: Option<String>,
    pub thrust_method: Option<String>,
    pub thrust_coef_given: Option<String>,
    pub units_linear: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Nozzle {
    pub throat_dia: Option<String>,
    pub exit_dia: Option<String>,
    pub ambient_pressure: Option<String>,
    pub nozzle_efficiency: Option<String>,
}

/// Propellant definition inlined inside a grain
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmbeddedPropellant {
    pub name: Option<String>,
    pub density: Option<String>,
    pub isp_star: Option<String>,
    pub ballistic_a: Option<String>,
    pub ballistic_n: Option<String>,
    pub specific_heat_ratio: Option<String>,
    pub molar_mass: Option<String>,
    pub combustion_temp: Option<String>,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrainRecord {
    /// 1-based position within the motor
    pub index: usize,
    #[serde(rename = "type")]
    pub grain_type: Option<String>,
    pub type_label: String,
    pub length: Option<String>,
    pub diameter: Option<String>,
    pub ends_inhibited: Option<String>,
    pub propellant_ref: Option<String>,
    pub core_diameter: Option<String>,
    pub propellant: Option<EmbeddedPropellant>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotorRecord {
    pub motor_id: String,
    pub name: String,
    pub header: MotorHeader,
    pub nozzle: Option<Nozzle>,
    pub grains: Vec<GrainRecord>,
    pub motor_notes: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MotorPayload {
    pub motor: Option<MotorRecord>,
}

pub type MotorWrapper = ParseWrapper<MotorPayload>;

// =============================================================================
// ENG payload
// =============================================================================

/// ENG header line; numerics that failed to parse are `None`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngHeader {
    pub designation: String,
    pub diameter: Option<f64>,
    pub length: Option<f64>,
    pub delay: Option<f64>,
    pub prop_mass: Option<f64>,
    pub total_mass: Option<f64>,
    pub manufacturer: String,
}

/// One thrust-curve sample (seconds, newtons)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub time: f64,
    pub thrust: f64,
}

/// Total-impulse classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotorClass {
    pub class_letter: String,
    pub min_ns: f64,
    pub max_ns: f64,
    pub percent: f64,
}

/// Ballistics computed from the thrust curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngDerived {
    pub point_count: usize,
    pub burn_time_seconds: f64,
    pub total_impulse_ns: f64,
    pub avg_thrust_n: f64,
    pub avg_thrust_lbf: f64,
    pub max_thrust_n: f64,
    pub max_thrust_lbf: f64,
    pub initial_thrust_n: f64,
    pub peak_thrust_n: f64,
    /// 0-based index of the peak sample, -1 when there is none
    pub peak_index: i64,
    pub thrust_delta_percent_of_peak: f64,
    pub motor_class: MotorClass,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngRecord {
    pub name: String,
    pub header: EngHeader,
    pub curve: Vec<CurvePoint>,
    pub derived: EngDerived,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngPayload {
    pub eng: Option<EngRecord>,
}

pub type EngWrapper = ParseWrapper<EngPayload>;

/// `ingested_utc` as `2024-05-01T12:00:00.000Z`
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&text)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
