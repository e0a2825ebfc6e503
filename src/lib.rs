//! BurnSim Ingest Library
//!
//! Parsers for the three file formats of the BurnSim solid-rocket motor
//! simulator, each producing a schema-tagged JSON wrapper:
//!
//! - Propellant libraries (`<Propellant>` elements) with numeric validation,
//!   plausibility ranges and unique slug ids
//! - Motor definitions (`<Motor>` with nozzle, grains and embedded
//!   propellants) with name fallbacks
//! - ENG thrust curves with derived ballistics and NAR/TRA impulse class
//!
//! Parsers never fail: problems are reported as errors and warnings inside
//! the wrapper, and an error wrapper carries an empty payload.

pub mod common;
pub mod config;
pub mod constants;
pub mod display;
pub mod eng;
pub mod error;
pub mod formula;
pub mod models;
pub mod motor;
pub mod session;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod input;
}

// Re-export commonly used types
pub use common::IdAllocator;
pub use config::{ParserConfig, PropellantRanges, ValueRange};
pub use eng::{EngParser, parse_eng_text};
pub use error::{BurnsimError, Result};
pub use formula::{FormulaParser, parse_formula_text};
pub use models::{
    CurvePoint, EngDerived, EngHeader, EngPayload, EngRecord, EngWrapper, FormulaPayload,
    FormulaWrapper, GrainRecord, MotorClass, MotorHeader, MotorPayload, MotorRecord,
    MotorWrapper, ParseOutcome, ParseStatus, ParseWrapper, PropellantRecord, Source, SourceType,
};
pub use motor::{MotorParser, parse_motor_text};
pub use session::{ParseSession, PropellantTable, SortDirection, SortKey};
