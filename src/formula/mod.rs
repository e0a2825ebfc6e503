//! BurnSim propellant (formula) parser
//!
//! Reads one or more `<Propellant>` elements, validates every record,
//! assigns deduplicated slug identifiers and checks plausibility ranges.
//!
//! ## Architecture
//!
//! - [`parser`] - orchestration and wrapper assembly
//! - [`record`] - raw attribute extraction and normalization
//! - [`ranges`] - plausibility range checks
//!
//! ## Usage
//!
//! ```rust
//! use burnsim_ingest::{SourceType, parse_formula_text};
//!
//! let wrapper = parse_formula_text(
//!     r#"<Propellant Name="Blue Thunder" ISPStar="180" A="0.05" N="0.3" Density="1.7" SpecificHeatRatio="1.2"/>"#,
//!     SourceType::Paste,
//!     "",
//! );
//! assert_eq!(wrapper.payload.propellants[0].propellant_id, "blue_thunder");
//! ```

pub mod parser;
pub mod ranges;
pub mod record;

#[cfg(test)]
mod tests;

pub use parser::{FormulaParser, parse_formula_text};
pub use record::RawPropellant;
