//! Propellant parse orchestration
//!
//! Runs the forgiving markup parse, normalizes every `<Propellant>`,
//! deduplicates ids in input order and applies the range checks before
//! assembling the wrapper.

use tracing::{debug, info, warn};

use super::ranges::range_violations;
use super::record::RawPropellant;
use crate::common::identifiers::{Allocation, IdAllocator};
use crate::common::report::Diagnostics;
use crate::common::usable_source;
use crate::common::xml::{MarkupInput, elements_named};
use crate::config::ParserConfig;
use crate::constants::{FORMULA_SCHEMA, messages};
use crate::models::{FormulaPayload, FormulaWrapper, PropellantRecord, Source, SourceType};

/// Parser for BurnSim propellant definitions
#[derive(Debug, Clone, Default)]
pub struct FormulaParser {
    config: ParserConfig,
}

impl FormulaParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse propellant markup into a wrapper; content problems are reported
    /// inside the wrapper, never as a Rust error
    pub fn parse(
        &self,
        source_text: &str,
        source_type: SourceType,
        original_filename: &str,
    ) -> FormulaWrapper {
        let source = Source::new(source_type, original_filename);

        let Some(text) = usable_source(source_text) else {
            return FormulaWrapper::failed(
                FORMULA_SCHEMA,
                source,
                Diagnostics::from_error(messages::NO_INPUT),
            );
        };

        let input = MarkupInput::new(text, &self.config.synthetic_root);
        let parsed = input.parse();
        let Some(document) = parsed.document() else {
            warn!("Propellant markup could not be parsed");
            return FormulaWrapper::failed(
                FORMULA_SCHEMA,
                source,
                Diagnostics::from_error(messages::UNPARSEABLE_MARKUP),
            );
        };
        if parsed.is_wrapped() {
            debug!("Propellant markup parsed inside synthetic root");
        }

        let raw_records: Vec<RawPropellant> = elements_named(document.root(), "Propellant")
            .map(RawPropellant::extract)
            .collect();

        if raw_records.is_empty() {
            return FormulaWrapper::failed(
                FORMULA_SCHEMA,
                source,
                Diagnostics::from_error(messages::NO_PROPELLANT_NODES),
            );
        }

        let mut diagnostics = Diagnostics::new();
        let mut records = Vec::with_capacity(raw_records.len());
        for (position, raw) in raw_records.iter().enumerate() {
            match raw.normalize(position + 1) {
                Ok(record) => records.push(record),
                Err(errors) => diagnostics.extend_errors(errors),
            }
        }

        if diagnostics.has_errors() {
            debug!(
                "Rejected propellant input with {} errors",
                diagnostics.errors().len()
            );
            return FormulaWrapper::failed(FORMULA_SCHEMA, source, diagnostics);
        }

        self.assign_ids(&mut records, &mut diagnostics);
        self.check_ranges(&records, &mut diagnostics);

        info!("Parsed {} propellants", records.len());

        FormulaWrapper::assemble(
            FORMULA_SCHEMA,
            source,
            diagnostics,
            FormulaPayload {
                propellants: records,
            },
        )
    }

    /// Replace each base slug with its deduplicated id, warning per collision
    fn assign_ids(&self, records: &mut [PropellantRecord], diagnostics: &mut Diagnostics) {
        let mut ids = IdAllocator::new();

        for record in records.iter_mut() {
            match ids.allocate(&record.propellant_id) {
                Allocation::Fresh(_) => {}
                Allocation::Renamed { base, assigned } => {
                    diagnostics.warn(format!(
                        "Duplicate propellant id detected for \"{}\", assigned \"{}\"",
                        base, assigned
                    ));
                    record.propellant_id = assigned;
                }
            }
        }
    }

    fn check_ranges(&self, records: &[PropellantRecord], diagnostics: &mut Diagnostics) {
        for record in records {
            for violation in range_violations(record, &self.config.propellant_ranges) {
                if self.config.range_violations_fatal {
                    diagnostics.error(violation);
                } else {
                    diagnostics.warn(violation);
                }
            }
        }
    }
}

/// Parse propellant markup with the default configuration
pub fn parse_formula_text(
    source_text: &str,
    source_type: SourceType,
    original_filename: &str,
) -> FormulaWrapper {
    FormulaParser::new().parse(source_text, source_type, original_filename)
}
