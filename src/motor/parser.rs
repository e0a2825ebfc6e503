//! Motor parse orchestration and the user name override

use tracing::{debug, info, warn};

use super::extraction::{extract_grains, extract_header, extract_motor_notes, extract_nozzle};
use super::naming::resolve_motor_name;
use crate::common::identifiers::{IdAllocator, slugify};
use crate::common::report::Diagnostics;
use crate::common::usable_source;
use crate::common::xml::{MarkupInput, first_element_named};
use crate::config::ParserConfig;
use crate::constants::{MOTOR_SCHEMA, messages};
use crate::models::{MotorPayload, MotorRecord, MotorWrapper, Source, SourceType};

/// Parser for BurnSim motor definitions
#[derive(Debug, Clone, Default)]
pub struct MotorParser {
    config: ParserConfig,
}

impl MotorParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse with a fresh id scope
    pub fn parse(
        &self,
        source_text: &str,
        source_type: SourceType,
        original_filename: &str,
    ) -> MotorWrapper {
        let mut ids = IdAllocator::new();
        self.parse_with_allocator(source_text, source_type, original_filename, &mut ids)
    }

    /// Parse, drawing the motor id from a caller-owned allocator so ids stay
    /// unique across a batch of motors
    pub fn parse_with_allocator(
        &self,
        source_text: &str,
        source_type: SourceType,
        original_filename: &str,
        ids: &mut IdAllocator,
    ) -> MotorWrapper {
        let source = Source::new(source_type, original_filename);

        let Some(text) = usable_source(source_text) else {
            return MotorWrapper::failed(
                MOTOR_SCHEMA,
                source,
                Diagnostics::from_error(messages::NO_INPUT),
            );
        };

        let input = MarkupInput::new(text, &self.config.synthetic_root);
        let parsed = input.parse();
        let Some(document) = parsed.document() else {
            warn!("Motor markup could not be parsed");
            return MotorWrapper::failed(
                MOTOR_SCHEMA,
                source,
                Diagnostics::from_error(messages::UNPARSEABLE_MARKUP),
            );
        };

        let Some(motor) = first_element_named(document.root(), "Motor") else {
            return MotorWrapper::failed(
                MOTOR_SCHEMA,
                source,
                Diagnostics::from_error(messages::NO_MOTOR_NODE),
            );
        };

        let mut diagnostics = Diagnostics::new();
        let header = extract_header(motor);

        let resolved = resolve_motor_name(&header, source_type, original_filename);
        if let Some(message) = resolved.origin.warning() {
            warn!("Motor name fell back to {:?}: {}", resolved.origin, resolved.name);
            diagnostics.warn(message);
        }

        let grains = extract_grains(motor);
        if grains.is_empty() {
            diagnostics.error(messages::NO_GRAIN_NODES);
            return MotorWrapper::failed(MOTOR_SCHEMA, source, diagnostics);
        }

        let motor_id = ids.allocate(&slugify(&resolved.name)).into_id();
        debug!("Motor {} has {} grains", motor_id, grains.len());

        let record = MotorRecord {
            motor_id,
            name: resolved.name,
            header,
            nozzle: extract_nozzle(motor),
            grains,
            motor_notes: extract_motor_notes(motor),
        };

        info!(
            "Parsed motor {} with {} grains",
            record.name,
            record.grains.len()
        );

        MotorWrapper::assemble(
            MOTOR_SCHEMA,
            source,
            diagnostics,
            MotorPayload {
                motor: Some(record),
            },
        )
    }
}

/// Parse a motor definition with the default configuration
pub fn parse_motor_text(
    source_text: &str,
    source_type: SourceType,
    original_filename: &str,
) -> MotorWrapper {
    MotorParser::new().parse(source_text, source_type, original_filename)
}

impl MotorWrapper {
    /// Replace the motor name with a user-supplied one.
    ///
    /// Blank overrides and wrappers without a motor are left untouched.
    /// Returns whether the override was applied.
    pub fn apply_name_override(&mut self, override_name: &str) -> bool {
        let name = override_name.trim();
        let Some(motor) = self.payload.motor.as_mut() else {
            return false;
        };
        if name.is_empty() {
            return false;
        }

        motor.name = name.to_string();
        motor.motor_id = slugify(name);
        motor.header.name = Some(name.to_string());
        self.push_warning(messages::MOTOR_NAME_OVERRIDDEN);

        true
    }
}
