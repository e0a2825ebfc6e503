//! ENG parse orchestration and the user name override

use tracing::{debug, info, warn};

use super::ballistics::derive;
use super::curve::{CurveScan, locate_header};
use super::header::HeaderLine;
use crate::common::field_parsers::{base_filename, split_lines};
use crate::common::report::Diagnostics;
use crate::common::usable_source;
use crate::config::ParserConfig;
use crate::constants::{ENG_MIN_CURVE_POINTS, ENG_SCHEMA, messages};
use crate::models::{EngPayload, EngRecord, EngWrapper, Source, SourceType};

/// Parser for ENG thrust-curve files
#[derive(Debug, Clone, Default)]
pub struct EngParser {
    config: ParserConfig,
}

impl EngParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn parse(
        &self,
        source_text: &str,
        source_type: SourceType,
        original_filename: &str,
    ) -> EngWrapper {
        let source = Source::new(source_type, original_filename);

        let Some(text) = usable_source(source_text) else {
            return EngWrapper::failed(
                ENG_SCHEMA,
                source,
                Diagnostics::from_error(messages::NO_INPUT),
            );
        };

        let lines = split_lines(text);
        let Some((header_position, header_text)) = locate_header(&lines) else {
            return EngWrapper::failed(
                ENG_SCHEMA,
                source,
                Diagnostics::from_error(messages::ENG_NO_HEADER),
            );
        };

        let header_line = match HeaderLine::parse(header_text) {
            Ok(parsed) => parsed,
            Err(message) => {
                warn!("Rejected ENG header: {}", header_text);
                return EngWrapper::failed(ENG_SCHEMA, source, Diagnostics::from_error(message));
            }
        };

        let mut diagnostics = Diagnostics::new();
        for field in &header_line.malformed {
            if self.config.strict_header_numerics {
                diagnostics.error(field.message());
            } else {
                debug!("ENG header {} stored as null: {:?}", field.field, field.token);
            }
        }

        let scan = CurveScan::scan(&lines[header_position + 1..]);
        for skipped in scan.skipped {
            diagnostics.warn(skipped);
        }

        if scan.points.len() < ENG_MIN_CURVE_POINTS {
            diagnostics.error(messages::ENG_TOO_FEW_POINTS);
        }

        let header = header_line.header;
        let name = self.resolve_name(&header.designation, source_type, original_filename);
        if header.designation.trim().is_empty() {
            diagnostics.warn(messages::ENG_DESIGNATION_EMPTY);
        }

        if diagnostics.has_errors() {
            return EngWrapper::failed(ENG_SCHEMA, source, diagnostics);
        }

        let derived = derive(&scan.points);
        info!(
            "Parsed ENG curve {} with {} points, class {}",
            name, derived.point_count, derived.motor_class.class_letter
        );

        EngWrapper::assemble(
            ENG_SCHEMA,
            source,
            diagnostics,
            EngPayload {
                eng: Some(EngRecord {
                    name,
                    header,
                    curve: scan.points,
                    derived,
                }),
            },
        )
    }

    /// Designation, else the uploaded file's base name, else the fallback
    fn resolve_name(
        &self,
        designation: &str,
        source_type: SourceType,
        original_filename: &str,
    ) -> String {
        let designation = designation.trim();
        if !designation.is_empty() {
            return designation.to_string();
        }

        if source_type == SourceType::File {
            let from_file = base_filename(original_filename);
            if !from_file.is_empty() {
                return from_file;
            }
        }

        self.config.eng_fallback_name.clone()
    }
}

/// Parse an ENG file with the default configuration
pub fn parse_eng_text(
    source_text: &str,
    source_type: SourceType,
    original_filename: &str,
) -> EngWrapper {
    EngParser::new().parse(source_text, source_type, original_filename)
}

impl EngWrapper {
    /// Replace the engine name with a user-supplied one.
    ///
    /// Returns whether the override was applied.
    pub fn apply_name_override(&mut self, override_name: &str) -> bool {
        let name = override_name.trim();
        let Some(eng) = self.payload.eng.as_mut() else {
            return false;
        };
        if name.is_empty() {
            return false;
        }

        eng.name = name.to_string();
        self.push_warning(messages::ENG_NAME_OVERRIDDEN);

        true
    }
}
