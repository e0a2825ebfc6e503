//! ENG header line parsing
//!
//! The header is the first non-blank, non-comment line of an ENG file:
//! `designation diameter length delay prop_mass total_mass [manufacturer...]`.

use crate::common::field_parsers::{parse_number_strict, tokens};
use crate::constants::{ENG_HEADER_MIN_FIELDS, messages};
use crate::models::EngHeader;

/// A numeric header field whose token did not parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedField {
    pub field: &'static str,
    pub token: String,
}

impl MalformedField {
    pub fn message(&self) -> String {
        format!("Invalid {} in ENG header: \"{}\"", self.field, self.token)
    }
}

/// Parsed header plus the numeric fields that were stored as `None`
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderLine {
    pub header: EngHeader,
    pub malformed: Vec<MalformedField>,
}

impl HeaderLine {
    /// Split a header line into its fields.
    ///
    /// Fails only when there are fewer than six tokens. Unparseable numerics
    /// become `None` and are listed in `malformed`.
    pub fn parse(line: &str) -> Result<Self, String> {
        let parts = tokens(line);
        if parts.len() < ENG_HEADER_MIN_FIELDS {
            return Err(messages::ENG_INVALID_HEADER.to_string());
        }

        let mut malformed = Vec::new();
        let mut numeric = |field: &'static str, token: &str| {
            let parsed = parse_number_strict(token);
            if parsed.is_none() {
                malformed.push(MalformedField {
                    field,
                    token: token.to_string(),
                });
            }
            parsed
        };

        let header = EngHeader {
            designation: parts[0].to_string(),
            diameter: numeric("diameter", parts[1]),
            length: numeric("length", parts[2]),
            delay: numeric("delay", parts[3]),
            prop_mass: numeric("prop_mass", parts[4]),
            total_mass: numeric("total_mass", parts[5]),
            manufacturer: parts[ENG_HEADER_MIN_FIELDS..].join(" "),
        };

        Ok(Self { header, malformed })
    }
}
