//! Motor name resolution
//!
//! Ordered fallback: the `Name` attribute, then the uploaded file's base
//! name, then a name synthesized from the manufacturer code and dimensions.

use crate::common::field_parsers::base_filename;
use crate::constants::{FALLBACK_MOTOR_MFG, messages};
use crate::models::{MotorHeader, SourceType};

/// Where a resolved motor name came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameOrigin {
    Attribute,
    Filename,
    Synthesized,
}

impl NameOrigin {
    /// Warning owed to the user for this origin
    pub fn warning(&self) -> Option<&'static str> {
        match self {
            NameOrigin::Attribute => None,
            NameOrigin::Filename => Some(messages::MOTOR_NAME_FROM_FILENAME),
            NameOrigin::Synthesized => Some(messages::MOTOR_NAME_SYNTHESIZED),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedName {
    pub name: String,
    pub origin: NameOrigin,
}

pub fn resolve_motor_name(
    header: &MotorHeader,
    source_type: SourceType,
    original_filename: &str,
) -> ResolvedName {
    let given = header.name.as_deref().map(str::trim).unwrap_or_default();
    if !given.is_empty() {
        return ResolvedName {
            name: given.to_string(),
            origin: NameOrigin::Attribute,
        };
    }

    if source_type == SourceType::File {
        let from_file = base_filename(original_filename);
        if !from_file.is_empty() {
            return ResolvedName {
                name: from_file,
                origin: NameOrigin::Filename,
            };
        }
    }

    ResolvedName {
        name: synthesized_name(header),
        origin: NameOrigin::Synthesized,
    }
}

/// `<mfg>_<diameter>mm_<length>`, e.g. `at_29mm_194`
pub fn synthesized_name(header: &MotorHeader) -> String {
    let mfg = header
        .mfg_code
        .as_deref()
        .map(|code| code.trim().to_lowercase())
        .filter(|code| !code.is_empty())
        .unwrap_or_else(|| FALLBACK_MOTOR_MFG.to_string());

    let dimension = |raw: &Option<String>| {
        raw.as_deref()
            .filter(|value| !value.is_empty())
            .unwrap_or("0")
            .trim()
            .to_string()
    };

    format!(
        "{}_{}mm_{}",
        mfg,
        dimension(&header.diameter_mm),
        dimension(&header.length)
    )
}
