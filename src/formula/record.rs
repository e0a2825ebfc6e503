//! Propellant record extraction and normalization
//!
//! Extraction copies attributes verbatim into a [`RawPropellant`]; nothing
//! is judged at that stage. Normalization then trims, coerces the numerics
//! and reports every problem with the record at once.

use roxmltree::Node;

use crate::common::field_parsers::{parse_number_strict, trimmed_or_empty};
use crate::common::identifiers::slugify;
use crate::common::xml::{attribute, child_text_trimmed};
use crate::models::PropellantRecord;

/// Attributes of one `<Propellant>` element as they appear in the source
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawPropellant {
    pub name: Option<String>,
    pub isp_star: Option<String>,
    pub burn_rate_a: Option<String>,
    pub burn_rate_n: Option<String>,
    pub density: Option<String>,
    pub specific_heat_ratio: Option<String>,

    /// Trimmed text of the first `<Notes>` descendant
    pub notes: String,
}

impl RawPropellant {
    /// Copy the propellant attributes off an element
    pub fn extract(node: Node<'_, '_>) -> Self {
        Self {
            name: attribute(node, "Name"),
            isp_star: attribute(node, "ISPStar"),
            burn_rate_a: attribute(node, "A"),
            burn_rate_n: attribute(node, "N"),
            density: attribute(node, "Density"),
            specific_heat_ratio: attribute(node, "SpecificHeatRatio"),
            notes: child_text_trimmed(node, "Notes"),
        }
    }

    /// Validate and coerce into a record whose id is the undeduplicated slug.
    ///
    /// `index` is the 1-based position in the source and is used in the
    /// message for a missing name.
    pub fn normalize(&self, index: usize) -> Result<PropellantRecord, Vec<String>> {
        let mut errors = Vec::new();

        let name = trimmed_or_empty(self.name.as_deref());
        if name.is_empty() {
            errors.push(format!("Missing Name on propellant #{}", index));
        }

        let mut number = |raw: &Option<String>, label: &str| {
            let parsed = raw.as_deref().and_then(parse_number_strict);
            if parsed.is_none() {
                errors.push(format!("Invalid {} on {}", label, name));
            }
            parsed.unwrap_or_default()
        };

        let isp_star = number(&self.isp_star, "ISPStar");
        let burn_rate_a = number(&self.burn_rate_a, "A");
        let burn_rate_n = number(&self.burn_rate_n, "N");
        let density = number(&self.density, "Density");
        let specific_heat_ratio = number(&self.specific_heat_ratio, "SpecificHeatRatio");

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(PropellantRecord {
            propellant_id: slugify(&name),
            name,
            isp_star,
            burn_rate_a,
            burn_rate_n,
            density,
            specific_heat_ratio,
            notes: self.notes.clone(),
            original_index: index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(name: &str) -> RawPropellant {
        RawPropellant {
            name: Some(name.to_string()),
            isp_star: Some("180".to_string()),
            burn_rate_a: Some("0.05".to_string()),
            burn_rate_n: Some("0.3".to_string()),
            density: Some("1.7".to_string()),
            specific_heat_ratio: Some("1.2".to_string()),
            notes: String::new(),
        }
    }

    #[test]
    fn test_normalize_valid() {
        let record = raw("  Blue Thunder ").normalize(3).unwrap();

        assert_eq!(record.name, "Blue Thunder");
        assert_eq!(record.propellant_id, "blue_thunder");
        assert_eq!(record.isp_star, 180.0);
        assert_eq!(record.burn_rate_n, 0.3);
        assert_eq!(record.original_index, 3);
    }

    #[test]
    fn test_normalize_collects_every_error() {
        let mut bad = raw("");
        bad.density = Some("dense".to_string());
        bad.specific_heat_ratio = None;

        let errors = bad.normalize(2).unwrap_err();
        assert_eq!(
            errors,
            vec![
                "Missing Name on propellant #2".to_string(),
                "Invalid Density on ".to_string(),
                "Invalid SpecificHeatRatio on ".to_string(),
            ]
        );
    }

    #[test]
    fn test_normalize_rejects_non_finite() {
        let mut bad = raw("Hot");
        bad.isp_star = Some("Infinity".to_string());

        assert_eq!(
            bad.normalize(1).unwrap_err(),
            vec!["Invalid ISPStar on Hot".to_string()]
        );
    }
}
