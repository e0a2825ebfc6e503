//! Building blocks shared by the formula, motor and ENG parsers
//!
//! - [`field_parsers`] - strict numeric coercion, filenames, line splitting
//! - [`identifiers`] - slugs and duplicate id resolution
//! - [`xml`] - the two-stage forgiving markup parse and node helpers
//! - [`report`] - error and warning collection

pub mod field_parsers;
pub mod identifiers;
pub mod report;
pub mod xml;

pub use field_parsers::{base_filename, parse_number_strict};
pub use identifiers::{Allocation, IdAllocator, slugify};
pub use report::Diagnostics;
pub use xml::{ForgivingParse, MarkupInput};

/// Trimmed source text without a leading byte order mark, or `None` when
/// there is nothing to parse
pub fn usable_source(source_text: &str) -> Option<&str> {
    let unmarked = source_text.strip_prefix('\u{FEFF}').unwrap_or(source_text);
    let trimmed = unmarked.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usable_source() {
        assert_eq!(usable_source("  <a/>\n"), Some("<a/>"));
        assert_eq!(usable_source(" \n\t "), None);
        assert_eq!(usable_source(""), None);
    }

    #[test]
    fn test_usable_source_strips_bom() {
        assert_eq!(usable_source("\u{FEFF}C6 18 70\n"), Some("C6 18 70"));
        assert_eq!(usable_source("\u{FEFF}  \n"), None);
    }
}
