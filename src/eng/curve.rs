//! Thrust-curve scanning
//!
//! Lines are addressed by position. The header is the first significant
//! line and the curve is every significant line after it.

use crate::common::field_parsers::{parse_number_strict, tokens};
use crate::constants::ENG_COMMENT_PREFIX;
use crate::models::CurvePoint;

/// Trimmed line, or `None` for blank and comment lines
pub fn significant(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with(ENG_COMMENT_PREFIX) {
        None
    } else {
        Some(trimmed)
    }
}

/// Position and trimmed text of the header line
pub fn locate_header<'a>(lines: &[&'a str]) -> Option<(usize, &'a str)> {
    lines
        .iter()
        .enumerate()
        .find_map(|(position, line)| significant(line).map(|text| (position, text)))
}

/// A `time thrust` pair; extra tokens are ignored
pub fn parse_curve_line(line: &str) -> Option<CurvePoint> {
    let parts = tokens(line);
    if parts.len() < 2 {
        return None;
    }

    Some(CurvePoint {
        time: parse_number_strict(parts[0])?,
        thrust: parse_number_strict(parts[1])?,
    })
}

/// Curve points found in `lines`, plus a warning for every significant line
/// that is not a point
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurveScan {
    pub points: Vec<CurvePoint>,
    pub skipped: Vec<String>,
}

impl CurveScan {
    pub fn scan(lines: &[&str]) -> Self {
        let mut scan = Self::default();

        for text in lines.iter().filter_map(|line| significant(line)) {
            match parse_curve_line(text) {
                Some(point) => scan.points.push(point),
                None => scan
                    .skipped
                    .push(format!("Skipped non-curve line: \"{}\"", text)),
            }
        }

        scan
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_significant_lines() {
        assert_eq!(significant("  ; comment"), None);
        assert_eq!(significant("   "), None);
        assert_eq!(significant("  0.1 20 "), Some("0.1 20"));
    }

    #[test]
    fn test_locate_header_skips_comments() {
        let lines = vec!["; Estes C6", "", "  C6 18 70 3 0.01 0.02 Estes", "0 0"];
        assert_eq!(locate_header(&lines), Some((2, "C6 18 70 3 0.01 0.02 Estes")));
        assert_eq!(locate_header(&["; only", " "]), None);
    }

    #[test]
    fn test_parse_curve_line() {
        assert_eq!(
            parse_curve_line("0.5 100 extra"),
            Some(CurvePoint {
                time: 0.5,
                thrust: 100.0
            })
        );
        assert_eq!(parse_curve_line("0.5"), None);
        assert_eq!(parse_curve_line("t 100"), None);
    }

    #[test]
    fn test_scan_collects_warnings() {
        let lines = vec!["0 0", "; mid comment", "burnout", "1 0"];
        let scan = CurveScan::scan(&lines);

        assert_eq!(scan.points.len(), 2);
        assert_eq!(scan.skipped, vec!["Skipped non-curve line: \"burnout\"".to_string()]);
    }
}
