//! Tests for ENG parse orchestration

use super::*;
use crate::config::ParserConfig;
use crate::constants::messages;
use crate::eng::{EngParser, parse_eng_text};
use crate::models::{ParseStatus, SourceType};

#[test]
fn test_reference_motor() {
    let wrapper = parse_eng_text(&create_test_eng(), SourceType::Paste, "");

    assert_eq!(wrapper.status(), ParseStatus::Ok);
    let eng = wrapper.payload.eng.as_ref().unwrap();
    assert_eq!(eng.name, "TestMotor");
    assert_eq!(eng.header.manufacturer, "TestMfg");
    assert_eq!(eng.header.total_mass, Some(60.0));
    assert_eq!(eng.curve.len(), 4);
    assert_eq!(eng.derived.total_impulse_ns, 90.0);
    assert_eq!(eng.derived.burn_time_seconds, 1.5);
    assert_eq!(eng.derived.max_thrust_n, 100.0);
    assert_eq!(eng.derived.peak_index, 1);
    assert_eq!(eng.derived.motor_class.class_letter, "G");
}

#[test]
fn test_byte_order_mark_not_in_designation() {
    let text = "\u{FEFF}C6 18 70 3 0.01 0.02 Estes\n0 0\n1 5\n";
    let wrapper = parse_eng_text(text, SourceType::File, "c6.eng");

    assert_eq!(wrapper.status(), ParseStatus::Ok);
    let eng = wrapper.payload.eng.unwrap();
    assert_eq!(eng.name, "C6");
    assert_eq!(eng.header.designation, "C6");
}

#[test]
fn test_crlf_and_cr_line_endings() {
    let crlf = create_test_eng().replace('\n', "\r\n");
    let cr = create_test_eng().replace('\n', "\r");

    for text in [crlf, cr] {
        let wrapper = parse_eng_text(&text, SourceType::Paste, "");
        assert_eq!(wrapper.status(), ParseStatus::Ok);
        assert_eq!(wrapper.payload.eng.unwrap().derived.point_count, 4);
    }
}

#[test]
fn test_curve_line_matching_header_text_is_kept() {
    // Curve lines are found by position, so text equal to the header is a
    // curve candidate rather than a second header
    let text = "1 2 3 4 5 6\n0 0\n1 2 3 4 5 6\n2 0\n";
    let wrapper = parse_eng_text(text, SourceType::Paste, "");

    let eng = wrapper.payload.eng.unwrap();
    assert_eq!(eng.name, "1");
    assert_eq!(eng.curve.len(), 3);
    assert_eq!(eng.curve[1].thrust, 2.0);
}

#[test]
fn test_skipped_lines_warn() {
    let text = create_test_eng() + "burnout\n";
    let wrapper = parse_eng_text(&text, SourceType::Paste, "");

    assert_eq!(wrapper.status(), ParseStatus::Warning);
    assert_eq!(
        wrapper.parse.warnings,
        vec!["Skipped non-curve line: \"burnout\"".to_string()]
    );
    assert!(wrapper.payload.eng.is_some());
}

#[test]
fn test_too_few_points() {
    let wrapper = parse_eng_text("C6 18 70 3 0.01 0.02 Estes\n0 0\n", SourceType::Paste, "");

    assert_eq!(wrapper.status(), ParseStatus::Error);
    assert!(wrapper.payload.eng.is_none());
    assert_eq!(wrapper.parse.errors, vec![messages::ENG_TOO_FEW_POINTS.to_string()]);
}

#[test]
fn test_header_failures() {
    let none = parse_eng_text("; just a comment\n\n", SourceType::Paste, "");
    assert_eq!(none.parse.errors, vec![messages::ENG_NO_HEADER.to_string()]);

    let short = parse_eng_text("C6 18 70\n0 0\n1 1\n", SourceType::Paste, "");
    assert_eq!(short.parse.errors, vec![messages::ENG_INVALID_HEADER.to_string()]);

    let empty = parse_eng_text("\n  \n", SourceType::Paste, "");
    assert_eq!(empty.parse.errors, vec![messages::NO_INPUT.to_string()]);
}

#[test]
fn test_malformed_header_numerics() {
    let text = "K550 54 410 P 0.9 1.6 AT\n0 0\n1 500\n2 0\n";

    let lenient = parse_eng_text(text, SourceType::Paste, "");
    assert_eq!(lenient.status(), ParseStatus::Ok);
    assert_eq!(lenient.payload.eng.unwrap().header.delay, None);

    let strict = EngParser::with_config(ParserConfig::default().with_strict_header_numerics())
        .parse(text, SourceType::Paste, "");
    assert_eq!(strict.status(), ParseStatus::Error);
    assert_eq!(
        strict.parse.errors,
        vec!["Invalid delay in ENG header: \"P\"".to_string()]
    );
}

#[test]
fn test_name_override() {
    let mut wrapper = parse_eng_text(&create_test_eng(), SourceType::File, "reference.eng");

    assert!(wrapper.apply_name_override(" Renamed "));
    assert_eq!(wrapper.payload.eng.as_ref().unwrap().name, "Renamed");
    assert_eq!(wrapper.status(), ParseStatus::Warning);
    assert_eq!(
        wrapper.parse.warnings,
        vec![messages::ENG_NAME_OVERRIDDEN.to_string()]
    );
}

#[test]
fn test_override_ignored_without_payload() {
    let mut wrapper = parse_eng_text("C6 18 70 3 0.01 0.02\n", SourceType::Paste, "");
    assert!(!wrapper.apply_name_override("Renamed"));
    assert_eq!(wrapper.status(), ParseStatus::Error);
}
