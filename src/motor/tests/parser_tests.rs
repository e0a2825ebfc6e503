//! Tests for motor parse orchestration

use super::*;
use crate::common::identifiers::IdAllocator;
use crate::constants::messages;
use crate::models::{ParseStatus, SourceType};
use crate::motor::{MotorParser, parse_motor_text};

#[test]
fn test_full_motor() {
    let wrapper = parse_motor_text(&create_test_motor(), SourceType::Paste, "");

    assert_eq!(wrapper.status(), ParseStatus::Ok);
    let motor = wrapper.payload.motor.as_ref().unwrap();
    assert_eq!(motor.name, "H128 Blue");
    assert_eq!(motor.motor_id, "h128_blue");
    assert_eq!(motor.header.delays.as_deref(), Some("6,10,14"));
    assert_eq!(motor.header.units_linear.as_deref(), Some("1"));
    assert_eq!(
        motor.nozzle.as_ref().unwrap().ambient_pressure.as_deref(),
        Some("14.7")
    );
    assert_eq!(motor.grains.len(), 2);
    assert_eq!(motor.grains[1].index, 2);
    assert_eq!(
        motor.grains[0].propellant.as_ref().unwrap().combustion_temp.as_deref(),
        Some("2800")
    );
    assert_eq!(motor.motor_notes, "Designed for the 2024 season");
}

#[test]
fn test_name_from_filename() {
    let wrapper = parse_motor_text(&create_unnamed_motor(), SourceType::File, "uploads/H128W.bsx");

    assert_eq!(wrapper.status(), ParseStatus::Warning);
    let motor = wrapper.payload.motor.as_ref().unwrap();
    assert_eq!(motor.name, "H128W");
    assert_eq!(motor.motor_id, "h128w");
    assert_eq!(motor.header.name, None);
    assert_eq!(
        wrapper.parse.warnings,
        vec![messages::MOTOR_NAME_FROM_FILENAME.to_string()]
    );
}

#[test]
fn test_synthesized_name_for_paste() {
    let wrapper = parse_motor_text(&create_unnamed_motor(), SourceType::Paste, "");

    let motor = wrapper.payload.motor.as_ref().unwrap();
    assert_eq!(motor.name, "at_29mm_194");
    assert_eq!(
        wrapper.parse.warnings,
        vec![messages::MOTOR_NAME_SYNTHESIZED.to_string()]
    );
}

#[test]
fn test_zero_grains_is_fatal_but_keeps_warnings() {
    let wrapper = parse_motor_text(r#"<Motor DiameterMM="38"/>"#, SourceType::Paste, "");

    assert_eq!(wrapper.status(), ParseStatus::Error);
    assert!(wrapper.payload.motor.is_none());
    assert_eq!(wrapper.parse.errors, vec![messages::NO_GRAIN_NODES.to_string()]);
    assert_eq!(
        wrapper.parse.warnings,
        vec![messages::MOTOR_NAME_SYNTHESIZED.to_string()]
    );
}

#[test]
fn test_first_motor_wins() {
    let text = r#"<Motor Name="One"><Grain/></Motor><Motor Name="Two"><Grain/></Motor>"#;
    let wrapper = parse_motor_text(text, SourceType::Paste, "");

    assert_eq!(wrapper.payload.motor.as_ref().unwrap().name, "One");
}

#[test]
fn test_structural_failures() {
    let none = parse_motor_text("<Propellant Name=\"x\"/>", SourceType::Paste, "");
    assert_eq!(none.parse.errors, vec![messages::NO_MOTOR_NODE.to_string()]);

    let broken = parse_motor_text("<Motor", SourceType::Paste, "");
    assert_eq!(broken.parse.errors, vec![messages::UNPARSEABLE_MARKUP.to_string()]);

    let empty = parse_motor_text("", SourceType::Paste, "");
    assert_eq!(empty.parse.errors, vec![messages::NO_INPUT.to_string()]);
}

#[test]
fn test_shared_allocator_across_batch() {
    let parser = MotorParser::new();
    let mut ids = IdAllocator::new();

    let first = parser.parse_with_allocator(&create_test_motor(), SourceType::Paste, "", &mut ids);
    let second = parser.parse_with_allocator(&create_test_motor(), SourceType::Paste, "", &mut ids);

    assert_eq!(first.payload.motor.unwrap().motor_id, "h128_blue");
    assert_eq!(second.payload.motor.unwrap().motor_id, "h128_blue_dupe2");

    let fresh = parser.parse(&create_test_motor(), SourceType::Paste, "");
    assert_eq!(fresh.payload.motor.unwrap().motor_id, "h128_blue");
}

#[test]
fn test_name_override() {
    let mut wrapper = parse_motor_text(&create_test_motor(), SourceType::Paste, "");

    assert!(!wrapper.apply_name_override("   "));
    assert_eq!(wrapper.status(), ParseStatus::Ok);

    assert!(wrapper.apply_name_override("  Custom H128  "));
    let motor = wrapper.payload.motor.as_ref().unwrap();
    assert_eq!(motor.name, "Custom H128");
    assert_eq!(motor.motor_id, "custom_h128");
    assert_eq!(motor.header.name.as_deref(), Some("Custom H128"));
    assert_eq!(wrapper.status(), ParseStatus::Warning);
    assert_eq!(
        wrapper.parse.warnings,
        vec![messages::MOTOR_NAME_OVERRIDDEN.to_string()]
    );
}

#[test]
fn test_override_ignored_on_error() {
    let mut wrapper = parse_motor_text("<Motor/>", SourceType::Paste, "");

    assert!(!wrapper.apply_name_override("Anything"));
    assert_eq!(wrapper.status(), ParseStatus::Error);
}
