//! Structural extraction of a `<Motor>` element
//!
//! Everything is copied through as raw strings. Absent attributes stay
//! `None` so the rendering layer can tell "missing" from "empty".

use roxmltree::Node;

use crate::common::xml::{attribute, child_text_trimmed, elements_named, first_element_named};
use crate::constants::grain_type_label;
use crate::models::{EmbeddedPropellant, GrainRecord, MotorHeader, Nozzle};

/// Motor attributes, verbatim
pub fn extract_header(motor: Node<'_, '_>) -> MotorHeader {
    MotorHeader {
        name: attribute(motor, "Name"),
        diameter_mm: attribute(motor, "DiameterMM"),
        length: attribute(motor, "Length"),
        delays: attribute(motor, "Delays"),
        hardware_weight: attribute(motor, "HardwareWeight"),
        mfg_code: attribute(motor, "MFGCode"),
        thrust_method: attribute(motor, "ThrustMethod"),
        thrust_coef_given: attribute(motor, "ThrustCoefGiven"),
        units_linear: attribute(motor, "UnitsLinear"),
    }
}

/// First `<Nozzle>` below the motor, if any
pub fn extract_nozzle(motor: Node<'_, '_>) -> Option<Nozzle> {
    first_element_named(motor, "Nozzle").map(|nozzle| Nozzle {
        throat_dia: attribute(nozzle, "ThroatDia"),
        exit_dia: attribute(nozzle, "ExitDia"),
        ambient_pressure: attribute(nozzle, "AmbientPressure"),
        nozzle_efficiency: attribute(nozzle, "NozzleEfficiency"),
    })
}

/// First `<Propellant>` inlined in a grain
pub fn extract_embedded_propellant(grain: Node<'_, '_>) -> Option<EmbeddedPropellant> {
    first_element_named(grain, "Propellant").map(|propellant| EmbeddedPropellant {
        name: attribute(propellant, "Name"),
        density: attribute(propellant, "Density"),
        isp_star: attribute(propellant, "ISPStar"),
        ballistic_a: attribute(propellant, "BallisticA"),
        ballistic_n: attribute(propellant, "BallisticN"),
        specific_heat_ratio: attribute(propellant, "SpecificHeatRatio"),
        molar_mass: attribute(propellant, "MolarMass"),
        combustion_temp: attribute(propellant, "CombustionTemp"),
        notes: child_text_trimmed(propellant, "Notes"),
    })
}

/// Every `<Grain>` below the motor in document order, indexed from 1
pub fn extract_grains(motor: Node<'_, '_>) -> Vec<GrainRecord> {
    elements_named(motor, "Grain")
        .enumerate()
        .map(|(position, grain)| {
            let grain_type = attribute(grain, "Type");
            let type_label = grain_type
                .as_deref()
                .map(grain_type_label)
                .unwrap_or_default();

            GrainRecord {
                index: position + 1,
                grain_type,
                type_label,
                length: attribute(grain, "Length"),
                diameter: attribute(grain, "Diameter"),
                ends_inhibited: attribute(grain, "EndsInhibited"),
                propellant_ref: attribute(grain, "Propellant"),
                core_diameter: attribute(grain, "CoreDiameter"),
                propellant: extract_embedded_propellant(grain),
            }
        })
        .collect()
}

/// Trimmed `<MotorNotes>` text, empty when absent
pub fn extract_motor_notes(motor: Node<'_, '_>) -> String {
    child_text_trimmed(motor, "MotorNotes")
}
