//! Presentation helpers
//!
//! Turns parsed records into rows of display strings for tables and
//! summaries. Nothing here changes a wrapper; rounding is for the eye only.

use crate::constants::{newtons_to_lbf, units};
use crate::models::{EngRecord, GrainRecord, MotorRecord, PropellantRecord};

/// Round to `digits` decimal places
pub fn round_to(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (value * factor).round() / factor
}

/// Fixed-point text with trailing fractional zeros removed.
///
/// `round_to_decimals(1.13080000, 8)` is `"1.1308"`; non-finite values give
/// an empty string.
pub fn round_to_decimals(value: f64, decimals: u32) -> String {
    if !value.is_finite() {
        return String::new();
    }

    let fixed = format!("{:.*}", decimals as usize, round_to(value, decimals));
    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        fixed
    }
}

fn raw(value: &Option<String>) -> String {
    value.as_deref().unwrap_or_default().to_string()
}

/// Table row for one propellant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropellantRow {
    pub propellant_id: String,
    pub name: String,
    pub isp_star: String,
    pub burn_rate_a: String,
    pub burn_rate_n: String,
    pub density: String,
    pub specific_heat_ratio: String,
}

impl From<&PropellantRecord> for PropellantRow {
    fn from(record: &PropellantRecord) -> Self {
        Self {
            propellant_id: record.propellant_id.clone(),
            name: record.name.clone(),
            isp_star: record.isp_star.to_string(),
            burn_rate_a: record.burn_rate_a.to_string(),
            burn_rate_n: record.burn_rate_n.to_string(),
            density: record.density.to_string(),
            specific_heat_ratio: round_to_decimals(record.specific_heat_ratio, 8),
        }
    }
}

/// One-line motor summary: name, dimensions, manufacturer and nozzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotorSummaryRow {
    pub name: String,
    pub diameter_mm: String,
    pub length: String,
    pub mfg_code: String,
    pub hardware_weight: String,
    pub delays: String,
    pub throat_dia: String,
    pub exit_dia: String,
    pub nozzle_efficiency: String,
}

impl From<&MotorRecord> for MotorSummaryRow {
    fn from(motor: &MotorRecord) -> Self {
        let nozzle = motor.nozzle.clone().unwrap_or_default();
        Self {
            name: motor.name.clone(),
            diameter_mm: raw(&motor.header.diameter_mm),
            length: raw(&motor.header.length),
            mfg_code: raw(&motor.header.mfg_code),
            hardware_weight: raw(&motor.header.hardware_weight),
            delays: raw(&motor.header.delays),
            throat_dia: raw(&nozzle.throat_dia),
            exit_dia: raw(&nozzle.exit_dia),
            nozzle_efficiency: raw(&nozzle.nozzle_efficiency),
        }
    }
}

/// Table row for one grain with its propellant columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrainRow {
    pub index: String,
    pub grain_type: String,
    pub length: String,
    pub diameter: String,
    pub core_diameter: String,
    pub ends_inhibited: String,
    pub propellant: String,
    pub density: String,
    pub isp_star: String,
    pub ballistic_a: String,
    pub ballistic_n: String,
    pub specific_heat_ratio: String,
}

impl From<&GrainRecord> for GrainRow {
    fn from(grain: &GrainRecord) -> Self {
        let embedded = grain.propellant.clone().unwrap_or_default();

        let grain_type = if grain.type_label.is_empty() {
            raw(&grain.grain_type)
        } else {
            grain.type_label.clone()
        };
        let propellant = embedded
            .name
            .clone()
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| raw(&grain.propellant_ref));

        Self {
            index: grain.index.to_string(),
            grain_type,
            length: raw(&grain.length),
            diameter: raw(&grain.diameter),
            core_diameter: raw(&grain.core_diameter),
            ends_inhibited: raw(&grain.ends_inhibited),
            propellant,
            density: raw(&embedded.density),
            isp_star: raw(&embedded.isp_star),
            ballistic_a: raw(&embedded.ballistic_a),
            ballistic_n: raw(&embedded.ballistic_n),
            specific_heat_ratio: raw(&embedded.specific_heat_ratio),
        }
    }
}

/// Rounded ENG statistics with units attached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngStats {
    pub class_text: String,
    pub total_impulse: String,
    pub burn_time: String,
    pub avg_thrust_n: String,
    pub max_thrust_n: String,
    pub avg_thrust_lbf: String,
    pub max_thrust_lbf: String,
    pub point_count: String,
}

impl From<&EngRecord> for EngStats {
    fn from(eng: &EngRecord) -> Self {
        let derived = &eng.derived;
        let class = &derived.motor_class;

        let lbf = |stored: f64, newtons: f64| {
            if stored.is_finite() {
                stored
            } else {
                newtons_to_lbf(newtons)
            }
        };

        Self {
            class_text: format!(
                "Class {} ({}–{} {})",
                class.class_letter,
                round_to(class.min_ns, 0),
                round_to(class.max_ns, 0),
                units::IMPULSE_NEWTON_SECONDS
            ),
            total_impulse: format!(
                "{} {}",
                round_to(derived.total_impulse_ns, 0),
                units::IMPULSE_NEWTON_SECONDS
            ),
            burn_time: format!(
                "{} {}",
                round_to(derived.burn_time_seconds, 2),
                units::TIME_SECONDS
            ),
            avg_thrust_n: format!(
                "{} {}",
                round_to(derived.avg_thrust_n, 0),
                units::THRUST_NEWTONS
            ),
            max_thrust_n: format!(
                "{} {}",
                round_to(derived.max_thrust_n, 0),
                units::THRUST_NEWTONS
            ),
            avg_thrust_lbf: format!(
                "{} {}",
                round_to(lbf(derived.avg_thrust_lbf, derived.avg_thrust_n), 0),
                units::THRUST_POUNDS_FORCE
            ),
            max_thrust_lbf: format!(
                "{} {}",
                round_to(lbf(derived.max_thrust_lbf, derived.max_thrust_n), 0),
                units::THRUST_POUNDS_FORCE
            ),
            point_count: derived.point_count.to_string(),
        }
    }
}

/// Highlight for a curve table row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveMarker {
    None,
    Initial,
    Peak,
    InitialAndPeak,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurveRow {
    pub time: String,
    pub thrust: String,
    pub marker: CurveMarker,
}

/// Curve samples at 3 decimals with the initial and peak rows marked
pub fn curve_rows(eng: &EngRecord) -> Vec<CurveRow> {
    let peak_index = usize::try_from(eng.derived.peak_index).ok();

    eng.curve
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let marker = match (index == 0, Some(index) == peak_index) {
                (true, true) => CurveMarker::InitialAndPeak,
                (true, false) => CurveMarker::Initial,
                (false, true) => CurveMarker::Peak,
                (false, false) => CurveMarker::None,
            };

            CurveRow {
                time: round_to(point.time, 3).to_string(),
                thrust: round_to(point.thrust, 3).to_string(),
                marker,
            }
        })
        .collect()
}
