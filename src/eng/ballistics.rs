//! Derived ballistics of a thrust curve
//!
//! All quantities are computed in SI units (seconds, newtons, N·s); the
//! pound-force figures are conversions of the newton values.

use super::classification::classify;
use crate::constants::{MAX_THRUST_DELTA_PERCENT, newtons_to_lbf};
use crate::models::{CurvePoint, EngDerived};

/// Trapezoidal integral of thrust over time; non-positive steps are skipped
pub fn total_impulse(curve: &[CurvePoint]) -> f64 {
    curve
        .windows(2)
        .filter_map(|pair| {
            let dt = pair[1].time - pair[0].time;
            (dt.is_finite() && dt > 0.0).then(|| (pair[0].thrust + pair[1].thrust) / 2.0 * dt)
        })
        .sum()
}

/// Last time minus first time, floored at zero
pub fn burn_time(curve: &[CurvePoint]) -> f64 {
    match (curve.first(), curve.last()) {
        (Some(first), Some(last)) if first.time.is_finite() && last.time.is_finite() => {
            (last.time - first.time).max(0.0)
        }
        _ => 0.0,
    }
}

/// Largest thrust, never below zero
pub fn max_thrust(curve: &[CurvePoint]) -> f64 {
    curve
        .iter()
        .map(|point| point.thrust)
        .filter(|thrust| thrust.is_finite())
        .fold(0.0, f64::max)
}

pub fn average_thrust(impulse: f64, burn_time_seconds: f64) -> f64 {
    if !impulse.is_finite() || !burn_time_seconds.is_finite() || burn_time_seconds <= 0.0 {
        return 0.0;
    }
    impulse / burn_time_seconds
}

pub fn initial_thrust(curve: &[CurvePoint]) -> f64 {
    curve
        .first()
        .map(|point| point.thrust)
        .filter(|thrust| thrust.is_finite())
        .unwrap_or(0.0)
}

/// Peak thrust and its 0-based index; the first maximum wins.
///
/// Returns `(0, -1)` for an empty curve or a negative maximum.
pub fn peak(curve: &[CurvePoint]) -> (f64, i64) {
    let mut best: Option<(f64, usize)> = None;

    for (index, point) in curve.iter().enumerate() {
        if !point.thrust.is_finite() {
            continue;
        }
        if best.is_none_or(|(thrust, _)| point.thrust > thrust) {
            best = Some((point.thrust, index));
        }
    }

    match best {
        Some((thrust, index)) if thrust >= 0.0 => (thrust, index as i64),
        _ => (0.0, -1),
    }
}

/// Rise from initial to peak thrust as a percentage of the peak
pub fn delta_percent_of_peak(initial: f64, peak_thrust: f64) -> f64 {
    if !initial.is_finite() || !peak_thrust.is_finite() || peak_thrust <= 0.0 {
        return 0.0;
    }
    ((peak_thrust - initial) / peak_thrust * 100.0).clamp(0.0, MAX_THRUST_DELTA_PERCENT)
}

/// Every derived quantity of a curve
pub fn derive(curve: &[CurvePoint]) -> EngDerived {
    let burn_time_seconds = burn_time(curve);
    let total_impulse_ns = total_impulse(curve);
    let max_thrust_n = max_thrust(curve);
    let avg_thrust_n = average_thrust(total_impulse_ns, burn_time_seconds);
    let initial_thrust_n = initial_thrust(curve);
    let (peak_thrust_n, peak_index) = peak(curve);

    EngDerived {
        point_count: curve.len(),
        burn_time_seconds,
        total_impulse_ns,
        avg_thrust_n,
        avg_thrust_lbf: newtons_to_lbf(avg_thrust_n),
        max_thrust_n,
        max_thrust_lbf: newtons_to_lbf(max_thrust_n),
        initial_thrust_n,
        peak_thrust_n,
        peak_index,
        thrust_delta_percent_of_peak: delta_percent_of_peak(initial_thrust_n, peak_thrust_n),
        motor_class: classify(total_impulse_ns),
    }
}
