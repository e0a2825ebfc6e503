//! Plausibility range checks for normalized propellants

use crate::config::PropellantRanges;
use crate::models::PropellantRecord;

/// One message per field of `record` that falls outside its range, in
/// field order
pub fn range_violations(record: &PropellantRecord, ranges: &PropellantRanges) -> Vec<String> {
    let checks = [
        ("isp_star", record.isp_star, ranges.isp_star),
        ("burn_rate_a", record.burn_rate_a, ranges.burn_rate_a),
        ("burn_rate_n", record.burn_rate_n, ranges.burn_rate_n),
        ("density", record.density, ranges.density),
        (
            "specific_heat_ratio",
            record.specific_heat_ratio,
            ranges.specific_heat_ratio,
        ),
    ];

    checks
        .into_iter()
        .filter(|(_, value, range)| value.is_finite() && !range.contains(*value))
        .map(|(field, _, _)| {
            format!(
                "Value out of expected range for {} on {}",
                field, record.propellant_id
            )
        })
        .collect()
}
