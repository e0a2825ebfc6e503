//! Total-impulse motor classification

use crate::constants::{MOTOR_CLASSES, UNCLASSIFIED_LETTER};
use crate::models::MotorClass;

fn unclassified() -> MotorClass {
    MotorClass {
        class_letter: UNCLASSIFIED_LETTER.to_string(),
        min_ns: 0.0,
        max_ns: 0.0,
        percent: 0.0,
    }
}

/// Letter band for a total impulse, with the position inside the band as
/// a percentage.
///
/// Impulses above the highest band report that band at 100%. Non-positive,
/// non-finite, sub-A and between-band (0.01 gap) impulses are unclassified.
pub fn classify(total_impulse_ns: f64) -> MotorClass {
    if !total_impulse_ns.is_finite() || total_impulse_ns <= 0.0 {
        return unclassified();
    }

    if let Some(band) = MOTOR_CLASSES
        .iter()
        .find(|band| total_impulse_ns >= band.min_ns && total_impulse_ns <= band.max_ns)
    {
        let span = band.max_ns - band.min_ns;
        let raw_percent = if span > 0.0 {
            (total_impulse_ns - band.min_ns) / span * 100.0
        } else {
            0.0
        };

        return MotorClass {
            class_letter: band.letter.to_string(),
            min_ns: band.min_ns,
            max_ns: band.max_ns,
            percent: raw_percent.clamp(0.0, 100.0),
        };
    }

    match MOTOR_CLASSES.last() {
        Some(highest) if total_impulse_ns > highest.max_ns => MotorClass {
            class_letter: highest.letter.to_string(),
            min_ns: highest.min_ns,
            max_ns: highest.max_ns,
            percent: 100.0,
        },
        _ => unclassified(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_within_band() {
        let class = classify(90.0);
        assert_eq!(class.class_letter, "G");
        assert_eq!(class.min_ns, 80.01);
        assert_eq!(class.max_ns, 160.0);
        assert!((class.percent - (90.0 - 80.01) / (160.0 - 80.01) * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_classify_band_edges() {
        assert_eq!(classify(1.26).class_letter, "A");
        assert_eq!(classify(1.26).percent, 0.0);
        assert_eq!(classify(2.5).class_letter, "A");
        assert_eq!(classify(2.5).percent, 100.0);
        assert_eq!(classify(655360.0).class_letter, "S");
    }

    #[test]
    fn test_classify_above_highest() {
        let class = classify(1_000_000.0);
        assert_eq!(class.class_letter, "S");
        assert_eq!(class.percent, 100.0);
    }

    #[test]
    fn test_unclassified_impulses() {
        for impulse in [0.0, -5.0, 1.0, 2.505, f64::NAN, f64::INFINITY] {
            let class = classify(impulse);
            assert_eq!(class.class_letter, "?", "impulse {}", impulse);
            assert_eq!(class.min_ns, 0.0);
            assert_eq!(class.max_ns, 0.0);
            assert_eq!(class.percent, 0.0);
        }
    }
}
