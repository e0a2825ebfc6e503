//! Application constants for BurnSim ingest
//!
//! Schema tags, plausibility ranges, the motor classification table, unit
//! conversion factors and every user-facing parse message live here so the
//! three parsers and their tests agree on exact wording.

// =============================================================================
// Wrapper Schemas
// =============================================================================

/// Schema tag for propellant (formula) wrappers
pub const FORMULA_SCHEMA: &str = "burnsim-propellants-json";

/// Schema tag for motor wrappers
pub const MOTOR_SCHEMA: &str = "burnsim-motor-json";

/// Schema tag for ENG thrust-curve wrappers
pub const ENG_SCHEMA: &str = "burnsim-eng-json";

/// Version shared by all three wrapper schemas
pub const SCHEMA_VERSION: &str = "1.0";

// =============================================================================
// Parsing Defaults
// =============================================================================

/// Element used to wrap text that has several top-level elements
pub const DEFAULT_SYNTHETIC_ROOT: &str = "Root";

/// Name given to an ENG motor with no designation and no filename
pub const DEFAULT_ENG_FALLBACK_NAME: &str = "eng_motor";

/// Slug used when a name sanitizes to nothing
pub const FALLBACK_ID: &str = "unknown";

/// Manufacturer stand-in when synthesizing a motor name
pub const FALLBACK_MOTOR_MFG: &str = "motor";

/// Lines starting with this character are ENG comments
pub const ENG_COMMENT_PREFIX: char = ';';

/// Minimum number of whitespace-delimited fields in an ENG header
pub const ENG_HEADER_MIN_FIELDS: usize = 6;

/// Minimum number of points that make a usable thrust curve
pub const ENG_MIN_CURVE_POINTS: usize = 2;

/// Upper clamp for the initial-to-peak thrust delta percentage
pub const MAX_THRUST_DELTA_PERCENT: f64 = 9999.0;

// =============================================================================
// Units
// =============================================================================

/// Pounds-force per newton
pub const NEWTONS_TO_LBF: f64 = 0.2248089431;

pub mod units {
    pub const TIME_SECONDS: &str = "s";
    pub const THRUST_NEWTONS: &str = "N";
    pub const THRUST_POUNDS_FORCE: &str = "lbf";
    pub const IMPULSE_NEWTON_SECONDS: &str = "N·s";
}

// =============================================================================
// Propellant Plausibility Ranges
// =============================================================================

/// Inclusive plausibility bounds for propellant properties
pub mod propellant_ranges {
    pub const ISP_STAR: (f64, f64) = (0.000000001, 10000.0);
    pub const BURN_RATE_A: (f64, f64) = (0.0000000000001, 1000000.0);
    pub const BURN_RATE_N: (f64, f64) = (0.0, 1.5);
    pub const DENSITY: (f64, f64) = (0.000000001, 1000.0);
    pub const SPECIFIC_HEAT_RATIO: (f64, f64) = (1.0, 2.0);
}

// =============================================================================
// Grain Types
// =============================================================================

/// Known BurnSim grain type codes and their labels
pub const GRAIN_TYPE_LABELS: &[(&str, &str)] = &[("1", "Bates")];

// =============================================================================
// Motor Classification
// =============================================================================

/// One lettered total-impulse band
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpulseBand {
    pub letter: &'static str,
    pub min_ns: f64,
    pub max_ns: f64,
}

const fn band(letter: &'static str, min_ns: f64, max_ns: f64) -> ImpulseBand {
    ImpulseBand {
        letter,
        min_ns,
        max_ns,
    }
}

/// Total-impulse bands A through S, ordered by impulse
pub const MOTOR_CLASSES: &[ImpulseBand] = &[
    band("A", 1.26, 2.50),
    band("B", 2.51, 5.00),
    band("C", 5.01, 10.00),
    band("D", 10.01, 20.00),
    band("E", 20.01, 40.00),
    band("F", 40.01, 80.00),
    band("G", 80.01, 160.00),
    band("H", 160.01, 320.00),
    band("I", 320.01, 640.00),
    band("J", 640.01, 1280.00),
    band("K", 1280.01, 2560.00),
    band("L", 2560.01, 5120.00),
    band("M", 5120.01, 10240.00),
    band("N", 10240.01, 20480.00),
    band("O", 20480.01, 40960.00),
    band("P", 40960.01, 81920.00),
    band("Q", 81920.01, 163840.00),
    band("R", 163840.01, 327680.00),
    band("S", 327680.01, 655360.00),
];

/// Letter reported when an impulse matches no band
pub const UNCLASSIFIED_LETTER: &str = "?";

// =============================================================================
// Messages
// =============================================================================

/// User-facing parse messages
pub mod messages {
    pub const NO_INPUT: &str = "No input provided. Paste text or choose a file.";
    pub const UNPARSEABLE_MARKUP: &str = "Unable to parse XML/HTML content.";

    pub const NO_PROPELLANT_NODES: &str = "No <Propellant> nodes were found.";

    pub const NO_MOTOR_NODE: &str = "No <Motor> root node was found.";
    pub const NO_GRAIN_NODES: &str = "No <Grain> nodes were found in this Motor.";
    pub const MOTOR_NAME_FROM_FILENAME: &str = "Motor Name was empty in file; using uploaded filename as name. You should set a proper motor name.";
    pub const MOTOR_NAME_SYNTHESIZED: &str =
        "Motor Name was empty; using fallback derived name. You should set a proper motor name.";
    pub const MOTOR_NAME_OVERRIDDEN: &str =
        "Motor Name overridden by user input. You should verify this name is correct.";

    pub const ENG_NO_HEADER: &str =
        "No header line found. ENG files must have a non-comment header line.";
    pub const ENG_INVALID_HEADER: &str =
        "Header line appears invalid (expected at least 6 fields).";
    pub const ENG_TOO_FEW_POINTS: &str =
        "ENG thrust curve requires at least two time/thrust points.";
    pub const ENG_DESIGNATION_EMPTY: &str =
        "Engine designation was empty; using derived name. You should set a proper engine name.";
    pub const ENG_NAME_OVERRIDDEN: &str =
        "Engine Name overridden by user input. You should verify this name is correct.";
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Look up the label for a grain type code, passing unknown codes through
pub fn grain_type_label(code: &str) -> String {
    let code = code.trim();
    GRAIN_TYPE_LABELS
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, label)| (*label).to_string())
        .unwrap_or_else(|| code.to_string())
}

/// Convert a force in newtons to pounds-force (0 for non-finite input)
pub fn newtons_to_lbf(newtons: f64) -> f64 {
    if !newtons.is_finite() {
        return 0.0;
    }
    newtons * NEWTONS_TO_LBF
}
