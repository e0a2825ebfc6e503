//! ENG thrust-curve parser
//!
//! Line-oriented: one header line followed by `time thrust` samples, with
//! `;` comments anywhere. The curve is integrated into impulse, burn time,
//! thrust figures and a lettered motor class.
//!
//! - [`parser`] - orchestration and the name override
//! - [`header`] - header line fields
//! - [`curve`] - significant-line detection and curve scanning
//! - [`ballistics`] - derived quantities
//! - [`classification`] - impulse bands A through S

pub mod ballistics;
pub mod classification;
pub mod curve;
pub mod header;
pub mod parser;

#[cfg(test)]
mod tests;

pub use classification::classify;
pub use header::{HeaderLine, MalformedField};
pub use parser::{EngParser, parse_eng_text};
