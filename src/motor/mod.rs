//! BurnSim motor parser
//!
//! Extracts the first `<Motor>` element with its nozzle, grains, inlined
//! propellants and notes. Attribute values are carried through as raw
//! strings; only the motor name and id are derived.
//!
//! - [`parser`] - orchestration, id allocation and the name override
//! - [`extraction`] - attribute copying for motor, nozzle and grains
//! - [`naming`] - ordered name fallback

pub mod extraction;
pub mod naming;
pub mod parser;

#[cfg(test)]
mod tests;

pub use naming::{NameOrigin, ResolvedName};
pub use parser::{MotorParser, parse_motor_text};
