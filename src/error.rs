//! Error handling for BurnSim ingest operations.
//!
//! Malformed file *content* never surfaces here: the parsers fold it into the
//! `errors`/`warnings` lists of the returned wrapper. These variants cover the
//! boundary around the parsers: reading input, loading configuration and
//! writing JSON.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BurnsimError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Input file not found: {path}")]
    InputNotFound { path: PathBuf },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl BurnsimError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BurnsimError>;
