//! Command-line argument definitions for burnsim-ingest
//!
//! One subcommand per BurnSim format. Every subcommand reads a file when a
//! path is given and stdin (as pasted text) otherwise.

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::session::SortKey;

/// Parse BurnSim propellant, motor and ENG files into JSON wrappers
#[derive(Debug, Clone, Parser)]
#[command(
    name = "burnsim-ingest",
    version,
    about = "Parse BurnSim propellant, motor and ENG thrust-curve files",
    long_about = "Reads a BurnSim propellant library, a BurnSim motor definition or an ENG \
                  thrust-curve file, validates it, derives ballistics where applicable and \
                  emits a schema-tagged JSON wrapper or a human-readable summary."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value = "human",
        global = true
    )]
    pub format: OutputFormat,

    /// Write the JSON wrapper to this file
    #[arg(short = 'o', long = "output", value_name = "PATH", global = true)]
    pub output: Option<PathBuf>,

    /// Parser configuration file (JSON)
    #[arg(short = 'c', long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true
    )]
    pub verbose: u8,

    /// Suppress everything except the status banner and errors
    #[arg(
        short = 'q',
        long = "quiet",
        conflicts_with = "verbose",
        global = true
    )]
    pub quiet: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse a propellant library (<Propellant> elements)
    Formula(FormulaArgs),
    /// Parse a motor definition (<Motor> element)
    Motor(MotorArgs),
    /// Parse an ENG thrust curve
    Eng(EngArgs),
}

#[derive(Debug, Clone, ClapArgs)]
pub struct FormulaArgs {
    /// Input file; stdin when omitted
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Sort the propellant table by this column
    #[arg(short = 's', long = "sort", value_name = "KEY")]
    pub sort: Option<SortKey>,

    /// Sort descending
    #[arg(long = "desc", requires = "sort")]
    pub desc: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct MotorArgs {
    /// Input file; stdin when omitted
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Use this motor name instead of the one in the file
    #[arg(short = 'n', long = "name", value_name = "NAME")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct EngArgs {
    /// Input file; stdin when omitted
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Use this engine name instead of the designation
    #[arg(short = 'n', long = "name", value_name = "NAME")]
    pub name: Option<String>,
}

/// How results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Coloured status banner and tables
    Human,
    /// Compact JSON wrapper
    Json,
    /// Indented JSON wrapper
    Pretty,
}

impl Args {
    /// Get the tracing level implied by --verbose and --quiet
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Input file of the selected subcommand
    pub fn input_file(&self) -> Option<&PathBuf> {
        match &self.command {
            Commands::Formula(args) => args.file.as_ref(),
            Commands::Motor(args) => args.file.as_ref(),
            Commands::Eng(args) => args.file.as_ref(),
        }
    }
}
