//! Command implementations for the burnsim-ingest CLI

pub mod eng;
pub mod formula;
pub mod motor;
pub mod shared;

use anyhow::Result;

use crate::cli::args::{Args, Commands};
use crate::models::ParseStatus;

pub use eng::run_eng;
pub use formula::run_formula;
pub use motor::run_motor;
pub use shared::setup_logging;

/// Main entry point for CLI execution; returns the parse status so the
/// binary can choose its exit code
pub async fn run(args: Args) -> Result<ParseStatus> {
    setup_logging(&args);

    match &args.command {
        Commands::Formula(formula_args) => run_formula(&args, formula_args).await,
        Commands::Motor(motor_args) => run_motor(&args, motor_args).await,
        Commands::Eng(eng_args) => run_eng(&args, eng_args).await,
    }
}
