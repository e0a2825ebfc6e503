//! `motor` command: parse a single motor definition

use anyhow::Result;
use colored::*;
use tracing::info;

use super::shared::{acquire_input, emit, load_config, print_banner, print_table};
use crate::cli::args::{Args, MotorArgs, OutputFormat};
use crate::display::{GrainRow, MotorSummaryRow};
use crate::models::{MotorRecord, ParseStatus};
use crate::motor::MotorParser;

pub async fn run_motor(args: &Args, motor_args: &MotorArgs) -> Result<ParseStatus> {
    let config = load_config(args)?;
    let input = acquire_input(args).await?;

    let mut wrapper = MotorParser::with_config(config).parse(
        &input.text,
        input.source_type,
        &input.original_filename,
    );

    if motor_args
        .name
        .as_deref()
        .is_some_and(|name| wrapper.apply_name_override(name))
    {
        info!("Motor name overridden from the command line");
    }
    info!("Motor parse finished with status {}", wrapper.status());

    if args.format == OutputFormat::Human {
        let grain_count = wrapper
            .payload
            .motor
            .as_ref()
            .map_or(0, |motor| motor.grains.len());
        print_banner(&wrapper, &format!("Parsed motor and {} grains.", grain_count));
    }

    let motor = wrapper.payload.motor.as_ref();
    emit(args, &wrapper, wrapper.status(), || {
        if let Some(motor) = motor {
            render_motor(motor);
        }
    })
    .await?;

    Ok(wrapper.status())
}

fn render_motor(motor: &MotorRecord) {
    let summary = MotorSummaryRow::from(motor);

    println!();
    println!("{} {}", "Motor:".bright_white().bold(), summary.name);
    println!("  Id:               {}", motor.motor_id);
    println!("  Diameter (mm):    {}", summary.diameter_mm);
    println!("  Length:           {}", summary.length);
    println!("  Manufacturer:     {}", summary.mfg_code);
    println!("  Hardware weight:  {}", summary.hardware_weight);
    println!("  Delays:           {}", summary.delays);
    println!("  Throat diameter:  {}", summary.throat_dia);
    println!("  Exit diameter:    {}", summary.exit_dia);
    println!("  Nozzle efficiency: {}", summary.nozzle_efficiency);

    let headers = [
        "#", "Type", "Length", "Diameter", "Core", "Inhibited", "Propellant", "Density",
        "ISPStar", "A", "N", "SHR",
    ];
    let rows: Vec<Vec<String>> = motor
        .grains
        .iter()
        .map(|grain| {
            let row = GrainRow::from(grain);
            vec![
                row.index,
                row.grain_type,
                row.length,
                row.diameter,
                row.core_diameter,
                row.ends_inhibited,
                row.propellant,
                row.density,
                row.isp_star,
                row.ballistic_a,
                row.ballistic_n,
                row.specific_heat_ratio,
            ]
        })
        .collect();

    println!();
    print_table(&headers, &rows);

    if !motor.motor_notes.is_empty() {
        println!();
        println!("{}", "Notes:".bright_white().bold());
        println!("{}", motor.motor_notes);
    }
}
