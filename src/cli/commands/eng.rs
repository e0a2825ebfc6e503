//! `eng` command: parse an ENG thrust curve and show its ballistics

use anyhow::Result;
use colored::*;
use tracing::info;

use super::shared::{acquire_input, emit, load_config, print_banner, print_table};
use crate::cli::args::{Args, EngArgs, OutputFormat};
use crate::display::{CurveMarker, EngStats, curve_rows};
use crate::eng::EngParser;
use crate::models::{EngRecord, ParseStatus};

pub async fn run_eng(args: &Args, eng_args: &EngArgs) -> Result<ParseStatus> {
    let config = load_config(args)?;
    let input = acquire_input(args).await?;

    let mut wrapper = EngParser::with_config(config).parse(
        &input.text,
        input.source_type,
        &input.original_filename,
    );

    if eng_args
        .name
        .as_deref()
        .is_some_and(|name| wrapper.apply_name_override(name))
    {
        info!("Engine name overridden from the command line");
    }
    info!("ENG parse finished with status {}", wrapper.status());

    if args.format == OutputFormat::Human {
        let point_count = wrapper
            .payload
            .eng
            .as_ref()
            .map_or(0, |eng| eng.curve.len());
        print_banner(
            &wrapper,
            &format!("Parsed ENG thrust curve with {} points.", point_count),
        );
    }

    let eng = wrapper.payload.eng.as_ref();
    emit(args, &wrapper, wrapper.status(), || {
        if let Some(eng) = eng {
            render_eng(eng);
        }
    })
    .await?;

    Ok(wrapper.status())
}

fn render_eng(eng: &EngRecord) {
    let stats = EngStats::from(eng);
    let header = &eng.header;

    println!();
    println!("{} {}", "Engine:".bright_white().bold(), eng.name);
    if !header.manufacturer.is_empty() {
        println!("  Manufacturer:   {}", header.manufacturer);
    }
    println!("  {}", stats.class_text.bright_yellow().bold());
    println!("  Total impulse:  {}", stats.total_impulse);
    println!("  Burn time:      {}", stats.burn_time);
    println!(
        "  Avg thrust:     {} ({})",
        stats.avg_thrust_n, stats.avg_thrust_lbf
    );
    println!(
        "  Max thrust:     {} ({})",
        stats.max_thrust_n, stats.max_thrust_lbf
    );
    println!("  Points:         {}", stats.point_count);

    let rows: Vec<Vec<String>> = curve_rows(eng)
        .into_iter()
        .map(|row| {
            let marker = match row.marker {
                CurveMarker::None => "",
                CurveMarker::Initial => "initial",
                CurveMarker::Peak => "peak",
                CurveMarker::InitialAndPeak => "initial, peak",
            };
            vec![row.time, row.thrust, marker.to_string()]
        })
        .collect();

    println!();
    print_table(&["Time (s)", "Thrust (N)", ""], &rows);
}
