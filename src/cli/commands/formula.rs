//! `formula` command: parse a propellant library

use anyhow::Result;
use colored::*;
use tracing::info;

use super::shared::{acquire_input, emit, load_config, print_banner, print_table};
use crate::cli::args::{Args, FormulaArgs, OutputFormat};
use crate::display::PropellantRow;
use crate::formula::FormulaParser;
use crate::models::{FormulaWrapper, ParseStatus};
use crate::session::{PropellantTable, SortKey};

pub async fn run_formula(args: &Args, formula_args: &FormulaArgs) -> Result<ParseStatus> {
    let config = load_config(args)?;
    let input = acquire_input(args).await?;

    let wrapper = FormulaParser::with_config(config).parse(
        &input.text,
        input.source_type,
        &input.original_filename,
    );
    info!("Propellant parse finished with status {}", wrapper.status());

    let table = sorted_table(&wrapper, formula_args);

    if args.format == OutputFormat::Human {
        let success = format!("Parsed {} propellants.", wrapper.payload.propellants.len());
        print_banner(&wrapper, &success);
    }

    emit(args, &wrapper, wrapper.status(), || render_table(&table)).await?;

    Ok(wrapper.status())
}

/// Propellant table with the requested sort applied
pub fn sorted_table(wrapper: &FormulaWrapper, formula_args: &FormulaArgs) -> PropellantTable {
    let mut table = PropellantTable::new(wrapper.payload.propellants.clone());
    if let Some(key) = formula_args.sort {
        table.toggle_sort(key);
        if formula_args.desc {
            table.toggle_sort(key);
        }
    }
    table
}

fn render_table(table: &PropellantTable) {
    let headers: Vec<&str> = std::iter::once("Id")
        .chain(SortKey::ALL.iter().map(|key| key.column_label()))
        .collect();

    let rows: Vec<Vec<String>> = table
        .sorted()
        .into_iter()
        .map(|record| {
            let row = PropellantRow::from(record);
            vec![
                row.propellant_id,
                row.name,
                row.isp_star,
                row.burn_rate_a,
                row.burn_rate_n,
                row.density,
                row.specific_heat_ratio,
            ]
        })
        .collect();

    println!();
    print_table(&headers, &rows);

    if let Some(key) = table.sort_state().key {
        println!(
            "{}",
            format!("Sorted by {} ({:?})", key, table.sort_state().direction).bright_black()
        );
    }
}
