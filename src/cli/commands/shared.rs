//! Shared components for CLI commands
//!
//! Logging setup, configuration loading, status banners and JSON output.

use anyhow::{Context, Result};
use colored::*;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

use crate::cli::args::{Args, OutputFormat};
use crate::cli::input::{InputText, read_input};
use crate::config::ParserConfig;
use crate::models::{ParseStatus, ParseWrapper};

/// Set up structured logging
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("burnsim_ingest={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
}

/// Configuration from --config, or the defaults
pub fn load_config(args: &Args) -> Result<ParserConfig> {
    match &args.config {
        Some(path) => ParserConfig::from_json_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display())),
        None => Ok(ParserConfig::default()),
    }
}

/// Read the subcommand's input file, or stdin
pub async fn acquire_input(args: &Args) -> Result<InputText> {
    let path = args.input_file().map(|path| path.as_path());
    let input = read_input(path).await.with_context(|| match path {
        Some(path) => format!("Failed to read {}", path.display()),
        None => "Failed to read stdin".to_string(),
    })?;

    info!(
        "Read {} input ({} bytes)",
        input.source_type,
        input.text.len()
    );
    Ok(input)
}

/// Status banner text: the success message, or the warnings or errors
/// joined by two spaces
pub fn banner_text<P>(wrapper: &ParseWrapper<P>, success: &str) -> String {
    match wrapper.parse.status {
        ParseStatus::Ok => success.to_string(),
        ParseStatus::Warning => wrapper.parse.warnings.join("  "),
        ParseStatus::Error => wrapper.parse.errors.join("  "),
    }
}

pub fn print_banner<P>(wrapper: &ParseWrapper<P>, success: &str) {
    let text = banner_text(wrapper, success);
    match wrapper.parse.status {
        ParseStatus::Ok => println!("{}", text.bright_green().bold()),
        ParseStatus::Warning => println!("{}", text.yellow().bold()),
        ParseStatus::Error => println!("{}", text.bright_red().bold()),
    }
}

/// Serialize the wrapper in the requested JSON layout
pub fn to_json<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    let json = match format {
        OutputFormat::Json => serde_json::to_string(value),
        OutputFormat::Pretty | OutputFormat::Human => serde_json::to_string_pretty(value),
    };
    json.context("Failed to serialize wrapper")
}

pub async fn write_json_file(path: &Path, json: &str) -> Result<()> {
    tokio::fs::write(path, format!("{}\n", json))
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Wrote wrapper to {}", path.display());
    Ok(())
}

/// Emit a wrapper according to --format and --output.
///
/// `render_human` prints the tables for the human format; it is skipped in
/// quiet mode and when the parse failed.
pub async fn emit<T, F>(args: &Args, wrapper: &T, status: ParseStatus, render_human: F) -> Result<()>
where
    T: Serialize,
    F: FnOnce(),
{
    if let Some(path) = &args.output {
        write_json_file(path, &to_json(wrapper, args.format)?).await?;
    }

    match args.format {
        OutputFormat::Human => {
            if !args.quiet && status != ParseStatus::Error {
                render_human();
            }
        }
        OutputFormat::Json | OutputFormat::Pretty => {
            if args.output.is_none() {
                println!("{}", to_json(wrapper, args.format)?);
            }
        }
    }

    Ok(())
}

/// Print a table with a bold header row and left-aligned columns
pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: Vec<String>| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join("  ")
    };

    let header_cells = headers.iter().map(|h| h.to_string()).collect();
    println!("{}", line(header_cells).bright_cyan().bold());
    for row in rows {
        println!("{}", line(row.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eng::parse_eng_text;
    use crate::models::SourceType;

    #[test]
    fn test_banner_text() {
        let ok = parse_eng_text("X 1 2 3 4 5\n0 0\n1 1\n", SourceType::Paste, "");
        assert_eq!(banner_text(&ok, "done"), "done");

        let warned = parse_eng_text("X 1 2 3 4 5\n0 0\nx\ny\n1 1\n", SourceType::Paste, "");
        assert_eq!(
            banner_text(&warned, "done"),
            "Skipped non-curve line: \"x\"  Skipped non-curve line: \"y\""
        );

        let failed = parse_eng_text("X 1 2 3 4 5\n", SourceType::Paste, "");
        assert_eq!(
            banner_text(&failed, "done"),
            "ENG thrust curve requires at least two time/thrust points."
        );
    }

    #[test]
    fn test_to_json_layouts() {
        let wrapper = parse_eng_text("X 1 2 3 4 5\n0 0\n1 1\n", SourceType::Paste, "");

        let compact = to_json(&wrapper, OutputFormat::Json).unwrap();
        assert!(!compact.contains('\n'));
        let pretty = to_json(&wrapper, OutputFormat::Pretty).unwrap();
        assert!(pretty.contains("\n  \"schema\": \"burnsim-eng-json\""));
    }
}
