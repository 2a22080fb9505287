//! sheetdiff CLI - workbook comparison tool

mod config;
mod output;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use sheetdiff::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[derive(Parser)]
#[command(name = "sheetdiff")]
#[command(
    author,
    version,
    about = "Compare two spreadsheet workbooks sheet by sheet and cell by cell"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two workbooks and write an XLSX report
    Compare {
        /// Left workbook (xlsx, xlsm, xlsb, xls, ods, csv)
        left: PathBuf,

        /// Right workbook
        right: PathBuf,

        /// Maximum absolute difference for numbers to count as equal
        #[arg(short, long)]
        tolerance: Option<f64>,

        /// Report file (overrides --report-dir and --name)
        #[arg(short, long, conflicts_with_all = ["report_dir", "name"])]
        output: Option<PathBuf>,

        /// Directory for the report
        #[arg(long)]
        report_dir: Option<PathBuf>,

        /// Report file name (default: Comparison_YYYYMMDD_HHMMSS.xlsx)
        #[arg(long)]
        name: Option<String>,

        /// Display name of the left workbook
        #[arg(long)]
        left_label: Option<String>,

        /// Display name of the right workbook
        #[arg(long)]
        right_label: Option<String>,

        /// Print the report as JSON instead of the summary
        #[arg(long)]
        json: bool,

        /// Maximum number of issue lines to print
        #[arg(long, default_value = "200")]
        max_lines: usize,

        /// Config file (default: ./sheetdiff.json when present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// List sheets with their sizes and column types
    Sheets {
        /// Input spreadsheet file
        input: PathBuf,
    },
}

/// Exit status when the workbooks differ
const EXIT_DIFFERENCES: u8 = 1;
/// Exit status for load, write and config errors
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Compare {
            left,
            right,
            tolerance,
            output,
            report_dir,
            name,
            left_label,
            right_label,
            json,
            max_lines,
            config,
        } => Config::load(config.as_deref()).and_then(|config| {
            let options = CompareOptions {
                tolerance: tolerance.unwrap_or(config.numeric_tolerance),
                left_label: left_label.unwrap_or_else(|| config.left_label.clone()),
                right_label: right_label.unwrap_or_else(|| config.right_label.clone()),
            };
            let report_path = match output {
                Some(path) => with_xlsx_extension(path),
                None => {
                    let dir = report_dir.unwrap_or_else(|| config.resolved_report_dir());
                    dir.join(report_file_name(name.as_deref()))
                }
            };
            run_compare(&left, &right, &options, &report_path, json, max_lines)
        }),
        Commands::Sheets { input } => list_sheets(&input).map(|()| true),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(EXIT_DIFFERENCES),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Log to stderr. `RUST_LOG` wins when set; otherwise `-v` picks the level.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Compare, write the report and print the result. Returns whether every
/// sheet matched.
fn run_compare(
    left: &Path,
    right: &Path,
    options: &CompareOptions,
    report_path: &Path,
    json: bool,
    max_lines: usize,
) -> Result<bool> {
    info!(
        "Comparing '{}' ({}) with '{}' ({})",
        left.display(),
        options.left_label,
        right.display(),
        options.right_label
    );

    let report = compare_files(left, right, options).with_context(|| {
        format!(
            "Failed to load '{}' or '{}'",
            left.display(),
            right.display()
        )
    })?;

    write_report(&report, report_path).context("Failed to write report")?;
    info!("Wrote report to '{}'", report_path.display());

    if json {
        let text = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", text);
    } else {
        print!("{}", output::render_summary(&report, options, max_lines));
        println!();
        println!("Report: {}", report_path.display());
    }

    Ok(report.all_matched())
}

fn list_sheets(input: &Path) -> Result<()> {
    let sheets = load(input).with_context(|| format!("Failed to open '{}'", input.display()))?;

    println!("File: {}", input.display());
    println!("Sheets: {}", sheets.len());

    for (i, (name, table)) in sheets.iter().enumerate() {
        println!();
        println!("  Sheet {}: \"{}\"", i, name);
        println!(
            "    Size: {} rows x {} columns",
            table.row_count(),
            table.column_count()
        );
        for column in table.columns() {
            let dtype = table
                .column_type(column)
                .map(|t| t.as_str())
                .unwrap_or("object");
            println!("    {}: {}", column, dtype);
        }
    }

    Ok(())
}

/// Report file name, defaulting to a timestamped one
fn report_file_name(name: Option<&str>) -> PathBuf {
    let name = match name {
        Some(name) => name.to_string(),
        None => format!(
            "Comparison_{}",
            chrono::Local::now().format("%Y%m%d_%H%M%S")
        ),
    };
    with_xlsx_extension(PathBuf::from(name))
}

fn with_xlsx_extension(path: PathBuf) -> PathBuf {
    let has_extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("xlsx"))
        .unwrap_or(false);

    if has_extension {
        path
    } else {
        let mut name = path.into_os_string();
        name.push(".xlsx");
        PathBuf::from(name)
    }
}
