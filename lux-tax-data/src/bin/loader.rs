use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use lux_tax_core::calculations::{format_currency, format_percentage};
use lux_tax_core::{BracketSchedule, FilingMethod, IncomePair};
use lux_tax_data::{ScheduleLoader, ScheduleSet};
use rust_decimal::Decimal;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Validate a bracket schedule CSV file and print a summary.
///
/// The CSV file should have the following columns:
/// - schedule: The filing method (joint or individual)
/// - min_income: The inclusive lower bound of the bracket
/// - max_income: The exclusive upper bound (empty for unlimited)
/// - rate: The marginal tax rate as a decimal (e.g., 0.39)
#[derive(Parser, Debug)]
#[command(name = "tax-schedule-loader")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the CSV file containing bracket schedules.
    /// Omit to use the built-in Luxembourg schedules.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Write the schedules as CSV to this path ("-" for stdout, which then
    /// carries only the CSV)
    #[arg(short, long)]
    export: Option<PathBuf>,
}

impl Args {
    fn exports_to_stdout(&self) -> bool {
        self.export
            .as_deref()
            .is_some_and(|path| path.as_os_str() == "-")
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn print_schedule(
    method: FilingMethod,
    schedule: &BracketSchedule,
) {
    println!("{} ({} brackets)", method.label(), schedule.brackets().len());
    for bracket in schedule.brackets() {
        let upper = bracket
            .max_income
            .map(format_currency)
            .unwrap_or_else(|| "and above".to_string());
        println!(
            "  {:>14} - {:<14} {:>7}",
            format_currency(bracket.min_income),
            upper,
            format_percentage(bracket.tax_rate)
        );
    }
}

fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();

    let schedules = match &args.file {
        Some(path) => {
            info!("Loading schedules from: {}", path.display());
            ScheduleLoader::load_from_file(path)
                .with_context(|| format!("Failed to load schedules: {}", path.display()))?
        }
        None => ScheduleSet::luxembourg(),
    };

    let to_stdout = args.exports_to_stdout();
    if !to_stdout {
        for method in FilingMethod::all() {
            print_schedule(*method, schedules.get(*method));
        }
    }

    if let Some(path) = &args.export {
        if to_stdout {
            ScheduleLoader::write(io::stdout().lock(), &schedules)
                .context("Failed to write schedules to stdout")?;
        } else {
            let file = File::create(path)
                .with_context(|| format!("Failed to create: {}", path.display()))?;
            ScheduleLoader::write(file, &schedules)
                .with_context(|| format!("Failed to write: {}", path.display()))?;
            info!("Wrote schedules to: {}", path.display());
        }
    }

    let engine = schedules.into_engine();
    let incomes = IncomePair::new(Decimal::from(70_000), Decimal::from(20_000))?;
    let result = engine.compare(&incomes);
    let reference = format!(
        "Reference household {} / {}: joint {}, individual {}, recommended {}",
        format_currency(incomes.income1()),
        format_currency(incomes.income2()),
        format_currency(result.joint.tax),
        format_currency(result.individual.tax),
        result.recommendation
    );
    if to_stdout {
        info!("{reference}");
    } else {
        println!("{reference}");
    }

    Ok(())
}
