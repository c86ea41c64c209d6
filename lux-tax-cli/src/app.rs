use std::path::Path;

use anyhow::{Context, Result};
use lux_tax_core::{ComparisonResult, FilingMethod, IncomePair, TaxationEngine};
use lux_tax_data::ScheduleLoader;
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::report::{MethodSelection, render_comparison, render_schedule};
use crate::utils::parse_income;

/// Builds the engine from a schedule file, or the built-in Luxembourg
/// schedules when none is configured.
pub fn build_engine(schedules_csv: Option<&Path>) -> Result<TaxationEngine> {
    match schedules_csv {
        Some(path) => {
            info!(path = %path.display(), "loading bracket schedules");
            let schedules = ScheduleLoader::load_from_file(path)
                .with_context(|| format!("Failed to load schedules: {}", path.display()))?;
            Ok(schedules.into_engine())
        }
        None => {
            debug!("using built-in Luxembourg schedules");
            Ok(TaxationEngine::luxembourg())
        }
    }
}

/// Resolves the household from command-line text, falling back to the
/// configured defaults for anything not given.
pub fn resolve_incomes(
    income1: Option<&str>,
    income2: Option<&str>,
    config: &AppConfig,
) -> Result<IncomePair> {
    let parse = |text: Option<&str>, fallback: Decimal, name: &str| -> Result<Decimal> {
        match text {
            Some(text) => parse_income(text).with_context(|| format!("Invalid {name}")),
            None => Ok(fallback),
        }
    };
    let income1 = parse(income1, config.income1(), "first income")?;
    let income2 = parse(income2, config.income2(), "second income")?;
    Ok(IncomePair::new(income1, income2)?)
}

pub fn run_compare(
    engine: &TaxationEngine,
    incomes: &IncomePair,
    selection: MethodSelection,
    json: bool,
) -> Result<String> {
    let result: ComparisonResult = engine.compare(incomes);
    info!(
        recommendation = %result.recommendation,
        savings = %result.savings,
        "comparison complete"
    );

    if json {
        serde_json::to_string_pretty(&result).context("Failed to serialize result")
    } else {
        Ok(render_comparison(&result, incomes, selection))
    }
}

pub fn run_schedules(engine: &TaxationEngine) -> String {
    FilingMethod::all()
        .iter()
        .map(|method| render_schedule(*method, engine.schedule_for(*method)))
        .collect::<Vec<_>>()
        .join("\n\n")
}
