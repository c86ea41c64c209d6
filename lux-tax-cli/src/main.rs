use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, warn};

use lux_tax_cli::app;
use lux_tax_cli::config::AppConfig;
use lux_tax_cli::findings::render_findings;
use lux_tax_cli::logging;
use lux_tax_cli::report::MethodSelection;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Joint versus individual taxation calculator for Luxembourg households.
#[derive(Debug, Parser)]
#[command(name = "lux-tax", version, about)]
struct Cli {
    /// TOML configuration file (defaults to ./lux-tax.toml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Bracket schedule CSV overriding the configured or built-in schedules.
    #[arg(long, global = true)]
    schedules: Option<PathBuf>,

    /// Log filter directive, e.g. `debug` or `lux_tax_core=debug`.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Suppress log output on stderr.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compare joint and individual taxation for a two-earner household.
    Compare {
        /// First partner's annual gross income in euros.
        #[arg(allow_hyphen_values = true)]
        income1: Option<String>,

        /// Second partner's annual gross income in euros.
        #[arg(allow_hyphen_values = true)]
        income2: Option<String>,

        /// Filing methods to display.
        #[arg(long, value_enum, default_value_t = MethodSelection::Both)]
        method: MethodSelection,

        /// Print the comparison as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Print the research findings on individual taxation.
    Findings,

    /// Print the active bracket schedules.
    Schedules,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    logging::init_logging();

    let cli = Cli::parse();

    let config = AppConfig::discover(cli.config.as_deref()).context("Failed to load config")?;

    if let Some(level) = cli.log_level.as_deref().or(config.log_level.as_deref()) {
        logging::set_log_level(level)?;
    }
    if cli.quiet {
        logging::set_stderr_enabled(false)?;
    }
    if let Some(path) = &config.log_file {
        if let Err(error) = logging::enable_file_logging(path) {
            warn!(?error, "file logging disabled");
        }
    }
    debug!(?config, "configuration loaded");

    let schedules = cli.schedules.as_deref().or(config.schedules_csv.as_deref());

    let command = cli.command.unwrap_or(Command::Compare {
        income1: None,
        income2: None,
        method: MethodSelection::Both,
        json: false,
    });

    match command {
        Command::Compare {
            income1,
            income2,
            method,
            json,
        } => {
            let engine = app::build_engine(schedules)?;
            let incomes = app::resolve_incomes(income1.as_deref(), income2.as_deref(), &config)?;
            println!("{}", app::run_compare(&engine, &incomes, method, json)?);
        }
        Command::Findings => println!("{}", render_findings()),
        Command::Schedules => {
            let engine = app::build_engine(schedules)?;
            println!("{}", app::run_schedules(&engine));
        }
    }

    Ok(())
}
