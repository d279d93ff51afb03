//! Retirement Simulator - Command Line Binary
//!
//! # Usage
//!
//! ```bash
//! # Evaluate the scenario's rule (or the permanent rule) as of today
//! retirement-sim --scenario scenario.json
//!
//! # Evaluate every rule as of a given date
//! retirement-sim --scenario scenario.json --all-rules --reference-date 2025-01-01
//!
//! # List the rule variants and which ones can be evaluated
//! retirement-sim --list-rules
//! ```
//!
//! # Environment Variables
//!
//! * `SIM_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `SIM_LOG_FORMAT` - `pretty` or `json` (default: pretty)
//! * `SIM_TIMEZONE` - IANA timezone for today's date (default: America/Sao_Paulo)
//! * `SIM_CONVERSION__MALE` / `SIM_CONVERSION__FEMALE` - Conversion factors

use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use domain_retirement::RuleVariant;
use interface_cli::config::{LogFormat, SimulatorConfig};
use interface_cli::dto::Scenario;
use interface_cli::{rule_catalog, run, RunOptions};

#[derive(Debug, Parser)]
#[command(name = "retirement-sim")]
#[command(about = "Simulates retirement eligibility from a service record")]
struct Args {
    /// Scenario file (JSON)
    #[arg(short, long, required_unless_present = "list_rules")]
    scenario: Option<PathBuf>,

    /// Rule variant to evaluate, overriding the scenario
    #[arg(short, long, conflicts_with = "all_rules")]
    rule: Option<RuleVariant>,

    /// Evaluate every rule variant
    #[arg(long)]
    all_rules: bool,

    /// Reference date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    reference_date: Option<NaiveDate>,

    /// Configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the rule variants instead of simulating
    #[arg(long)]
    list_rules: bool,
}

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = SimulatorConfig::load(args.config.as_deref()).context("Failed to load configuration")?;

    init_tracing(&config);
    tracing::debug!(?args, "Starting retirement simulator");

    if args.list_rules {
        let catalog = rule_catalog(&config).context("Failed to list rules")?;
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }

    let Some(path) = args.scenario.as_deref() else {
        anyhow::bail!("a scenario file is required");
    };
    let scenario = Scenario::from_path(path)
        .with_context(|| format!("Failed to load scenario {}", path.display()))?;

    let options = RunOptions {
        rule: args.rule,
        all_rules: args.all_rules,
        reference_date: args.reference_date,
    };
    let report = run(&scenario, &options, &config).context("Simulation failed")?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Initializes the tracing subscriber, writing to stderr so the report owns stdout
fn init_tracing(config: &SimulatorConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    match config.log_format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}
