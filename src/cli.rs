//! Non-interactive command line entry point: load a saved plan, project it,
//! roll it up and print the result as JSON.

use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;
use thiserror::Error;

use crate::config::{ConfigError, ConfigManager, Settings};
use crate::errors::PlanError;
use crate::projection::{aggregate, project, ChartSeries, Granularity, Table, MAX_HORIZON_MONTHS};
use crate::utils::{build_info, persistence::load_plan_from_path};

#[derive(Debug, Parser)]
#[command(name = "invest_core_cli", version, about = "Project a capital investment plan")]
pub struct CliArgs {
    /// Saved investment plan (JSON).
    pub plan: PathBuf,

    /// Planning horizon in months (at most 1200). Defaults to the configured horizon.
    #[arg(long, value_parser = clap::value_parser!(u32).range(..=MAX_HORIZON_MONTHS as i64))]
    pub horizon: Option<u32>,

    /// monthly, quarterly, semiannual or annual. Unknown values fall back to monthly.
    #[arg(long)]
    pub period: Option<String>,

    /// Also emit chart series for the configured chart rows.
    #[arg(long)]
    pub series: bool,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Plan(#[from] PlanError),
    #[error("Serialization error: {0}")]
    Output(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
struct Report {
    horizon: u32,
    granularity: Granularity,
    total_initial_investment: f64,
    table: Table,
    #[serde(skip_serializing_if = "Option::is_none")]
    series: Option<Vec<ChartSeries>>,
}

/// Parses process arguments, loads settings from the default location and runs.
pub fn run_cli() -> Result<String, CliError> {
    let args = CliArgs::parse();
    let settings = ConfigManager::from_default_location()
        .load()?
        .with_env_overrides()?;
    run(&args, &settings)
}

pub fn run(args: &CliArgs, settings: &Settings) -> Result<String, CliError> {
    tracing::debug!(build = %build_info::current().summary(), "invest_core_cli starting");

    let plan = load_plan_from_path(&args.plan)?;
    let horizon = args.horizon.unwrap_or(settings.default_horizon_months);
    let granularity = args
        .period
        .as_deref()
        .map(Granularity::parse_or_monthly)
        .unwrap_or(settings.default_granularity);

    let table = aggregate(&project(&plan, horizon), granularity);
    let series = args.series.then(|| table.series(&settings.chart_rows));
    let report = Report {
        horizon,
        granularity,
        total_initial_investment: plan.total_initial_investment(),
        table,
        series,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
