//! Wish Odds - command line entry point
//!
//! Builds a base profile from an optional config file plus `--set`
//! overrides, applies the selected upgrades and prints the odds.

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wish_odds::core::{load_config, OddsConfig, OddsError, Result};
use wish_odds::input::{parse_assignments, upgrades_from_raw, StatsOverrides};
use wish_odds::{evaluate, render_text};

/// Wish Odds - roll and wish odds for an upgraded profile
#[derive(Parser, Debug)]
#[command(name = "wish-odds")]
#[command(about = "Compute roll, wish and kakera spawn odds for a profile with upgrades")]
struct Args {
    /// TOML config with [base], [upgrades] and [report] sections
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override a base stat, e.g. --set cards_left=41000 (repeatable)
    #[arg(long = "set", value_name = "FIELD=VALUE")]
    sets: Vec<String>,

    /// Set an upgrade level, e.g. --upgrade Ruby=4 (repeatable)
    #[arg(long = "upgrade", value_name = "NAME=LEVEL")]
    upgrades: Vec<String>,

    /// Output format: text or json
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "wish_odds=debug"
    } else {
        "wish_odds=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => OddsConfig::default(),
    };

    let raw_stats = parse_assignments(&args.sets)?;
    let raw_upgrades = parse_assignments(&args.upgrades)?;

    let base = StatsOverrides::from_raw(&raw_stats).apply(&config.base);
    config.upgrades.merge(&upgrades_from_raw(&raw_upgrades));

    let evaluation = evaluate(&base, &config.upgrades, config.report.hours_per_day);

    match args.format.as_str() {
        "text" => print!("{}", render_text(&evaluation, &config.report)),
        "json" => println!("{}", serde_json::to_string_pretty(&evaluation)?),
        other => return Err(OddsError::UnknownFormat(other.to_string())),
    }

    Ok(())
}
