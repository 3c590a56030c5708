//! Run configuration loaded from TOML
//!
//! A config file supplies the base profile, the purchased upgrades and
//! report settings. Every section is optional; missing values fall back
//! to the documented defaults.
//!
//! ```toml
//! [base]
//! cards_left = 41000
//! og_server = true
//!
//! [upgrades]
//! Bronze = 2
//! Ruby = 4
//!
//! [report]
//! hours_per_day = 24
//! ```

use crate::core::constants::HOURS_PER_DAY;
use crate::core::error::{OddsError, Result};
use crate::stats::{StatisticsRecord, UpgradeSelection};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Widest precision the text report will print
pub const MAX_PRECISION: usize = 12;

/// How results are projected and printed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Roll sets per day
    ///
    /// A roll set is one batch of `rolls` attempts, available once an
    /// hour, so the default is 24.
    pub hours_per_day: u32,

    /// Decimal places for per-roll odds
    pub odds_precision: usize,

    /// Decimal places for roll set and daily projections
    pub projection_precision: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            hours_per_day: HOURS_PER_DAY,
            odds_precision: 4,
            projection_precision: 2,
        }
    }
}

/// Complete run configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OddsConfig {
    /// Base profile before upgrades
    pub base: StatisticsRecord,
    /// Upgrade name to level
    pub upgrades: UpgradeSelection,
    pub report: ReportConfig,
}

impl OddsConfig {
    /// Check report settings for values the report cannot use
    ///
    /// The profile itself is never rejected; odd profiles just produce
    /// degenerate odds.
    pub fn validate(&self) -> Result<()> {
        if self.report.hours_per_day == 0 {
            return Err(OddsError::InvalidConfig(
                "report.hours_per_day must be at least 1".into(),
            ));
        }

        if self.report.odds_precision > MAX_PRECISION
            || self.report.projection_precision > MAX_PRECISION
        {
            return Err(OddsError::InvalidConfig(format!(
                "report precision must be <= {} (odds {}, projection {})",
                MAX_PRECISION, self.report.odds_precision, self.report.projection_precision
            )));
        }

        Ok(())
    }
}

/// Load and validate a config file
pub fn load_config(path: &Path) -> Result<OddsConfig> {
    let contents = fs::read_to_string(path)?;
    let config: OddsConfig = toml::from_str(&contents)?;
    config.validate()?;
    tracing::info!("Loaded config from {}", path.display());
    Ok(config)
}
