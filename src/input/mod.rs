//! Normalization of raw user input into typed pipeline inputs
//!
//! Values coming from forms or the command line are coerced leniently:
//! nothing here rejects a bad number, it just becomes 0. The only error
//! is a malformed `NAME=VALUE` pair.

pub mod coerce;
pub mod overrides;

pub use coerce::{coerce_bool, coerce_int};
pub use overrides::StatsOverrides;

use crate::core::error::{OddsError, Result};
use crate::stats::{StatisticsRecord, UpgradeSelection};
use serde_json::{Map, Value};

/// Build an upgrade selection from raw name/level pairs
pub fn upgrades_from_raw(raw: &Map<String, Value>) -> UpgradeSelection {
    raw.iter()
        .map(|(name, level)| (name.clone(), coerce_int(level)))
        .collect()
}

/// Merge raw stat overrides onto `defaults` and coerce raw upgrade levels
pub fn adapt(
    defaults: &StatisticsRecord,
    raw_stats: &Map<String, Value>,
    raw_upgrades: &Map<String, Value>,
) -> (StatisticsRecord, UpgradeSelection) {
    let base = StatsOverrides::from_raw(raw_stats).apply(defaults);
    (base, upgrades_from_raw(raw_upgrades))
}

/// Split `NAME=VALUE` into its parts
///
/// The value is kept as a string and coerced later by whoever knows the
/// field's type.
pub fn parse_assignment(pair: &str) -> Result<(String, Value)> {
    let (name, value) = pair
        .split_once('=')
        .ok_or_else(|| OddsError::InvalidAssignment(pair.to_string()))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(OddsError::InvalidAssignment(pair.to_string()));
    }
    Ok((name.to_string(), Value::String(value.trim().to_string())))
}

/// Parse a list of `NAME=VALUE` pairs into a raw field map
///
/// Later pairs win over earlier ones with the same name.
pub fn parse_assignments<S: AsRef<str>>(pairs: &[S]) -> Result<Map<String, Value>> {
    let mut map = Map::new();
    for pair in pairs {
        let (name, value) = parse_assignment(pair.as_ref())?;
        map.insert(name, value);
    }
    Ok(map)
}
