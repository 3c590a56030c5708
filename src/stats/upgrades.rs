//! Purchasable upgrades and their stat effects

use crate::stats::StatisticsRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of Ruby tiers that carry a bonus; higher levels add nothing
pub const RUBY_MAX_TIER: i64 = 4;

/// The fixed set of upgrades
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum UpgradeKind {
    Bronze,
    Silver,
    Gold,
    Sapphire,
    Ruby,
}

impl UpgradeKind {
    pub const ALL: [UpgradeKind; 5] = [
        UpgradeKind::Bronze,
        UpgradeKind::Silver,
        UpgradeKind::Gold,
        UpgradeKind::Sapphire,
        UpgradeKind::Ruby,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            UpgradeKind::Bronze => "Bronze",
            UpgradeKind::Silver => "Silver",
            UpgradeKind::Gold => "Gold",
            UpgradeKind::Sapphire => "Sapphire",
            UpgradeKind::Ruby => "Ruby",
        }
    }

    /// Look up an upgrade by its exact name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Bronze" => Some(UpgradeKind::Bronze),
            "Silver" => Some(UpgradeKind::Silver),
            "Gold" => Some(UpgradeKind::Gold),
            "Sapphire" => Some(UpgradeKind::Sapphire),
            "Ruby" => Some(UpgradeKind::Ruby),
            _ => None,
        }
    }

    /// Apply this upgrade at `level` to `stats`
    ///
    /// Linear upgrades scale with level. Ruby is tiered: each of its four
    /// tiers grants its bonus once, cumulatively up to `level`.
    pub fn apply(self, stats: &mut StatisticsRecord, level: i64) {
        match self {
            UpgradeKind::Bronze => stats.w_slots = stats.w_slots.saturating_add(level),
            UpgradeKind::Silver => {
                stats.w_boost = stats.w_boost.saturating_add(level.saturating_mul(25))
            }
            UpgradeKind::Gold => {
                stats.kp_usage = stats.kp_usage.saturating_sub(level.saturating_mul(10))
            }
            UpgradeKind::Sapphire => stats.rolls = stats.rolls.saturating_add(level),
            UpgradeKind::Ruby => {
                for tier in 1..=level.min(RUBY_MAX_TIER) {
                    match tier {
                        1 => stats.w_slots = stats.w_slots.saturating_add(2),
                        2 => stats.w_boost = stats.w_boost.saturating_add(50),
                        3 => stats.kp_usage = stats.kp_usage.saturating_sub(20),
                        _ => stats.rolls = stats.rolls.saturating_add(2),
                    }
                }
            }
        }
    }
}

/// Upgrade name to purchased level
///
/// Entries are kept exactly as supplied, including unknown names and
/// non-positive levels, so a selection round-trips unchanged. Only
/// [`UpgradeSelection::active`] filters them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UpgradeSelection {
    levels: BTreeMap<String, i64>,
}

impl UpgradeSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, level: i64) -> Self {
        self.set(name, level);
        self
    }

    /// Set the level for `name`, replacing any previous entry
    pub fn set(&mut self, name: impl Into<String>, level: i64) {
        self.levels.insert(name.into(), level);
    }

    /// Raw level recorded for `name`
    pub fn get(&self, name: &str) -> Option<i64> {
        self.levels.get(name).copied()
    }

    /// Overlay `other` on top of this selection
    pub fn merge(&mut self, other: &UpgradeSelection) {
        for (name, level) in &other.levels {
            self.levels.insert(name.clone(), *level);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// All entries as supplied
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.levels.iter().map(|(name, level)| (name.as_str(), *level))
    }

    /// Entries that name a known upgrade with a positive level
    ///
    /// Skipped entries are logged at debug level.
    pub fn active(&self) -> impl Iterator<Item = (UpgradeKind, i64)> + '_ {
        self.levels.iter().filter_map(|(name, &level)| {
            match UpgradeKind::from_name(name) {
                Some(kind) if level > 0 => Some((kind, level)),
                _ => {
                    tracing::debug!("Skipping upgrade entry {}={}", name, level);
                    None
                }
            }
        })
    }
}

impl FromIterator<(String, i64)> for UpgradeSelection {
    fn from_iter<I: IntoIterator<Item = (String, i64)>>(iter: I) -> Self {
        Self {
            levels: iter.into_iter().collect(),
        }
    }
}
