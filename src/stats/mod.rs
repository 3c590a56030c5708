//! Player statistics and the upgrades that modify them
//!
//! A [`StatisticsRecord`] is the flat roll profile a player starts from.
//! [`aggregate`] folds an [`UpgradeSelection`] plus the account-level
//! bonuses into a fresh, effective record.

pub mod aggregator;
pub mod upgrades;

pub use aggregator::aggregate;
pub use upgrades::{UpgradeKind, UpgradeSelection};

use crate::core::constants::CARD_TOTAL;
use serde::{Deserialize, Serialize};

/// A player's roll profile
///
/// All fields are scalars, so the record is `Copy`: every stage of the
/// pipeline works on its own value and never touches the caller's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatisticsRecord {
    /// Roll attempts per roll set
    pub rolls: i64,
    /// Total wish slots
    pub w_slots: i64,
    /// Star-wish slots, nominally a subset of `w_slots` (not enforced)
    pub sw_slots: i64,
    /// Wish boost in percentage points
    pub w_boost: i64,
    /// Extra star-wish boost in percentage points, stacks with `w_boost`
    pub sw_boost: i64,
    /// Cards excluded from the draw pool
    pub disabled_cards: i64,
    /// Cards still unclaimed out of [`CARD_TOTAL`]
    pub cards_left: i64,
    /// Derived from `cards_left`; recomputed by [`aggregate`]
    pub cards_claimed: i64,
    pub kp_limit: i64,
    pub kp_usage: i64,
    pub kp_bonus: i64,
    /// Original-server accounts get a flat roll bonus
    pub og_server: bool,
    /// Tutorial progress, gates the star-wish boost tiers
    pub tuto_lvl: i64,
    /// Rarity divisor for kakera spawns, floored at 1 when used
    pub persrare: i64,
}

impl Default for StatisticsRecord {
    fn default() -> Self {
        Self {
            rolls: 10,
            w_slots: 5,
            sw_slots: 1,
            w_boost: 0,
            sw_boost: 0,
            disabled_cards: 0,
            cards_left: CARD_TOTAL,
            cards_claimed: 0,
            kp_limit: 100,
            kp_usage: 100,
            kp_bonus: 0,
            og_server: false,
            tuto_lvl: 0,
            persrare: 1,
        }
    }
}

impl StatisticsRecord {
    /// Field names in declaration order, as used by serde and overrides
    pub const FIELD_NAMES: [&'static str; 14] = [
        "rolls",
        "w_slots",
        "sw_slots",
        "w_boost",
        "sw_boost",
        "disabled_cards",
        "cards_left",
        "cards_claimed",
        "kp_limit",
        "kp_usage",
        "kp_bonus",
        "og_server",
        "tuto_lvl",
        "persrare",
    ];

    /// Cards that can actually be drawn: remaining minus disabled
    ///
    /// May be zero or negative for nonsensical profiles.
    pub fn cards_available(&self) -> i64 {
        self.cards_left.saturating_sub(self.disabled_cards)
    }

    /// Cards claimed as implied by `cards_left`
    pub fn derived_claimed(&self) -> i64 {
        CARD_TOTAL.saturating_sub(self.cards_left)
    }

    /// Field name / display value pairs in declaration order
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let values = [
            self.rolls.to_string(),
            self.w_slots.to_string(),
            self.sw_slots.to_string(),
            self.w_boost.to_string(),
            self.sw_boost.to_string(),
            self.disabled_cards.to_string(),
            self.cards_left.to_string(),
            self.cards_claimed.to_string(),
            self.kp_limit.to_string(),
            self.kp_usage.to_string(),
            self.kp_bonus.to_string(),
            self.og_server.to_string(),
            self.tuto_lvl.to_string(),
            self.persrare.to_string(),
        ];
        Self::FIELD_NAMES.into_iter().zip(values).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile() {
        let stats = StatisticsRecord::default();
        assert_eq!(stats.rolls, 10);
        assert_eq!(stats.w_slots, 5);
        assert_eq!(stats.sw_slots, 1);
        assert_eq!(stats.cards_left, CARD_TOTAL);
        assert_eq!(stats.kp_usage, 100);
        assert_eq!(stats.persrare, 1);
        assert!(!stats.og_server);
    }

    #[test]
    fn test_cards_available() {
        let stats = StatisticsRecord {
            cards_left: 100,
            disabled_cards: 30,
            ..Default::default()
        };
        assert_eq!(stats.cards_available(), 70);

        let overdisabled = StatisticsRecord {
            cards_left: 10,
            disabled_cards: 30,
            ..Default::default()
        };
        assert_eq!(overdisabled.cards_available(), -20);
    }

    #[test]
    fn test_derived_claimed() {
        let stats = StatisticsRecord {
            cards_left: 43000,
            ..Default::default()
        };
        assert_eq!(stats.derived_claimed(), 848);
    }

    #[test]
    fn test_entries_follow_field_names() {
        let entries = StatisticsRecord::default().entries();
        assert_eq!(entries.len(), StatisticsRecord::FIELD_NAMES.len());
        assert_eq!(entries[0], ("rolls", "10".to_string()));
        assert_eq!(entries[11], ("og_server", "false".to_string()));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let stats: StatisticsRecord =
            serde_json::from_str(r#"{"cards_left": 40000, "og_server": true}"#).unwrap();
        assert_eq!(stats.cards_left, 40000);
        assert!(stats.og_server);
        assert_eq!(stats.w_slots, 5);
    }
}
