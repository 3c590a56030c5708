//! Per-roll odds for a single effective profile

use crate::core::constants::KSPAWN_WEIGHT;
use crate::stats::StatisticsRecord;
use serde::{Deserialize, Serialize};

/// Per-roll probabilities
///
/// `wish_odds` and `star_wish_odds` add up independent per-slot chances
/// and are not capped at 1. They behave like an expected hit count
/// rather than a true combined probability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OddsResult {
    /// One exact card on a plain roll
    pub specific_roll_odds: f64,
    /// One exact card on a wish-boosted roll
    pub specific_wish_odds: f64,
    /// Any of the normal (non-star) wishes
    pub wish_odds: f64,
    /// Any of the star wishes
    pub star_wish_odds: f64,
    /// Kakera spawn, clamped to [0, 1]
    pub kspawn_odds: f64,
}

impl OddsResult {
    /// All five values multiplied by `factor`
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            specific_roll_odds: self.specific_roll_odds * factor,
            specific_wish_odds: self.specific_wish_odds * factor,
            wish_odds: self.wish_odds * factor,
            star_wish_odds: self.star_wish_odds * factor,
            kspawn_odds: self.kspawn_odds * factor,
        }
    }

    /// Name / value pairs in declaration order
    pub fn entries(&self) -> [(&'static str, f64); 5] {
        [
            ("specific_roll_odds", self.specific_roll_odds),
            ("specific_wish_odds", self.specific_wish_odds),
            ("wish_odds", self.wish_odds),
            ("star_wish_odds", self.star_wish_odds),
            ("kspawn_odds", self.kspawn_odds),
        ]
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// Compute per-roll odds for an effective profile
///
/// An empty or negative pool yields all zeros instead of dividing by it.
pub fn calculate(stats: &StatisticsRecord) -> OddsResult {
    let available = stats.cards_available();
    if available <= 0 {
        tracing::debug!(
            "No cards available (left {}, disabled {}), odds are zero",
            stats.cards_left,
            stats.disabled_cards
        );
        return OddsResult::default();
    }

    let available = available as f64;
    let base = 1.0 / available;

    let wish_mult = 1.0 + stats.w_boost as f64 / 100.0;
    let star_mult = 1.0 + (stats.w_boost as f64 + stats.sw_boost as f64) / 100.0;

    let normal_slots = stats.w_slots.saturating_sub(stats.sw_slots).max(0) as f64;

    let k_raw = stats.cards_claimed as f64 * (KSPAWN_WEIGHT / stats.persrare.max(1) as f64) / available;

    OddsResult {
        specific_roll_odds: base,
        specific_wish_odds: base * wish_mult,
        wish_odds: normal_slots * base * wish_mult,
        star_wish_odds: stats.sw_slots as f64 * base * star_mult,
        kspawn_odds: k_raw.clamp(0.0, 1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::CARD_TOTAL;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-12,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_default_profile_odds() {
        let odds = calculate(&StatisticsRecord::default());
        let base = 1.0 / CARD_TOTAL as f64;

        assert_close(odds.specific_roll_odds, base);
        assert_close(odds.specific_wish_odds, base);
        assert_close(odds.wish_odds, 4.0 * base);
        assert_close(odds.star_wish_odds, base);
        assert_close(odds.kspawn_odds, 0.0);
    }

    #[test]
    fn test_boosts_apply() {
        let stats = StatisticsRecord {
            w_slots: 7,
            w_boost: 25,
            sw_boost: 50,
            ..Default::default()
        };
        let odds = calculate(&stats);
        let base = 1.0 / CARD_TOTAL as f64;

        assert_close(odds.specific_wish_odds, base * 1.25);
        assert_close(odds.wish_odds, 6.0 * base * 1.25);
        assert_close(odds.star_wish_odds, base * 1.75);
    }

    #[test]
    fn test_star_boost_sums_in_floating_point() {
        let stats = StatisticsRecord {
            cards_left: 1000,
            sw_slots: 1,
            w_boost: i64::MAX,
            sw_boost: i64::MAX,
            ..Default::default()
        };
        let expected = (1.0 + 2.0 * i64::MAX as f64 / 100.0) / 1000.0;
        let odds = calculate(&stats);
        assert!((odds.star_wish_odds - expected).abs() / expected < 1e-12);
    }

    #[test]
    fn test_empty_pool_is_zero() {
        let stats = StatisticsRecord {
            cards_left: 0,
            cards_claimed: CARD_TOTAL,
            ..Default::default()
        };
        assert!(calculate(&stats).is_zero());
    }

    #[test]
    fn test_overdisabled_pool_is_zero() {
        let stats = StatisticsRecord {
            cards_left: 100,
            disabled_cards: 150,
            ..Default::default()
        };
        assert!(calculate(&stats).is_zero());
    }

    #[test]
    fn test_star_slots_exceeding_wish_slots() {
        let stats = StatisticsRecord {
            w_slots: 2,
            sw_slots: 5,
            cards_left: 1000,
            ..Default::default()
        };
        let odds = calculate(&stats);
        assert_eq!(odds.wish_odds, 0.0);
        assert_close(odds.star_wish_odds, 5.0 / 1000.0);
    }

    #[test]
    fn test_kspawn_uses_rarity_divisor() {
        let stats = StatisticsRecord {
            cards_left: 10000,
            cards_claimed: 100,
            persrare: 4,
            ..Default::default()
        };
        assert_close(calculate(&stats).kspawn_odds, 100.0 * 12.5 / 10000.0);
    }

    #[test]
    fn test_kspawn_floors_rarity_divisor() {
        let zero_rare = StatisticsRecord {
            cards_left: 10000,
            cards_claimed: 100,
            persrare: 0,
            ..Default::default()
        };
        let one_rare = StatisticsRecord {
            persrare: 1,
            ..zero_rare
        };
        assert_eq!(calculate(&zero_rare).kspawn_odds, calculate(&one_rare).kspawn_odds);
        assert_close(calculate(&one_rare).kspawn_odds, 0.5);
    }

    #[test]
    fn test_kspawn_clamped() {
        let high = StatisticsRecord {
            cards_left: 100,
            cards_claimed: 43748,
            ..Default::default()
        };
        assert_eq!(calculate(&high).kspawn_odds, 1.0);

        let negative = StatisticsRecord {
            cards_left: 50000,
            cards_claimed: -6152,
            ..Default::default()
        };
        assert_eq!(calculate(&negative).kspawn_odds, 0.0);
    }

    #[test]
    fn test_scaled_and_entries() {
        let odds = OddsResult {
            specific_roll_odds: 0.1,
            specific_wish_odds: 0.2,
            wish_odds: 0.3,
            star_wish_odds: 0.4,
            kspawn_odds: 0.5,
        };
        let doubled = odds.scaled(2.0);
        assert_close(doubled.kspawn_odds, 1.0);

        let entries = odds.entries();
        assert_eq!(entries[0], ("specific_roll_odds", 0.1));
        assert_eq!(entries[4], ("kspawn_odds", 0.5));
    }
}
