//! Per-roll odds scaled up to a roll set and a full day

use crate::odds::OddsResult;
use serde::{Deserialize, Serialize};

/// Odds at three horizons
///
/// A roll set is one batch of `rolls` attempts; a day is
/// `hours_per_day` roll sets. Scaled values are expected hit counts and
/// may exceed 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub rolls_per_set: i64,
    pub rolls_per_day: i64,
    pub per_roll: OddsResult,
    pub per_roll_set: OddsResult,
    pub per_day: OddsResult,
}

impl Projection {
    /// Negative roll counts are treated as zero
    pub fn new(per_roll: &OddsResult, rolls: i64, hours_per_day: u32) -> Self {
        let rolls_per_set = rolls.max(0);
        let rolls_per_day = rolls_per_set.saturating_mul(i64::from(hours_per_day));
        Self {
            rolls_per_set,
            rolls_per_day,
            per_roll: *per_roll,
            per_roll_set: per_roll.scaled(rolls_per_set as f64),
            per_day: per_roll.scaled(rolls_per_day as f64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_scales_by_rolls() {
        let odds = OddsResult {
            specific_roll_odds: 0.01,
            kspawn_odds: 0.1,
            ..Default::default()
        };
        let projection = Projection::new(&odds, 10, 24);

        assert_eq!(projection.rolls_per_set, 10);
        assert_eq!(projection.rolls_per_day, 240);
        assert!((projection.per_roll_set.specific_roll_odds - 0.1).abs() < 1e-12);
        assert!((projection.per_day.kspawn_odds - 24.0).abs() < 1e-9);
        assert_eq!(projection.per_roll, odds);
    }

    #[test]
    fn test_negative_rolls_project_to_zero() {
        let odds = OddsResult {
            wish_odds: 0.5,
            ..Default::default()
        };
        let projection = Projection::new(&odds, -4, 24);
        assert_eq!(projection.rolls_per_set, 0);
        assert!(projection.per_day.is_zero());
    }
}
