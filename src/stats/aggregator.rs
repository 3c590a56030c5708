//! Folds upgrades and account bonuses into an effective profile

use crate::core::constants::{
    OG_SERVER_ROLL_BONUS, TUTO_TIER_ONE_BOOST, TUTO_TIER_ONE_LEVEL, TUTO_TIER_TWO_BOOST,
    TUTO_TIER_TWO_LEVEL,
};
use crate::stats::{StatisticsRecord, UpgradeSelection};

/// Compute the effective profile for `base` with `upgrades` purchased
///
/// Works on a copy; `base` is left untouched. Unknown upgrade names and
/// non-positive levels are skipped. `cards_claimed` is always recomputed
/// from `cards_left`.
pub fn aggregate(base: &StatisticsRecord, upgrades: &UpgradeSelection) -> StatisticsRecord {
    let mut stats = *base;

    for (kind, level) in upgrades.active() {
        kind.apply(&mut stats, level);
    }

    if stats.og_server {
        stats.rolls = stats.rolls.saturating_add(OG_SERVER_ROLL_BONUS);
    }

    apply_tutorial_boost(&mut stats);

    stats.cards_claimed = stats.derived_claimed();

    tracing::trace!(?stats, "Effective stats");
    stats
}

/// Tutorial tiers are exclusive: the higher tier replaces the lower one
fn apply_tutorial_boost(stats: &mut StatisticsRecord) {
    let bonus = if stats.tuto_lvl >= TUTO_TIER_TWO_LEVEL {
        TUTO_TIER_TWO_BOOST
    } else if stats.tuto_lvl >= TUTO_TIER_ONE_LEVEL {
        TUTO_TIER_ONE_BOOST
    } else {
        0
    };
    stats.sw_boost = stats.sw_boost.saturating_add(bonus);
}
