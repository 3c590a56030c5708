//! Fixed game constants
//!
//! Values that are part of the game itself rather than the player's
//! profile. Tuning knobs for the report live in [`crate::core::config`].

/// Total number of cards in the claimable pool
pub const CARD_TOTAL: i64 = 43848;

/// Kakera spawn numerator, divided by the rarity divisor
pub const KSPAWN_WEIGHT: f64 = 50.0;

/// Flat roll bonus for accounts on an original server
pub const OG_SERVER_ROLL_BONUS: i64 = 3;

/// Tutorial level that unlocks the first star-wish boost tier
pub const TUTO_TIER_ONE_LEVEL: i64 = 10;
/// Star-wish boost granted by the first tutorial tier (percentage points)
pub const TUTO_TIER_ONE_BOOST: i64 = 50;

/// Tutorial level that unlocks the second star-wish boost tier
pub const TUTO_TIER_TWO_LEVEL: i64 = 16;
/// Star-wish boost granted by the second tutorial tier (replaces tier one)
pub const TUTO_TIER_TWO_BOOST: i64 = 100;

/// Default number of roll sets per day (one per hour)
pub const HOURS_PER_DAY: u32 = 24;
