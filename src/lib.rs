//! Wish Odds - roll, wish and kakera spawn odds for upgraded profiles
//!
//! The pipeline is two pure steps: [`aggregate`] folds purchased upgrades
//! into a base [`StatisticsRecord`], then [`calculate`] derives the
//! per-roll odds from the effective record.

pub mod core;
pub mod input;
pub mod odds;
pub mod report;
pub mod stats;

pub use crate::core::{OddsError, Result, CARD_TOTAL};
pub use odds::{calculate, OddsResult, Projection};
pub use report::{evaluate, render_text, Evaluation};
pub use stats::{aggregate, StatisticsRecord, UpgradeKind, UpgradeSelection};
