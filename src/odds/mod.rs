//! Odds derived from an effective profile

pub mod calculator;
pub mod projection;

pub use calculator::{calculate, OddsResult};
pub use projection::Projection;
