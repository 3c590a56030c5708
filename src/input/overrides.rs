//! Partial statistics overrides

use crate::input::coerce::{coerce_bool, coerce_int};
use crate::stats::StatisticsRecord;
use serde_json::{Map, Value};

/// A sparse set of field values to lay over a base record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsOverrides {
    pub rolls: Option<i64>,
    pub w_slots: Option<i64>,
    pub sw_slots: Option<i64>,
    pub w_boost: Option<i64>,
    pub sw_boost: Option<i64>,
    pub disabled_cards: Option<i64>,
    pub cards_left: Option<i64>,
    pub cards_claimed: Option<i64>,
    pub kp_limit: Option<i64>,
    pub kp_usage: Option<i64>,
    pub kp_bonus: Option<i64>,
    pub og_server: Option<bool>,
    pub tuto_lvl: Option<i64>,
    pub persrare: Option<i64>,
}

impl StatsOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect overrides from a raw field map, skipping unknown names
    pub fn from_raw(raw: &Map<String, Value>) -> Self {
        let mut overrides = Self::new();
        for (name, value) in raw {
            if !overrides.set(name, value) {
                tracing::debug!("Ignoring unknown stat field '{}'", name);
            }
        }
        overrides
    }

    /// Coerce and record `value` for `field`
    ///
    /// Returns false if `field` is not a statistics field.
    pub fn set(&mut self, field: &str, value: &Value) -> bool {
        let slot = match field {
            "og_server" => {
                self.og_server = Some(coerce_bool(value));
                return true;
            }
            "rolls" => &mut self.rolls,
            "w_slots" => &mut self.w_slots,
            "sw_slots" => &mut self.sw_slots,
            "w_boost" => &mut self.w_boost,
            "sw_boost" => &mut self.sw_boost,
            "disabled_cards" => &mut self.disabled_cards,
            "cards_left" => &mut self.cards_left,
            "cards_claimed" => &mut self.cards_claimed,
            "kp_limit" => &mut self.kp_limit,
            "kp_usage" => &mut self.kp_usage,
            "kp_bonus" => &mut self.kp_bonus,
            "tuto_lvl" => &mut self.tuto_lvl,
            "persrare" => &mut self.persrare,
            _ => return false,
        };
        *slot = Some(coerce_int(value));
        true
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// A copy of `base` with every present override applied
    pub fn apply(&self, base: &StatisticsRecord) -> StatisticsRecord {
        StatisticsRecord {
            rolls: self.rolls.unwrap_or(base.rolls),
            w_slots: self.w_slots.unwrap_or(base.w_slots),
            sw_slots: self.sw_slots.unwrap_or(base.sw_slots),
            w_boost: self.w_boost.unwrap_or(base.w_boost),
            sw_boost: self.sw_boost.unwrap_or(base.sw_boost),
            disabled_cards: self.disabled_cards.unwrap_or(base.disabled_cards),
            cards_left: self.cards_left.unwrap_or(base.cards_left),
            cards_claimed: self.cards_claimed.unwrap_or(base.cards_claimed),
            kp_limit: self.kp_limit.unwrap_or(base.kp_limit),
            kp_usage: self.kp_usage.unwrap_or(base.kp_usage),
            kp_bonus: self.kp_bonus.unwrap_or(base.kp_bonus),
            og_server: self.og_server.unwrap_or(base.og_server),
            tuto_lvl: self.tuto_lvl.unwrap_or(base.tuto_lvl),
            persrare: self.persrare.unwrap_or(base.persrare),
        }
    }
}
