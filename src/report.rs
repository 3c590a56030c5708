//! Full pipeline run and its printable report

use crate::core::config::ReportConfig;
use crate::odds::{calculate, OddsResult, Projection};
use crate::stats::{aggregate, StatisticsRecord, UpgradeSelection};
use serde::Serialize;
use std::fmt::Write;

/// Everything produced by one pipeline run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub base_stats: StatisticsRecord,
    pub upgraded_stats: StatisticsRecord,
    pub upgrades: UpgradeSelection,
    pub odds: OddsResult,
    pub projection: Projection,
}

/// Aggregate, calculate and project in one go
pub fn evaluate(
    base: &StatisticsRecord,
    upgrades: &UpgradeSelection,
    hours_per_day: u32,
) -> Evaluation {
    let upgraded_stats = aggregate(base, upgrades);
    let odds = calculate(&upgraded_stats);
    let projection = Projection::new(&odds, upgraded_stats.rolls, hours_per_day);

    tracing::debug!(
        "Evaluated {} upgrade entries: wish {:.6}, kspawn {:.6}",
        upgrades.len(),
        odds.wish_odds,
        odds.kspawn_odds
    );

    Evaluation {
        base_stats: *base,
        upgraded_stats,
        upgrades: upgrades.clone(),
        odds,
        projection,
    }
}

/// Plain text report with one labelled section per table
pub fn render_text(evaluation: &Evaluation, config: &ReportConfig) -> String {
    let mut out = String::new();

    write_stats(&mut out, "Base Stats", &evaluation.base_stats);
    write_stats(&mut out, "Upgraded Stats", &evaluation.upgraded_stats);

    if !evaluation.upgrades.is_empty() {
        let _ = writeln!(out, "\n--- Upgrades ---");
        for (name, level) in evaluation.upgrades.iter() {
            let _ = writeln!(out, "{:<15}: {}", name, level);
        }
    }

    let projection = &evaluation.projection;
    write_odds(&mut out, "Per Roll Odds", &projection.per_roll, config.odds_precision);
    write_odds(
        &mut out,
        &format!("Per Roll Set Odds ({} rolls)", projection.rolls_per_set),
        &projection.per_roll_set,
        config.projection_precision,
    );
    write_odds(
        &mut out,
        &format!("Per Day Odds ({} rolls)", projection.rolls_per_day),
        &projection.per_day,
        config.projection_precision,
    );

    out
}

// Writing to a String cannot fail.
fn write_stats(out: &mut String, title: &str, stats: &StatisticsRecord) {
    let _ = writeln!(out, "\n--- {} ---", title);
    for (name, value) in stats.entries() {
        let _ = writeln!(out, "{:<15}: {}", name, value);
    }
}

fn write_odds(out: &mut String, title: &str, odds: &OddsResult, precision: usize) {
    let _ = writeln!(out, "\n--- {} ---", title);
    for (name, value) in odds.entries() {
        let _ = writeln!(out, "{:<20}: {:.*}", name, precision, value);
    }
}
