// Copyright 2026 Ladderworks Research. All rights reserved.
// Ladder Congestion Game Suite ("The Ladder") - Sweep Report Types

//! Structured sweep output: one record per analyzed `(n, k)` pair, plus a
//! top-level report for JSON export and console rendering.

use serde::Serialize;

use ladder_engine::{Cost, SearchOutcome};

// ─── Per-Pair Record ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct SweepRecord {
    pub outcome: SearchOutcome,
    pub elapsed_ms: u128,
}

impl SweepRecord {
    pub fn n(&self) -> u32 {
        self.outcome.n
    }

    pub fn k(&self) -> u32 {
        self.outcome.k
    }

    /// Coalition members who take the top rung under the winning strategy.
    pub fn deviator_count(&self) -> usize {
        self.outcome.strategy.values().filter(|&&d| d).count()
    }
}

// ─── Top-Level Report ───────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SweepReport {
    pub timestamp: String,
    pub version: &'static str,
    pub n_min: u32,
    pub n_max: u32,
    pub summary: Summary,
    pub records: Vec<SweepRecord>,
}

#[derive(Debug, Serialize)]
pub struct Summary {
    /// `(n, k)` pairs analyzed.
    pub pairs: usize,
    /// Simulations run across all enumerations.
    pub total_simulations: u64,
    pub suite_elapsed_ms: u128,
}

// ─── Console Rendering ──────────────────────────────────────────────────────

pub fn print_summary_header() {
    println!(
        "  {:<4} {:<4} {:<14} {:>14} {:>12} {:>10} {:>8} {:>8}",
        "n", "k", "coalition", "coalition cost", "system cost", "deviators", "sims", "time"
    );
    println!("  {}", "-".repeat(82));
}

pub fn print_summary_row(record: &SweepRecord) {
    println!(
        "  {:<4} {:<4} {:<14} {:>14} {:>12} {:>10} {:>8} {:>6}ms",
        record.n(),
        record.k(),
        span_label(&record.outcome.coalition),
        record.outcome.coalition_cost,
        record.outcome.system_cost,
        record.deviator_count(),
        record.outcome.strategies_evaluated,
        record.elapsed_ms,
    );
}

/// Per-`n` detail block: rung latencies and every record's route decisions,
/// in the shape the study output has always used.
pub fn print_network_detail(n: u32, rungs: &[Cost], records: &[&SweepRecord]) {
    println!("\n=== n = {n} ===");
    println!("Rung latencies: {rungs:?}");
    for record in records {
        println!(
            "\nBottom-{} Coalition: Players {:?}",
            record.k(),
            record.outcome.coalition
        );
        println!("System Cost: {}", record.outcome.system_cost);
        println!("Coalition Cost: {}", record.outcome.coalition_cost);
        println!("Strategy:");
        for (player, deviates) in &record.outcome.strategy {
            println!(
                "  Player {player}: {}",
                if *deviates { "deviate" } else { "stay" }
            );
        }
        println!("Route Decisions:");
        for (player, rung) in &record.outcome.routes {
            println!("  Player {player}: {rung}");
        }
    }
}

/// Compact `first-last` label for the contiguous bottom-k coalition.
fn span_label(coalition: &[u32]) -> String {
    match (coalition.first(), coalition.last()) {
        (Some(first), Some(last)) if first != last => format!("{first}-{last}"),
        (Some(first), _) => format!("{first}"),
        _ => String::from("-"),
    }
}
