// Copyright 2026 Ladderworks Research. All rights reserved.
// Ladder Congestion Game Suite ("The Ladder") - Type Definitions

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ─── Domain Aliases ──────────────────────────────────────────────────────────

/// Player rank, 1-based. Rank `i` owns private rung `i`; rung 1 doubles as
/// the shared top route everybody may deviate to.
pub type Player = u32;

/// Latency cost. All costs in this model are exact non-negative integers.
pub type Cost = u64;

/// Final route assignment: player -> entry rung (own rank, or 1 = top rung).
/// Ordered so serialized output is byte-deterministic.
pub type RouteMap = BTreeMap<Player, Player>;

/// Per-player settled cost.
pub type CostMap = BTreeMap<Player, Cost>;

/// Coalition member -> deviate decision (`true` = take the top rung).
pub type StrategyMap = BTreeMap<Player, bool>;

// ─── SimulationOutcome ───────────────────────────────────────────────────────

/// Full cost breakdown of one simulated scenario: a fixed coalition strategy
/// plus the greedy best-response of everyone else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    /// Sum of all `n` individual costs.
    pub system_cost: Cost,
    /// Sub-sum over the coalition members only.
    pub coalition_cost: Cost,
    pub routes: RouteMap,
    pub individual_costs: CostMap,
}

// ─── SearchOutcome ───────────────────────────────────────────────────────────

/// Winner of the exhaustive strategy search for one `(n, k)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub n: u32,
    pub k: u32,
    /// Bottom-k coalition, ascending rank order.
    pub coalition: Vec<Player>,
    pub system_cost: Cost,
    pub coalition_cost: Cost,
    pub routes: RouteMap,
    /// Winning deviate/stay choice per coalition member.
    pub strategy: StrategyMap,
    /// Strategies enumerated (`2^k`).
    pub strategies_evaluated: u64,
}
