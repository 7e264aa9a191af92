// Copyright 2026 Ladderworks Research. All rights reserved.
// Ladder Congestion Game Suite ("The Ladder") - Coalition Strategy Search

//! Exhaustive strategy search for the bottom-k coalition.
//!
//! The coalition is the `k` players with the worst private rungs (ranks
//! `n-k+1 ..= n`). Every one of the `2^k` deviate/stay combinations is
//! simulated; the winner is the lexicographic minimum on
//! `(coalition_cost, system_cost)`, and ties beyond that keep the
//! earliest-enumerated strategy.
//!
//! Enumeration walks integer masks `0 .. 2^k` in deviate-first bit order:
//! mask 0 is all-deviate, the final mask is all-stay, and the first
//! coalition member sits in the high bit. The tie-break makes this order
//! part of the contract, so it is fixed here rather than left to an
//! iterator adapter.
//!
//! Cost is `O(2^k * n)` per `(n, k)` pair. This is a study tool; keep `k`
//! small.

use crate::simulation::{LadderNetwork, SimulationError};
use crate::types::{Player, SearchOutcome, SimulationOutcome, StrategyMap};

// ─── Errors ──────────────────────────────────────────────────────────────────

/// Precondition violations for a coalition search.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("coalition size k = {k} must satisfy 2 <= k < n (n = {n})")]
    BadCoalitionSize { k: u32, n: u32 },

    #[error("coalition of size {0} is beyond exhaustive enumeration range")]
    CoalitionTooLarge(u32),

    #[error(transparent)]
    Simulation(#[from] SimulationError),
}

// Strategy counts are held in a u64; past this the sweep would never finish
// anyway.
const MAX_ENUMERABLE_K: u32 = 62;

// ─── Coalition Construction ──────────────────────────────────────────────────

/// The `k` players with the worst rungs: ranks `n-k+1 ..= n`, ascending.
pub fn bottom_coalition(n: u32, k: u32) -> Vec<Player> {
    (n - k + 1..=n).collect()
}

// ─── Search ──────────────────────────────────────────────────────────────────

/// Find the strategy minimizing the bottom-k coalition's own cost, breaking
/// ties by system cost, by trying all `2^k` combinations.
pub fn search_bottom_coalition(
    network: &LadderNetwork,
    k: u32,
) -> Result<SearchOutcome, SearchError> {
    let n = network.size();
    if k < 2 || k >= n {
        return Err(SearchError::BadCoalitionSize { k, n });
    }
    if k > MAX_ENUMERABLE_K {
        return Err(SearchError::CoalitionTooLarge(k));
    }

    let coalition = bottom_coalition(n, k);
    let width = k as usize;
    let total = 1u64 << k;

    let mut strategy = vec![false; width];
    let mut best: Option<(SimulationOutcome, Vec<bool>)> = None;

    for mask in 0..total {
        // Member j reads bit k-1-j; a cleared bit means deviate, so mask 0
        // tries the all-deviate strategy first.
        for (j, slot) in strategy.iter_mut().enumerate() {
            *slot = (mask >> (width - 1 - j)) & 1 == 0;
        }

        let outcome = network.simulate(&coalition, &strategy)?;
        let improves = match &best {
            None => true,
            Some((incumbent, _)) => {
                outcome.coalition_cost < incumbent.coalition_cost
                    || (outcome.coalition_cost == incumbent.coalition_cost
                        && outcome.system_cost < incumbent.system_cost)
            }
        };
        if improves {
            best = Some((outcome, strategy.clone()));
        }
    }

    let (outcome, winning) = best.expect("at least one strategy is enumerated");
    let strategy: StrategyMap = coalition.iter().copied().zip(winning).collect();

    Ok(SearchOutcome {
        n,
        k,
        coalition,
        system_cost: outcome.system_cost,
        coalition_cost: outcome.coalition_cost,
        routes: outcome.routes,
        strategy,
        strategies_evaluated: total,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
