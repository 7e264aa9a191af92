// Copyright 2026 Ladderworks Research. All rights reserved.
// Ladder Congestion Game Suite ("The Ladder") - Network Simulator

//! One-shot simulation of a ladder network under a fixed coalition strategy.
//!
//! The ladder has `n` private rungs (rung `i` belongs to player `i`) and a
//! shared top rung reachable by walking the left and right rails. A player of
//! rank `p` who deviates to the top rung traverses rail segments `1..=p-1`
//! on both sides, and pays per segment proportionally to how many players
//! share it.
//!
//! A simulation runs in three phases:
//!
//! 1. Coalition members commit first, in coalition order. Deviators occupy
//!    their rail segments; stayers take their own rung.
//! 2. Remaining players best-respond greedily, in ascending rank order, each
//!    seeing the congestion left behind by everyone processed before them.
//!    This is a sequential single pass, not an iterated equilibrium search;
//!    the ordering is part of the model.
//! 3. Costs are tallied from the final settled congestion state. Phase 2
//!    prices a deviation marginally (`count + 1` per segment) while the
//!    tally charges the settled counts; the asymmetry is deliberate and the
//!    published numbers depend on it.
//!
//! Rail counters live and die inside a single [`LadderNetwork::simulate`]
//! call, so enumerated strategies can never leak congestion into each other.

use serde::{Deserialize, Serialize};

use crate::rungs::rung_latencies;
use crate::types::{Cost, CostMap, Player, RouteMap, SimulationOutcome};

// ─── Errors ──────────────────────────────────────────────────────────────────

/// Precondition violations for a simulation run.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error("ladder needs at least one player")]
    EmptyNetwork,

    #[error("strategy has {strategy} entries for a coalition of {coalition}")]
    StrategyMismatch { coalition: usize, strategy: usize },

    #[error("player {0} is outside the {1}-player ladder")]
    PlayerOutOfRange(Player, u32),
}

// ─── Rail Congestion ─────────────────────────────────────────────────────────

/// Left/right rail occupancy, one counter per segment `1..=n-1`.
/// Local to a single simulation run; index 0 is unused padding.
#[derive(Debug)]
struct RailState {
    left: Vec<u64>,
    right: Vec<u64>,
}

impl RailState {
    fn new(n: u32) -> Self {
        Self {
            left: vec![0; n as usize],
            right: vec![0; n as usize],
        }
    }

    /// Commit a rank-`p` deviator: one more occupant on every segment
    /// between the top rung and rung `p`, both rails.
    fn occupy(&mut self, p: Player) {
        for seg in 1..p as usize {
            self.left[seg] += 1;
            self.right[seg] += 1;
        }
    }

    /// Marginal price of deviating for rank `p`, counting the player's own
    /// addition to every traversed segment, plus the top rung's base latency.
    fn marginal_top_cost(&self, p: Player, top_latency: Cost) -> Cost {
        let mut cost = top_latency;
        for seg in 1..p as usize {
            cost += (self.left[seg] + 1) + (self.right[seg] + 1);
        }
        cost
    }

    /// Settled rail cost over segments `entry..p`, both sides, from the
    /// final counters.
    fn settled_span(&self, entry: Player, p: Player) -> Cost {
        let mut cost = 0;
        for seg in entry as usize..p as usize {
            cost += self.left[seg] + self.right[seg];
        }
        cost
    }
}

// ─── LadderNetwork ───────────────────────────────────────────────────────────

/// An `n`-player ladder with its immutable rung latencies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LadderNetwork {
    n: u32,
    rungs: Vec<Cost>,
}

impl LadderNetwork {
    pub fn new(n: u32) -> Result<Self, SimulationError> {
        if n == 0 {
            return Err(SimulationError::EmptyNetwork);
        }
        Ok(Self {
            n,
            rungs: rung_latencies(n),
        })
    }

    pub fn size(&self) -> u32 {
        self.n
    }

    /// Rung latencies, `rungs[i]` = private cost of player `i + 1`.
    pub fn rungs(&self) -> &[Cost] {
        &self.rungs
    }

    /// Run one scenario: the coalition (ascending ranks) plays `strategy`
    /// (`true` = deviate, aligned entry-for-entry), everyone else
    /// best-responds. Pure: identical inputs give identical outcomes.
    pub fn simulate(
        &self,
        coalition: &[Player],
        strategy: &[bool],
    ) -> Result<SimulationOutcome, SimulationError> {
        if strategy.len() != coalition.len() {
            return Err(SimulationError::StrategyMismatch {
                coalition: coalition.len(),
                strategy: strategy.len(),
            });
        }
        let mut member = vec![false; self.n as usize + 1];
        for &p in coalition {
            if p < 1 || p > self.n {
                return Err(SimulationError::PlayerOutOfRange(p, self.n));
            }
            member[p as usize] = true;
        }

        let mut rails = RailState::new(self.n);
        let mut routes = RouteMap::new();

        // Phase 1: coalition members commit first, in coalition order.
        for (&p, &deviate) in coalition.iter().zip(strategy) {
            if deviate {
                routes.insert(p, 1);
                rails.occupy(p);
            } else {
                routes.insert(p, p);
            }
        }

        // Phase 2: sequential greedy best-response, ascending rank order.
        // Strict inequality: a tie keeps the player on its own rung.
        for p in 1..=self.n {
            if member[p as usize] {
                continue;
            }
            let original_cost = self.rungs[p as usize - 1];
            let deviation_cost = rails.marginal_top_cost(p, self.rungs[0]);
            if deviation_cost < original_cost {
                routes.insert(p, 1);
                rails.occupy(p);
            } else {
                routes.insert(p, p);
            }
        }

        // Phase 3: tally from the settled congestion state.
        let mut individual_costs = CostMap::new();
        for p in 1..=self.n {
            let entry = routes[&p];
            let cost = if entry == p {
                self.rungs[p as usize - 1]
            } else {
                rails.settled_span(entry, p) + self.rungs[entry as usize - 1]
            };
            individual_costs.insert(p, cost);
        }

        let system_cost = individual_costs.values().sum();
        let coalition_cost = coalition.iter().map(|p| individual_costs[p]).sum();

        Ok(SimulationOutcome {
            system_cost,
            coalition_cost,
            routes,
            individual_costs,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn network(n: u32) -> LadderNetwork {
        LadderNetwork::new(n).expect("test: valid network size")
    }

    #[test]
    fn zero_player_network_is_rejected() {
        assert!(matches!(
            LadderNetwork::new(0),
            Err(SimulationError::EmptyNetwork)
        ));
    }

    #[test]
    fn strategy_length_must_match_coalition() {
        let net = network(4);
        let result = net.simulate(&[3, 4], &[true]);
        assert!(matches!(
            result,
            Err(SimulationError::StrategyMismatch {
                coalition: 2,
                strategy: 1
            })
        ));
    }

    #[test]
    fn coalition_member_outside_ladder_is_rejected() {
        let net = network(4);
        let result = net.simulate(&[5], &[true]);
        assert!(matches!(result, Err(SimulationError::PlayerOutOfRange(5, 4))));
    }

    #[test]
    fn pure_selfish_cascade_n4() {
        // rungs [1, 8, 13, 16]: player 2 deviates (3 < 8), then 3 (7 < 13),
        // then 4 (13 < 16). Settled costs: 1, 7, 11, 13.
        let net = network(4);
        let outcome = net.simulate(&[], &[]).expect("test: valid run");
        for p in 1..=4 {
            assert_eq!(outcome.routes[&p], 1, "player {p} should sit on the top rung");
        }
        assert_eq!(outcome.individual_costs[&1], 1);
        assert_eq!(outcome.individual_costs[&2], 7);
        assert_eq!(outcome.individual_costs[&3], 11);
        assert_eq!(outcome.individual_costs[&4], 13);
        assert_eq!(outcome.system_cost, 32);
        assert_eq!(outcome.coalition_cost, 0, "empty coalition pays nothing");
    }

    #[test]
    fn player_one_never_deviates_off_its_own_rung() {
        // Rank 1 traverses no segments, so its deviation price equals its
        // own rung latency, and ties stay.
        for n in 1..=8 {
            let net = network(n);
            let outcome = net.simulate(&[], &[]).expect("test: valid run");
            assert_eq!(outcome.routes[&1], 1);
            assert_eq!(outcome.individual_costs[&1], 1);
        }
    }

    #[test]
    fn all_stay_coalition_keeps_rung_costs() {
        let net = network(6);
        let coalition = [4, 5, 6];
        let outcome = net
            .simulate(&coalition, &[false, false, false])
            .expect("test: valid run");
        for &p in &coalition {
            assert_eq!(outcome.routes[&p], p, "stayer must sit on its own rung");
            assert_eq!(
                outcome.individual_costs[&p],
                net.rungs()[p as usize - 1],
                "stayer pays exactly its rung latency"
            );
        }
        let sub: Cost = coalition.iter().map(|p| outcome.individual_costs[p]).sum();
        assert_eq!(outcome.coalition_cost, sub);
    }

    #[test]
    fn all_false_strategy_is_order_independent() {
        // A non-deviating coalition never touches the rails, so member
        // processing order cannot matter.
        let net = network(7);
        let ascending = net
            .simulate(&[5, 6, 7], &[false, false, false])
            .expect("test: valid run");
        let shuffled = net
            .simulate(&[7, 5, 6], &[false, false, false])
            .expect("test: valid run");
        assert_eq!(ascending.routes, shuffled.routes);
        assert_eq!(ascending.individual_costs, shuffled.individual_costs);
        assert_eq!(ascending.system_cost, shuffled.system_cost);
    }

    #[test]
    fn system_cost_is_the_sum_of_individuals() {
        let net = network(6);
        let outcome = net
            .simulate(&[5, 6], &[true, false])
            .expect("test: valid run");
        let sum: Cost = outcome.individual_costs.values().sum();
        assert_eq!(outcome.system_cost, sum);
        assert_eq!(outcome.individual_costs.len(), 6);
    }

    #[test]
    fn deviating_coalition_congests_later_responders() {
        // n = 4, coalition [3, 4] both deviating: player 2 still finds the
        // top rung cheaper (marginal 7 < 8) and follows them up.
        let net = network(4);
        let outcome = net
            .simulate(&[3, 4], &[true, true])
            .expect("test: valid run");
        assert_eq!(outcome.routes[&2], 1);
        assert_eq!(outcome.system_cost, 32);
        assert_eq!(outcome.coalition_cost, 24);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let net = network(8);
        let coalition = [6, 7, 8];
        let strategy = [true, false, true];
        let first = net
            .simulate(&coalition, &strategy)
            .expect("test: valid run");
        for _ in 0..10 {
            let again = net
                .simulate(&coalition, &strategy)
                .expect("test: valid run");
            assert_eq!(first, again, "simulate must be pure");
        }
    }
}
