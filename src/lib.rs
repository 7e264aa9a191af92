// Copyright 2026 Ladderworks Research. All rights reserved.
// Ladder Congestion Game Suite ("The Ladder")

//! Congestion-game analysis on a ladder network.
//!
//! `n` players each own a private rung with a fixed latency; a shared top
//! rung is reachable over congested left/right rails. The crate computes,
//! for every bottom-k coalition, the joint deviate/stay strategy minimizing
//! the coalition's own cost (ties broken by total system cost), with all
//! non-members best-responding greedily.
//!
//! The `sweep` binary drives the search over a range of network sizes and
//! renders the results.

pub mod rungs;
pub mod search;
pub mod simulation;
pub mod types;

pub use rungs::rung_latencies;
pub use search::{bottom_coalition, search_bottom_coalition, SearchError};
pub use simulation::{LadderNetwork, SimulationError};
pub use types::*;
