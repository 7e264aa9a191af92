// Copyright 2026 Ladderworks Research. All rights reserved.
// Ladder Congestion Game Suite ("The Ladder") - Rung Latency Generation

//! Private-rung latencies for an `n`-player ladder.
//!
//! The ladder assigns each player one private route whose latency follows a
//! closed-form recurrence:
//!
//! ```text
//! r[0] = 1
//! r[i] = r[i-1] + 2*(n - i) + 1
//! ```
//!
//! The increment shrinks as `i` grows: rungs closer to the top of the ladder
//! differ less from their neighbors. The sequence is strictly increasing,
//! so the bottom-k players (highest ranks) always hold the worst rungs.

use crate::types::Cost;

/// Rung latencies for a ladder of `n` players, strictly increasing,
/// starting at 1. `n = 0` yields an empty sequence.
pub fn rung_latencies(n: u32) -> Vec<Cost> {
    if n == 0 {
        return Vec::new();
    }
    let n = n as u64;
    let mut rungs = Vec::with_capacity(n as usize);
    rungs.push(1);
    for i in 1..n {
        let prev = *rungs.last().expect("rungs is non-empty");
        rungs.push(prev + 2 * (n - i) + 1);
    }
    rungs
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
