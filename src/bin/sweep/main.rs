// Copyright 2026 Ladderworks Research. All rights reserved.
// Ladder Congestion Game Suite ("The Ladder") - Sweep Runner
//
// Runs the bottom-k coalition search for every network size in a range and
// every coalition size k in 2..n, then renders a summary table, per-network
// route detail, and (optionally) a JSON report.
//
// Usage:
//   cargo run --release --bin sweep                      # n = 4..=7
//   cargo run --release --bin sweep -- --n-min 4 --n-max 9
//   cargo run --release --bin sweep -- --json            # also write JSON
//   cargo run --release --bin sweep -- --json --out results.json

mod report;

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use ladder_engine::{search_bottom_coalition, LadderNetwork};
use report::*;

// ─── CLI Parsing ────────────────────────────────────────────────────────────

struct CliArgs {
    n_min: u32,
    n_max: u32,
    json: bool,
    out: Option<String>,
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut cli = CliArgs {
        n_min: 4,
        n_max: 7,
        json: false,
        out: None,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--n-min" => {
                i += 1;
                if i < args.len() {
                    cli.n_min = args[i].parse().unwrap_or(4);
                }
            }
            "--n-max" => {
                i += 1;
                if i < args.len() {
                    cli.n_max = args[i].parse().unwrap_or(7);
                }
            }
            "--json" => {
                cli.json = true;
            }
            "--out" => {
                i += 1;
                if i < args.len() {
                    cli.out = Some(args[i].clone());
                    cli.json = true;
                }
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
            }
        }
        i += 1;
    }

    cli
}

// ─── Main ───────────────────────────────────────────────────────────────────

fn main() {
    let cli = parse_args();

    if cli.n_min < 2 || cli.n_min > cli.n_max {
        eprintln!(
            "Invalid range: need 2 <= n-min <= n-max (got {}..={})",
            cli.n_min, cli.n_max
        );
        std::process::exit(1);
    }

    println!("\n  Ladder Coalition Sweep");
    println!(
        "  Networks: n = {}..={} | coalitions: bottom-k, k = 2..n\n",
        cli.n_min, cli.n_max
    );
    print_summary_header();

    let suite_start = Instant::now();
    let mut records = Vec::new();
    let mut failures = 0usize;

    for n in cli.n_min..=cli.n_max {
        let network = match LadderNetwork::new(n) {
            Ok(network) => network,
            Err(err) => {
                eprintln!("  n = {n}: {err}");
                failures += 1;
                continue;
            }
        };

        for k in 2..n {
            let pair_start = Instant::now();
            match search_bottom_coalition(&network, k) {
                Ok(outcome) => {
                    let record = SweepRecord {
                        outcome,
                        elapsed_ms: pair_start.elapsed().as_millis(),
                    };
                    print_summary_row(&record);
                    records.push(record);
                }
                // A bad pair halts that pair only; the sweep goes on.
                Err(err) => {
                    eprintln!("  n = {n}, k = {k}: {err}");
                    failures += 1;
                }
            }
        }
    }

    let suite_elapsed = suite_start.elapsed();

    // ─── Per-Network Detail ─────────────────────────────────────────────

    for n in cli.n_min..=cli.n_max {
        let for_n: Vec<&SweepRecord> = records.iter().filter(|r| r.n() == n).collect();
        if for_n.is_empty() {
            continue;
        }
        print_network_detail(n, &ladder_engine::rung_latencies(n), &for_n);
    }

    // ─── Summary ────────────────────────────────────────────────────────

    let total_simulations: u64 = records.iter().map(|r| r.outcome.strategies_evaluated).sum();
    println!("\n  {}", "-".repeat(82));
    println!(
        "  Pairs: {}  Simulations: {}  Failures: {}  Suite time: {:.2}s\n",
        records.len(),
        total_simulations,
        failures,
        suite_elapsed.as_secs_f64()
    );

    // ─── Write JSON Report ──────────────────────────────────────────────

    if cli.json {
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        let report = SweepReport {
            timestamp: format!("{ts}"),
            version: env!("CARGO_PKG_VERSION"),
            n_min: cli.n_min,
            n_max: cli.n_max,
            summary: Summary {
                pairs: records.len(),
                total_simulations,
                suite_elapsed_ms: suite_elapsed.as_millis(),
            },
            records,
        };

        let path = match &cli.out {
            Some(path) => std::path::PathBuf::from(path),
            None => {
                let dir = std::path::Path::new("sweep-results");
                if !dir.exists() {
                    std::fs::create_dir_all(dir).expect("Failed to create sweep-results/");
                }
                dir.join(format!("sweep-{}.json", report.timestamp))
            }
        };
        let json = serde_json::to_string_pretty(&report).expect("Failed to serialize");
        std::fs::write(&path, &json).expect("Failed to write sweep report");
        println!("  Results saved to: {}\n", path.display());
    }

    if failures > 0 {
        std::process::exit(1);
    }
}
