//! Synthetic workload driver for the demo/benchmark harness (§6.3):
//! drives the book with random limit orders and random cancels chosen
//! from previously submitted ids, periodically checking that the book
//! never crosses.

use crate::engine::Engine;
use crate::error::HarnessError;
use crate::sinks::StatsSink;
use crate::types::{OrderId, OrderRequest, Price, Qty, Side};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;
use tracing::{info, warn};

/// How often (in operations) to check the no-crossed-book invariant.
/// Matches the reference workload's correctness-check cadence.
const INVARIANT_CHECK_EVERY: u64 = 100_000;

#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    pub num_ops: u64,
    pub cancel_prob_pct: u8,
    pub max_price: Price,
    pub max_qty: Qty,
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_ops: 1_000_000,
            cancel_prob_pct: 10,
            max_price: 1000,
            max_qty: 100,
            seed: rand::random(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SimReport {
    pub stats: StatsSink,
    pub elapsed_secs: f64,
    pub final_best_bid: Option<Price>,
    pub final_best_ask: Option<Price>,
}

/// Runs the random workload described by `cfg` against a fresh engine.
/// Returns `Err(HarnessError::InvariantViolated)` the moment a periodic
/// check finds a crossed book; otherwise `Ok` with the final report.
pub fn run_simulation(cfg: SimConfig) -> Result<SimReport, HarnessError> {
    info!(?cfg, "starting synthetic workload");

    let mut engine = Engine::new(cfg.num_ops as usize, StatsSink::default());
    let mut rng = StdRng::seed_from_u64(cfg.seed);
    let mut known_ids: Vec<OrderId> = Vec::with_capacity(cfg.num_ops as usize);
    let mut next_id: OrderId = 1;

    let start = Instant::now();

    for i in 0..cfg.num_ops {
        let do_cancel = !known_ids.is_empty() && rng.random_range(0..100) < cfg.cancel_prob_pct as u32;

        if do_cancel {
            let idx = rng.random_range(0..known_ids.len());
            engine.cancel_order(known_ids[idx]);
        } else {
            let side = if rng.random_bool(0.5) { Side::Buy } else { Side::Sell };
            let price = rng.random_range(1..=cfg.max_price);
            let qty = rng.random_range(1..=cfg.max_qty);

            engine.submit_limit_order(OrderRequest { id: next_id, side, price, qty });
            known_ids.push(next_id);
            next_id += 1;
        }

        if i != 0 && i % INVARIANT_CHECK_EVERY == 0 {
            let (bb, ba) = (engine.best_bid(), engine.best_ask());
            if let (Some(bid), Some(ask)) = (bb, ba) {
                if bid >= ask {
                    warn!(op = i, bid, ask, "invariant violated");
                    return Err(HarnessError::InvariantViolated {
                        at_op: i,
                        best_bid: bb,
                        best_ask: ba,
                    });
                }
            }
        }
    }

    let elapsed_secs = start.elapsed().as_secs_f64();
    let report = SimReport {
        stats: *engine.sink(),
        elapsed_secs,
        final_best_bid: engine.best_bid(),
        final_best_ask: engine.best_ask(),
    };
    info!(?report, "synthetic workload complete");
    Ok(report)
}
