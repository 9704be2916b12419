//! A single-instrument, in-memory limit order book under strict
//! price-time priority, plus a synthetic workload harness used to
//! benchmark and stress-test it.
//!
//! The core (`types`, `events`, `orderbook`, `engine`) has no I/O and no
//! async; it reports everything through the synchronous [`EventSink`]
//! interface rather than returning values or performing side effects
//! itself. `sinks`, `simulate`, and `cli` build on top of that core for
//! the demo binary.

pub mod cli;
pub mod engine;
pub mod error;
pub mod events;
pub mod orderbook;
pub mod simulate;
pub mod sinks;
pub mod types;

pub use engine::Engine;
pub use error::HarnessError;
pub use events::{EventSink, OrderAck, Trade};
pub use orderbook::OrderBook;
pub use simulate::{SimConfig, SimReport, run_simulation};
pub use sinks::{StatsSink, StdoutSink};
pub use types::{OrderId, OrderRequest, Price, Qty, Side};
