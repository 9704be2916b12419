//! Concrete [`EventSink`] implementations: a printing sink for the
//! interactive demo, and a statistics-collecting sink for the synthetic
//! workload driver.

use crate::events::{EventSink, OrderAck, Trade};
use crate::types::OrderId;

/// Prints every event to stdout, one line each. Useful for the
/// interactive demo CLI; not meant for high-throughput workloads.
#[derive(Default)]
pub struct StdoutSink;

impl EventSink for StdoutSink {
    fn on_trade(&mut self, trade: Trade) {
        println!(
            "TRADE: resting={} taking={} px={} qty={}",
            trade.resting_id, trade.taking_id, trade.price, trade.qty
        );
    }

    fn on_order_accepted(&mut self, ack: OrderAck) {
        println!("ORDER ACCEPTED: id={}", ack.id);
    }

    fn on_order_rejected(&mut self, ack: OrderAck) {
        println!("ORDER REJECTED: id={} reason={}", ack.id, ack.reason);
    }

    fn on_order_cancelled(&mut self, id: OrderId, success: bool) {
        println!("ORDER CANCEL {}: id={}", if success { "OK" } else { "FAIL" }, id);
    }
}

/// Collects counts instead of printing, the way a high-volume benchmark
/// or synthetic workload driver wants to observe the engine without
/// paying for per-event I/O.
#[derive(Debug, Default, Clone, Copy)]
pub struct StatsSink {
    pub trades: u64,
    pub traded_qty: u64,
    pub accepted: u64,
    pub rejected: u64,
    pub cancels_ok: u64,
    pub cancels_fail: u64,
}

impl EventSink for StatsSink {
    fn on_trade(&mut self, trade: Trade) {
        self.trades += 1;
        self.traded_qty += trade.qty as u64;
    }

    fn on_order_accepted(&mut self, _ack: OrderAck) {
        self.accepted += 1;
    }

    fn on_order_rejected(&mut self, _ack: OrderAck) {
        self.rejected += 1;
    }

    fn on_order_cancelled(&mut self, _id: OrderId, success: bool) {
        if success {
            self.cancels_ok += 1;
        } else {
            self.cancels_fail += 1;
        }
    }
}
