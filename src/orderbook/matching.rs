//! The match loop: walks the opposite side's price levels, best price
//! first, consuming resting orders FIFO within each level.

use crate::events::{EventSink, Trade};
use crate::orderbook::level::PriceLevel;
use crate::types::{OrderId, Price, Qty, Side};
use std::collections::BTreeMap;

/// Crossing rule: does `level_price` cross against an aggressor on `side`
/// limited at `aggressor_price`?
fn crosses(side: Side, aggressor_price: Price, level_price: Price) -> bool {
    match side {
        Side::Buy => level_price <= aggressor_price,
        Side::Sell => level_price >= aggressor_price,
    }
}

/// Runs the match loop for an aggressor of `side` against `opposite`,
/// consuming from `remaining` and emitting trades via `sink`. Returns the
/// set of price levels left empty by this call so the caller can drop
/// them from the side-index (and from the id_index for fully-filled
/// resting orders, reported via `filled_ids`).
pub(crate) fn run<S: EventSink>(
    sink: &mut S,
    aggressor_id: OrderId,
    side: Side,
    aggressor_price: Price,
    remaining: &mut Qty,
    opposite: &mut BTreeMap<Price, PriceLevel>,
    filled_ids: &mut Vec<OrderId>,
) {
    loop {
        if *remaining <= 0 {
            break;
        }

        // Best opposite-side level: lowest ask for a buy aggressor, highest
        // bid for a sell aggressor. Levels are stored ascending by price;
        // a buy aggressor wants the front, a sell aggressor wants the back.
        let best_price = match side {
            Side::Buy => opposite.keys().next().copied(),
            Side::Sell => opposite.keys().next_back().copied(),
        };
        let Some(best_price) = best_price else {
            break;
        };
        if !crosses(side, aggressor_price, best_price) {
            break;
        }

        let level = opposite.get_mut(&best_price).expect("key just read");
        drain_level(sink, aggressor_id, remaining, level, filled_ids);

        if level.is_empty() {
            opposite.remove(&best_price);
        }
    }
}

/// Consumes as much of `remaining` as the level can supply, FIFO.
fn drain_level<S: EventSink>(
    sink: &mut S,
    aggressor_id: OrderId,
    remaining: &mut Qty,
    level: &mut PriceLevel,
    filled_ids: &mut Vec<OrderId>,
) {
    while *remaining > 0 {
        let Some(front) = level.front() else {
            break;
        };
        let (resting_id, resting_price, resting_qty) = (front.id, front.price, front.remaining_qty);
        let fill = (*remaining).min(resting_qty);

        sink.on_trade(Trade {
            resting_id,
            taking_id: aggressor_id,
            price: resting_price,
            qty: fill,
        });

        let (_, remaining_after) = level.fill_front(fill).expect("front just read");
        *remaining -= fill;

        if remaining_after == 0 {
            filled_ids.push(resting_id);
        } else {
            break;
        }
    }
}
