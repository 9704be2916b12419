//! Domain types shared across the book, matching loop, and event sink.

/// Identifier for an order, unique across the lifetime of a book.
pub type OrderId = u64;

/// Integer tick count. All prices are signed so that the harness can
/// reason about them without a separate unsigned/signed split.
pub type Price = i64;

/// Order quantity, always kept strictly positive while an order is live.
pub type Qty = i64;

/// Monotonic counter used to break ties within a price level.
pub type ArrivalSeq = u64;

/// Which side of the book an order or level belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// The side an incoming order matches against.
    pub fn opposite(self) -> Side {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

/// A limit, good-till-cancel order submission.
#[derive(Debug, Clone, Copy)]
pub struct OrderRequest {
    pub id: OrderId,
    pub side: Side,
    pub price: Price,
    pub qty: Qty,
}

/// An order resting inside a [`PriceLevel`](crate::orderbook::level::PriceLevel) FIFO.
#[derive(Debug, Clone, Copy)]
pub struct RestingOrder {
    pub id: OrderId,
    pub side: Side,
    pub price: Price,
    pub remaining_qty: Qty,
    pub arrival_seq: ArrivalSeq,
}

/// The minimal information needed to find a resting order's level; the
/// order itself is then found by id within that level's FIFO.
#[derive(Debug, Clone, Copy)]
pub struct Locator {
    pub side: Side,
    pub price: Price,
}
