//! Secondary id → location index. Non-owning: every entry must point at
//! an order that genuinely lives in the corresponding side's FIFO.

use crate::types::{Locator, OrderId, Price, Side};
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct IdIndex {
    locators: HashMap<OrderId, Locator>,
}

impl IdIndex {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            locators: HashMap::with_capacity(capacity),
        }
    }

    pub fn insert(&mut self, id: OrderId, side: Side, price: Price) {
        self.locators.insert(id, Locator { side, price });
    }

    pub fn get(&self, id: OrderId) -> Option<Locator> {
        self.locators.get(&id).copied()
    }

    pub fn contains(&self, id: OrderId) -> bool {
        self.locators.contains_key(&id)
    }

    pub fn remove(&mut self, id: OrderId) -> Option<Locator> {
        self.locators.remove(&id)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.locators.len()
    }
}
