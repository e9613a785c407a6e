//! Single-step aging over a collection of items.

use crate::item::Item;
use crate::stock::check_stock;

/// Advance every item by exactly one day, in order.
///
/// Items never interact, so the order only affects log output.
pub fn advance(items: &mut [Item]) {
    for item in items.iter_mut() {
        let before = item.age();
        let after = item.stock();

        tracing::debug!(
            name = item.name(),
            category = %item.category(),
            sell_in_before = before.sell_in,
            quality_before = before.quality,
            sell_in = after.sell_in,
            quality = after.quality,
            "item aged"
        );

        if let Err(err) = check_stock(item.category(), after, before.sell_in) {
            tracing::error!(name = item.name(), error = %err, "item left in invalid state");
        }
    }
}

/// Owns an ordered inventory and advances it one day at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateEngine {
    items: Vec<Item>,
    day: u32,
}

impl UpdateEngine {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items, day: 0 }
    }

    /// Advance every item by one day.
    pub fn advance(&mut self) {
        advance(&mut self.items);
        self.day = self.day.saturating_add(1);
        tracing::debug!(day = self.day, items = self.items.len(), "day advanced");
    }

    /// Call [`UpdateEngine::advance`] `days` times.
    pub fn advance_days(&mut self, days: u32) {
        for _ in 0..days {
            self.advance();
        }
    }

    /// Number of days advanced since construction.
    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [Item] {
        &mut self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<Vec<Item>> for UpdateEngine {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}
