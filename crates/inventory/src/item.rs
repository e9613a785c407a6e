use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::stock::{transition, Stock};

/// Serialized form of an item. The category is never read from input; it is
/// always re-derived from the name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub name: String,
    pub sell_in: i32,
    pub quality: i32,
}

/// A shop item: a name plus the stock attributes that age every day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ItemRecord", into = "ItemRecord")]
pub struct Item {
    name: String,
    category: Category,
    stock: Stock,
}

impl Item {
    /// Build an item. Any starting values are accepted; out-of-range quality
    /// is normalised on the first step.
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        let name = name.into();
        let category = Category::classify(&name);
        Self {
            name,
            category,
            stock: Stock::new(sell_in, quality),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn sell_in(&self) -> i32 {
        self.stock.sell_in
    }

    pub fn quality(&self) -> i32 {
        self.stock.quality
    }

    pub fn stock(&self) -> Stock {
        self.stock
    }

    /// Advance this item by one day in place. Returns the stock it had before.
    pub fn age(&mut self) -> Stock {
        let before = self.stock;
        self.stock = transition(self.category, before);
        before
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.stock.sell_in, self.stock.quality)
    }
}

impl From<ItemRecord> for Item {
    fn from(record: ItemRecord) -> Self {
        Item::new(record.name, record.sell_in, record.quality)
    }
}

impl From<Item> for ItemRecord {
    fn from(item: Item) -> Self {
        ItemRecord {
            name: item.name,
            sell_in: item.stock.sell_in,
            quality: item.stock.quality,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_is_fixed_at_construction() {
        let item = Item::new("Aged Brie", 2, 0);
        assert_eq!(item.category(), Category::Ripening);
        assert_eq!(item.name(), "Aged Brie");
        assert_eq!(item.sell_in(), 2);
        assert_eq!(item.quality(), 0);
    }

    #[test]
    fn construction_tolerates_out_of_range_quality() {
        let item = Item::new("foo", 3, -7);
        assert_eq!(item.quality(), -7);

        let item = Item::new("Sulfuras, Hand of Ragnaros", 3, 82);
        assert_eq!(item.quality(), 82);
    }

    #[test]
    fn age_mutates_in_place_and_returns_previous_stock() {
        let mut item = Item::new("foo", 10, 4);
        let before = item.age();
        assert_eq!(before, Stock::new(10, 4));
        assert_eq!(item.stock(), Stock::new(9, 3));
        assert_eq!(item.name(), "foo");
    }

    #[test]
    fn display_lists_name_sell_in_quality() {
        let item = Item::new("Elixir of the Mongoose", 5, 7);
        assert_eq!(item.to_string(), "Elixir of the Mongoose, 5, 7");
    }

    #[test]
    fn serde_uses_plain_record_shape() {
        let item = Item::new("Conjured Mana Cake", 3, 6);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "Conjured Mana Cake", "sell_in": 3, "quality": 6 })
        );

        let back: Item = serde_json::from_value(json).unwrap();
        assert_eq!(back.category(), Category::Conjured);
    }

    #[test]
    fn deserialization_rederives_category_from_name() {
        let item: Item = serde_json::from_str(
            r#"{ "name": "Sulfuras, Hand of Ragnaros", "sell_in": 0, "quality": 80, "category": "normal" }"#,
        )
        .unwrap();
        assert_eq!(item.category(), Category::Legendary);
    }
}
