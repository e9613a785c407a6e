//! Ready-made inventories.

use gildedrose_core::{DomainError, DomainResult};

use crate::item::Item;

/// The shop's standard stock list.
pub fn standard_inventory() -> Vec<Item> {
    vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new("Aged Brie", 2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new("Sulfuras, Hand of Ragnaros", 0, 80),
        Item::new("Sulfuras, Hand of Ragnaros", -1, 80),
        Item::new("BackStage Passes to a TAFKAL80ETC concert", 15, 20),
        Item::new("BackStage Passes to a TAFKAL80ETC concert", 10, 49),
        Item::new("BackStage Passes to a TAFKAL80ETC concert", 5, 49),
        Item::new("Conjured Mana Cake", 3, 6),
    ]
}

/// Parse a JSON array of `{ "name", "sell_in", "quality" }` records.
pub fn load_items(json: &str) -> DomainResult<Vec<Item>> {
    serde_json::from_str(json)
        .map_err(|e| DomainError::validation(format!("invalid item list: {e}")))
}
