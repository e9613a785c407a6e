//! Inventory aging rules.
//!
//! Items carry a name, days left to sell (`sell_in`) and a `quality` score.
//! Once per simulated day every item's stock is advanced according to the
//! category its name places it in. Pure domain logic: no IO, no storage.

pub mod category;
pub mod engine;
pub mod fixture;
pub mod item;
pub mod stock;

pub use category::Category;
pub use engine::{advance, UpdateEngine};
pub use fixture::{load_items, standard_inventory};
pub use item::{Item, ItemRecord};
pub use stock::{
    check_stock, quality_bounds, transition, Stock, LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY,
};
