//! Per-category one-day transition of `sell_in` and `quality`.
//!
//! Everything here is pure: a `Stock` goes in, the next day's `Stock` comes
//! out. "On or before the sell date" is judged on the days remaining *before*
//! the step's decrement, so an item with `sell_in == 0` is still on its sell
//! date for that step.

use core::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use gildedrose_core::{DomainError, DomainResult, ValueObject};

use crate::category::Category;

pub const MIN_QUALITY: i32 = 0;
pub const MAX_QUALITY: i32 = 50;
pub const LEGENDARY_QUALITY: i32 = 80;

/// Backstage passes gain +2 at this many days remaining or fewer.
const BACKSTAGE_TEN_DAYS: i32 = 10;
/// Backstage passes gain +3 at this many days remaining or fewer.
const BACKSTAGE_FIVE_DAYS: i32 = 5;

/// The two mutable attributes of an item, as a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stock {
    pub sell_in: i32,
    pub quality: i32,
}

impl ValueObject for Stock {}

impl Stock {
    pub fn new(sell_in: i32, quality: i32) -> Self {
        Self { sell_in, quality }
    }

    /// Whether the sell date has already passed before this step.
    fn expired(&self) -> bool {
        self.sell_in < 0
    }
}

/// Allowed quality range after a step.
pub fn quality_bounds(category: Category) -> RangeInclusive<i32> {
    match category {
        Category::Legendary => LEGENDARY_QUALITY..=LEGENDARY_QUALITY,
        _ => MIN_QUALITY..=MAX_QUALITY,
    }
}

/// Advance a stock by one simulated day.
pub fn transition(category: Category, stock: Stock) -> Stock {
    let quality = match category {
        Category::Legendary => return Stock::new(stock.sell_in, LEGENDARY_QUALITY),
        Category::Normal => degrade(stock, 1),
        Category::Conjured if stock.quality < MIN_QUALITY => MIN_QUALITY,
        Category::Conjured => degrade(stock, 2),
        Category::Ripening => ripen(stock),
        Category::Backstage => backstage(stock),
    };

    Stock::new(
        stock.sell_in.saturating_sub(1),
        quality.clamp(MIN_QUALITY, MAX_QUALITY),
    )
}

/// Lose `rate` per day, doubled once the sell date has passed.
fn degrade(stock: Stock, rate: i32) -> i32 {
    let loss = if stock.expired() { rate * 2 } else { rate };
    stock.quality.saturating_sub(loss)
}

fn ripen(stock: Stock) -> i32 {
    if stock.quality < MIN_QUALITY {
        return MIN_QUALITY;
    }
    let gain = if stock.expired() { 2 } else { 1 };
    stock.quality.saturating_add(gain)
}

fn backstage(stock: Stock) -> i32 {
    let days = stock.sell_in;
    if days < 0 {
        // Concert is over.
        return MIN_QUALITY;
    }
    let gain = if days <= BACKSTAGE_FIVE_DAYS {
        3
    } else if days <= BACKSTAGE_TEN_DAYS {
        2
    } else {
        1
    };
    stock.quality.saturating_add(gain)
}

/// Verify a post-step stock against the category invariants.
///
/// `previous_sell_in` is the value before the step; legendary items must
/// still carry it.
pub fn check_stock(category: Category, stock: Stock, previous_sell_in: i32) -> DomainResult<()> {
    let bounds = quality_bounds(category);
    if !bounds.contains(&stock.quality) {
        return Err(DomainError::invariant(format!(
            "{category} quality {} outside {}..={}",
            stock.quality,
            bounds.start(),
            bounds.end()
        )));
    }
    if category.is_legendary() && stock.sell_in != previous_sell_in {
        return Err(DomainError::invariant(format!(
            "legendary sell_in moved from {previous_sell_in} to {}",
            stock.sell_in
        )));
    }
    Ok(())
}
