//! Item categories and the name-based classifier.

use serde::{Deserialize, Serialize};

use crate::stock::{LEGENDARY_QUALITY, MAX_QUALITY};

/// Name patterns checked in priority order. The first match wins.
const PATTERNS: [(&str, Category); 4] = [
    ("Aged Brie", Category::Ripening),
    ("BackStage Passes", Category::Backstage),
    ("Conjured", Category::Conjured),
    ("Sulfuras", Category::Legendary),
];

/// Aging behaviour of an item, fixed for the item's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Loses quality every day, twice as fast past the sell date.
    Normal,
    /// Gains quality with age (Aged Brie).
    Ripening,
    /// Gains quality as the concert nears, worthless afterwards.
    Backstage,
    /// Degrades twice as fast as `Normal`.
    Conjured,
    /// Never sold, never degrades (Sulfuras).
    Legendary,
}

impl Category {
    /// Classify an item by name. Unknown names are `Normal`.
    pub fn classify(name: &str) -> Self {
        PATTERNS
            .iter()
            .find(|(pattern, _)| name.contains(pattern))
            .map(|(_, category)| *category)
            .unwrap_or(Category::Normal)
    }

    pub fn is_legendary(self) -> bool {
        self == Category::Legendary
    }

    /// Highest quality an item of this category may hold after a step.
    pub fn quality_ceiling(self) -> i32 {
        match self {
            Category::Legendary => LEGENDARY_QUALITY,
            _ => MAX_QUALITY,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Normal => "normal",
            Category::Ripening => "ripening",
            Category::Backstage => "backstage",
            Category::Conjured => "conjured",
            Category::Legendary => "legendary",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
