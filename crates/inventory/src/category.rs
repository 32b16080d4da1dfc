//! Item categories and the name-based dispatch that selects them.

use serde::{Deserialize, Serialize};

pub const AGED_BRIE: &str = "Aged Brie";
pub const BACKSTAGE_PASSES: &str = "Backstage passes to a TAFKAL80ETC concert";
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";
pub const CONJURED: &str = "Conjured";

/// The fixed set of update behaviours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Normal,
    AgedBrie,
    BackstagePasses,
    Sulfuras,
    Conjured,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Normal,
        Category::AgedBrie,
        Category::BackstagePasses,
        Category::Sulfuras,
        Category::Conjured,
    ];

    /// Select the category for an item name.
    ///
    /// Matching is exact and case-sensitive. Any name that is not one of the
    /// four special names (including the empty string and near misses such as
    /// `"aged brie"`) is a [`Category::Normal`] item.
    pub fn from_name(name: &str) -> Self {
        match name {
            AGED_BRIE => Category::AgedBrie,
            BACKSTAGE_PASSES => Category::BackstagePasses,
            SULFURAS => Category::Sulfuras,
            CONJURED => Category::Conjured,
            _ => Category::Normal,
        }
    }

    /// The item name that selects this category; `None` for normal items,
    /// which have no reserved name.
    pub fn name(self) -> Option<&'static str> {
        match self {
            Category::Normal => None,
            Category::AgedBrie => Some(AGED_BRIE),
            Category::BackstagePasses => Some(BACKSTAGE_PASSES),
            Category::Sulfuras => Some(SULFURAS),
            Category::Conjured => Some(CONJURED),
        }
    }

    pub fn is_legendary(self) -> bool {
        self == Category::Sulfuras
    }
}

impl From<&str> for Category {
    fn from(name: &str) -> Self {
        Category::from_name(name)
    }
}
