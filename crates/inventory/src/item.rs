use serde::{Deserialize, Serialize};

use gildedrose_core::{DomainError, DomainResult, LEGENDARY_QUALITY, quality};

use crate::category::Category;

/// A single stock line: its name selects the update rule, `sell_in` and
/// `quality` evolve once per day.
///
/// Fields are public so callers can inspect (or rename) an item between
/// updates. The name is re-read on every update, so renaming takes effect on
/// the next day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    /// Days left before the sale window closes; negative once expired.
    pub sell_in: i32,
    pub quality: i32,
}

impl Item {
    /// Create an item without checking its starting state.
    ///
    /// An out-of-range starting quality is kept as-is; the daily update clamps
    /// the changes it makes but never corrects the initial value.
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    /// Create an item, rejecting a starting quality that its category could
    /// never hold.
    pub fn try_new(name: impl Into<String>, sell_in: i32, quality: i32) -> DomainResult<Self> {
        let item = Self::new(name, sell_in, quality);
        item.validate()?;
        Ok(item)
    }

    /// Check that the current quality is consistent with the item's category.
    pub fn validate(&self) -> DomainResult<()> {
        if self.category().is_legendary() {
            if self.quality != LEGENDARY_QUALITY {
                return Err(DomainError::invariant(format!(
                    "{:?} must have quality {LEGENDARY_QUALITY}, got {}",
                    self.name, self.quality
                )));
            }
            return Ok(());
        }

        if !quality::in_range(self.quality) {
            return Err(DomainError::validation(format!(
                "{:?} has quality {} outside {}..={}",
                self.name,
                self.quality,
                quality::MIN_QUALITY,
                quality::MAX_QUALITY
            )));
        }
        Ok(())
    }

    /// The category currently selected by this item's name.
    pub fn category(&self) -> Category {
        Category::from_name(&self.name)
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}
