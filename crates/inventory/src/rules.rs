//! Per-category daily update rules.
//!
//! Every rule reads `sell_in` before decrementing it, so "expired" means the
//! item started the day with `sell_in <= 0`.

use gildedrose_core::{LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY};

use crate::category::Category;
use crate::item::Item;

/// Raise quality by `delta`, never past the ceiling.
pub fn increase_quality(item: &mut Item, delta: i32) {
    item.quality = item.quality.saturating_add(delta).min(MAX_QUALITY);
}

/// Lower quality by `delta`, never below the floor.
pub fn decrease_quality(item: &mut Item, delta: i32) {
    item.quality = item.quality.saturating_sub(delta).max(MIN_QUALITY);
}

pub fn decrement_sell_in(item: &mut Item) {
    item.sell_in = item.sell_in.saturating_sub(1);
}

impl Category {
    /// Apply one day of this category's rule to `item`.
    pub fn advance(self, item: &mut Item) {
        match self {
            Category::Normal => degrade(item, 1),
            Category::Conjured => degrade(item, 2),
            Category::AgedBrie => {
                // Same rate before and after expiry.
                increase_quality(item, 1);
                decrement_sell_in(item);
            }
            Category::Sulfuras => {
                item.quality = LEGENDARY_QUALITY;
                item.sell_in = 0;
            }
            Category::BackstagePasses => {
                if item.sell_in > 0 {
                    let delta = match item.sell_in {
                        ..6 => 3,
                        ..11 => 2,
                        _ => 1,
                    };
                    increase_quality(item, delta);
                }
                if item.sell_in <= 0 {
                    item.quality = 0;
                }
                decrement_sell_in(item);
            }
        }
    }
}

/// Decay by `rate`, doubled once the item has expired.
fn degrade(item: &mut Item, rate: i32) {
    let delta = if item.sell_in <= 0 { rate * 2 } else { rate };
    decrease_quality(item, delta);
    decrement_sell_in(item);
}
