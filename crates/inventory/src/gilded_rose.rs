use gildedrose_core::DomainResult;

use crate::item::Item;

/// The inventory: an ordered list of items advanced one day at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GildedRose {
    items: Vec<Item>,
}

impl GildedRose {
    /// Take ownership of `items` as-is (no validation).
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Like [`GildedRose::new`], but reject any item whose starting quality is
    /// inconsistent with its category.
    pub fn try_new(items: Vec<Item>) -> DomainResult<Self> {
        for item in &items {
            item.validate()?;
        }
        Ok(Self { items })
    }

    /// Advance every item by exactly one day.
    ///
    /// Each item's category is selected from its name at call time, and items
    /// are updated independently in list order.
    pub fn update_quality(&mut self) {
        let _span = tracing::debug_span!("update_quality", items = self.items.len()).entered();

        for item in &mut self.items {
            let category = item.category();
            let (sell_in, quality) = (item.sell_in, item.quality);
            category.advance(item);
            tracing::trace!(
                name = %item.name,
                ?category,
                sell_in.before = sell_in,
                sell_in.after = item.sell_in,
                quality.before = quality,
                quality.after = item.quality,
                "item advanced"
            );
        }
    }

    /// Advance every item by `days` days.
    pub fn advance_days(&mut self, days: u32) {
        for day in 1..=days {
            self.update_quality();
            tracing::debug!(day, of = days, "day advanced");
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Mutable access for callers that edit items between days (e.g. renaming).
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

impl FromIterator<Item> for GildedRose {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl core::fmt::Display for GildedRose {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "name, sellIn, quality")?;
        for item in &self.items {
            writeln!(f, "{item}")?;
        }
        Ok(())
    }
}
