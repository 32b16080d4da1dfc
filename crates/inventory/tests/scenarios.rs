//! Black-box checks of the daily update through the public API.

use gildedrose_inventory::{Category, GildedRose, Item};

const BRIE: &str = "Aged Brie";
const PASS: &str = "Backstage passes to a TAFKAL80ETC concert";
const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";

fn after_one_day(name: &str, sell_in: i32, quality: i32) -> (i32, i32) {
    gildedrose_observability::init();
    let mut rose = GildedRose::new(vec![Item::new(name, sell_in, quality)]);
    rose.update_quality();
    let item = &rose.items()[0];
    (item.sell_in, item.quality)
}

#[test]
fn normal_item_with_one_day_left_loses_last_point() {
    assert_eq!(after_one_day("anything", 1, 1), (0, 0));
}

#[test]
fn expired_normal_item_stops_at_zero() {
    assert_eq!(after_one_day("anything", 0, 1), (-1, 0));
}

#[test]
fn normal_item_on_sell_date_loses_two() {
    assert_eq!(after_one_day("past_sellin", 0, 10), (-1, 8));
}

#[test]
fn aged_brie_improves() {
    assert_eq!(after_one_day(BRIE, 5, 10), (4, 11));
}

#[test]
fn backstage_passes_never_exceed_fifty() {
    assert_eq!(after_one_day(PASS, 5, 50), (4, 50));
}

#[test]
fn backstage_passes_are_worthless_after_the_concert() {
    assert_eq!(after_one_day(PASS, 0, 10), (-1, 0));
}

#[test]
fn sulfuras_is_pinned() {
    assert_eq!(after_one_day(SULFURAS, 5, 10), (0, 80));
}

#[test]
fn conjured_decay_is_clamped_at_floor() {
    assert_eq!(after_one_day("Conjured", 0, 3), (-1, 0));
}

#[test]
fn thirty_days_of_mixed_stock() {
    gildedrose_observability::init();
    let mut rose = GildedRose::new(vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new(BRIE, 2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new(SULFURAS, 0, 80),
        Item::new(SULFURAS, -1, 80),
        Item::new(PASS, 15, 20),
        Item::new(PASS, 10, 49),
        Item::new(PASS, 5, 49),
        Item::new("Conjured", 3, 6),
    ]);

    rose.advance_days(30);

    let state: Vec<_> = rose
        .items()
        .iter()
        .map(|i| (i.name.as_str(), i.sell_in, i.quality))
        .collect();
    assert_eq!(
        state,
        vec![
            ("+5 Dexterity Vest", -20, 0),
            (BRIE, -28, 30),
            ("Elixir of the Mongoose", -25, 0),
            (SULFURAS, 0, 80),
            (SULFURAS, 0, 80),
            (PASS, -15, 0),
            (PASS, -20, 0),
            (PASS, -25, 0),
            ("Conjured", -27, 0),
        ]
    );
}

#[test]
fn backstage_pass_value_over_its_lifetime() {
    let mut rose = GildedRose::new(vec![Item::new(PASS, 12, 10)]);
    let mut qualities = Vec::new();
    for _ in 0..13 {
        rose.update_quality();
        qualities.push(rose.items()[0].quality);
    }
    // 12, 11 -> +1; 10..=6 -> +2; 5..=1 -> +3; 0 -> reset.
    assert_eq!(
        qualities,
        vec![11, 12, 14, 16, 18, 20, 22, 25, 28, 31, 34, 37, 0]
    );
}

#[test]
fn item_categories_follow_names() {
    let rose = GildedRose::new(vec![
        Item::new(BRIE, 1, 1),
        Item::new("aged brie", 1, 1),
        Item::new("", 1, 1),
    ]);
    let categories: Vec<_> = rose.items().iter().map(Item::category).collect();
    assert_eq!(
        categories,
        vec![Category::AgedBrie, Category::Normal, Category::Normal]
    );
}
