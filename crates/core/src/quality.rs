//! Quality bounds shared by every item category.

/// Lowest quality a non-legendary item can decay to.
pub const MIN_QUALITY: i32 = 0;

/// Highest quality a non-legendary item can reach through updates.
pub const MAX_QUALITY: i32 = 50;

/// Fixed quality of legendary items.
pub const LEGENDARY_QUALITY: i32 = 80;

/// Whether `quality` lies inside the range updates keep non-legendary items in.
pub fn in_range(quality: i32) -> bool {
    (MIN_QUALITY..=MAX_QUALITY).contains(&quality)
}
