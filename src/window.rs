//! Window computation for fixed-height virtualized lists.
//!
//! Given the number of items, their uniform height, and the current viewport,
//! [`compute_window`] decides which contiguous slice of the collection has to be
//! materialized. Everything is measured in rows.
//!
//! ```rust
//! use bubbletea_windowed_list::window::compute_window;
//!
//! // 1000 items, 80 rows each, 600-row viewport scrolled to row 4000, overscan 3
//! let window = compute_window(1000, 4000, 80, 600, 3);
//! assert_eq!(window.start_index, 47);
//! assert_eq!(window.end_index, 61);
//! assert_eq!(window.top_offset, 47 * 80);
//! assert_eq!(window.total_content_height, 80_000);
//! ```
//!
//! Item heights must be non-zero. The computation does not special-case a zero
//! height; validate untrusted values with [`crate::config::ListConfig::validate`].

use std::ops::Range;

/// The slice of a collection that is currently materialized.
///
/// Always satisfies `start_index <= end_index <= len`,
/// `top_offset == start_index * item_height` and
/// `total_content_height == len * item_height`, with the products saturating
/// at `usize::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Window {
    /// First materialized index (inclusive).
    pub start_index: usize,
    /// Last materialized index (exclusive).
    pub end_index: usize,
    /// Rows between the top of the content and the first materialized item.
    pub top_offset: usize,
    /// Height of the whole collection as if every item were rendered.
    pub total_content_height: usize,
}

impl Window {
    /// Number of materialized items.
    pub fn len(&self) -> usize {
        self.end_index - self.start_index
    }

    /// True when nothing is materialized.
    pub fn is_empty(&self) -> bool {
        self.start_index == self.end_index
    }

    /// The materialized indices as a range, suitable for slicing.
    pub fn range(&self) -> Range<usize> {
        self.start_index..self.end_index
    }

    /// Whether `index` is materialized.
    pub fn contains(&self, index: usize) -> bool {
        self.range().contains(&index)
    }

    /// Rows of content below the last materialized item.
    pub fn bottom_offset(&self, item_height: usize) -> usize {
        self.total_content_height
            .saturating_sub(self.end_index.saturating_mul(item_height))
    }
}

/// Computes the materialized window for a list of `len` items.
///
/// ```text
/// start = max(0, floor(scroll_offset / item_height) - overscan)
/// end   = min(len, ceil((scroll_offset + container_height) / item_height) + overscan)
/// ```
///
/// When `scroll_offset` points past the end of the content, `start` is pulled
/// back to `end` so the window stays well formed.
///
/// # Panics
///
/// Panics if `item_height` is zero.
pub fn compute_window(
    len: usize,
    scroll_offset: usize,
    item_height: usize,
    container_height: usize,
    overscan: usize,
) -> Window {
    let first_visible = scroll_offset / item_height;
    let last_visible = scroll_offset
        .saturating_add(container_height)
        .div_ceil(item_height);

    let end_index = last_visible.saturating_add(overscan).min(len);
    let start_index = first_visible.saturating_sub(overscan).min(end_index);

    Window {
        start_index,
        end_index,
        top_offset: start_index.saturating_mul(item_height),
        total_content_height: len.saturating_mul(item_height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_scenario_top_of_large_list() {
        let w = compute_window(1000, 0, 80, 600, 3);
        assert_eq!(w.start_index, 0);
        assert_eq!(w.end_index, 11);
        assert_eq!(w.top_offset, 0);
        assert_eq!(w.total_content_height, 80_000);
    }

    #[test]
    fn test_scenario_scrolled_large_list() {
        let w = compute_window(1000, 4000, 80, 600, 3);
        assert_eq!(w.start_index, 47);
        assert_eq!(w.end_index, 61);
        assert_eq!(w.top_offset, 3760);
        assert_eq!(w.len(), 14);
    }

    #[test]
    fn test_content_shorter_than_container() {
        let w = compute_window(5, 0, 80, 600, 3);
        assert_eq!(w.start_index, 0);
        assert_eq!(w.end_index, 5);
        assert_eq!(w.total_content_height, 400);
        assert_eq!(w.bottom_offset(80), 0);
    }

    #[test]
    fn test_empty_collection() {
        let w = compute_window(0, 0, 1, 10, 3);
        assert!(w.is_empty());
        assert_eq!(w.total_content_height, 0);
    }

    #[test]
    fn test_offset_past_content_keeps_window_well_formed() {
        let w = compute_window(5, 4000, 80, 600, 3);
        assert_eq!(w.end_index, 5);
        assert_eq!(w.start_index, 5);
        assert!(w.is_empty());
    }

    #[test]
    fn test_zero_overscan_is_exact() {
        // Rows 10..20 of 1-row items.
        let w = compute_window(100, 10, 1, 10, 0);
        assert_eq!(w.range(), 10..20);
        assert!(w.contains(10));
        assert!(!w.contains(20));
        assert_eq!(w.bottom_offset(1), 80);
    }

    #[test]
    fn test_partial_item_at_bottom_edge_is_included() {
        // Rows 0..5 with 2-row items touch items 0, 1 and half of 2.
        let w = compute_window(10, 0, 2, 5, 0);
        assert_eq!(w.range(), 0..3);
    }

    #[test]
    fn test_resize_uses_same_formula() {
        let small = compute_window(100, 20, 2, 6, 1);
        let tall = compute_window(100, 20, 2, 30, 1);
        assert_eq!(small.start_index, tall.start_index);
        assert_eq!(small.end_index, 14);
        assert_eq!(tall.end_index, 26);
    }

    #[test]
    fn test_huge_heights_saturate() {
        let w = compute_window(4, usize::MAX - 1, usize::MAX / 2, 10, 3);
        assert_eq!(w.total_content_height, usize::MAX);
        assert_eq!(w.end_index, 4);
        assert_eq!(w.start_index, 0);
        assert_eq!(w.top_offset, 0);
        assert_eq!(w.bottom_offset(usize::MAX / 2), 0);

        let w = compute_window(usize::MAX, usize::MAX / 2, 3, 10, 0);
        assert_eq!(w.top_offset, usize::MAX / 2 / 3 * 3);
        assert_eq!(w.total_content_height, usize::MAX);
    }

    fn params() -> impl Strategy<Value = (usize, usize, usize, usize)> {
        (0usize..5_000, 1usize..200, 1usize..2_000, 0usize..20)
    }

    proptest! {
        #[test]
        fn prop_total_height_is_len_times_item_height(
            (len, item_height, container_height, overscan) in params(),
            scroll in 0usize..1_000_000,
        ) {
            let w = compute_window(len, scroll, item_height, container_height, overscan);
            prop_assert_eq!(w.total_content_height, len * item_height);
            prop_assert_eq!(w.top_offset, w.start_index * item_height);
        }

        #[test]
        fn prop_window_within_visible_range_plus_overscan(
            (len, item_height, container_height, overscan) in params(),
            fraction in 0.0f64..=1.0,
        ) {
            let total = len * item_height;
            let max_scroll = total.saturating_sub(container_height);
            let scroll = (max_scroll as f64 * fraction) as usize;

            let w = compute_window(len, scroll, item_height, container_height, overscan);
            prop_assert!(w.start_index <= w.end_index);
            prop_assert!(w.end_index <= len);

            let visible_start = scroll / item_height;
            let visible_end = (scroll + container_height).div_ceil(item_height);
            let lo = visible_start.saturating_sub(overscan);
            let hi = (visible_end + overscan).min(len);
            for index in w.range() {
                prop_assert!(index >= lo && index < hi);
            }
        }

        #[test]
        fn prop_idempotent(
            (len, item_height, container_height, overscan) in params(),
            scroll in 0usize..1_000_000,
        ) {
            prop_assert_eq!(
                compute_window(len, scroll, item_height, container_height, overscan),
                compute_window(len, scroll, item_height, container_height, overscan)
            );
        }

        #[test]
        fn prop_monotonic_in_scroll_offset(
            (len, item_height, container_height, overscan) in params(),
            a in 0usize..1_000_000,
            b in 0usize..1_000_000,
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let before = compute_window(len, lo, item_height, container_height, overscan);
            let after = compute_window(len, hi, item_height, container_height, overscan);
            prop_assert!(before.start_index <= after.start_index);
            prop_assert!(before.end_index <= after.end_index);
        }
    }
}
