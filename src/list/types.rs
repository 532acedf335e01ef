//! Item rendering for windowed lists.
//!
//! The list never decides what an item looks like. It hands each materialized
//! item to an [`ItemRenderer`] together with the item's position in the full
//! collection, so highlighting and numbering stay correct however far the list
//! is scrolled.

use std::fmt::Display;

/// Turns one item into display text.
///
/// `index` is the item's position in the whole collection, never its position
/// inside the materialized window. Output may span several lines; the list
/// keeps the first `item_height` lines and pads short output with blank rows.
///
/// Any `Fn(&T, usize) -> String` is a renderer:
///
/// ```rust
/// use bubbletea_windowed_list::list::ItemRenderer;
///
/// let numbered = |item: &String, index: usize| format!("{:>4}. {}", index + 1, item);
/// assert_eq!(numbered.render(&"alpha".to_string(), 9), "  10. alpha");
/// ```
pub trait ItemRenderer<T> {
    /// Renders `item`, which lives at `index` in the collection.
    fn render(&self, item: &T, index: usize) -> String;
}

impl<T, F> ItemRenderer<T> for F
where
    F: Fn(&T, usize) -> String,
{
    fn render(&self, item: &T, index: usize) -> String {
        self(item, index)
    }
}

/// Renders items through their `Display` implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayRenderer;

impl<T: Display> ItemRenderer<T> for DisplayRenderer {
    fn render(&self, item: &T, _index: usize) -> String {
        item.to_string()
    }
}
