//! Styling for windowed lists.
//!
//! The defaults use `AdaptiveColor` so the placeholder and scrollbar read well
//! on both light and dark terminals.
//!
//! ```rust
//! use bubbletea_windowed_list::list::style::{Styles, SCROLLBAR_THUMB};
//! use lipgloss_extras::prelude::*;
//!
//! let mut styles = Styles::default();
//! styles.scrollbar_thumb = Style::new().foreground(Color::from("#874BFD"));
//! assert_eq!(SCROLLBAR_THUMB, "┃");
//! ```

use lipgloss_extras::prelude::*;

/// Glyph for the part of the scrollbar outside the thumb.
pub const SCROLLBAR_TRACK: &str = "│";

/// Glyph for the scrollbar thumb.
pub const SCROLLBAR_THUMB: &str = "┃";

/// Styles applied when rendering a windowed list.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Wraps the whole rendered surface. Borders and padding go here.
    pub surface: Style,
    /// The placeholder shown for an empty list.
    pub empty: Style,
    /// Scrollbar track cells.
    pub scrollbar_track: Style,
    /// Scrollbar thumb cells.
    pub scrollbar_thumb: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            surface: Style::new(),
            empty: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
            scrollbar_track: Style::new().foreground(AdaptiveColor {
                Light: "#DDDADA",
                Dark: "#3C3C3C",
            }),
            scrollbar_thumb: Style::new().foreground(AdaptiveColor {
                Light: "#9B9B9B",
                Dark: "#5C5C5C",
            }),
        }
    }
}

impl Styles {
    /// Styles with no colors or decoration.
    pub fn plain() -> Self {
        Self {
            surface: Style::new(),
            empty: Style::new(),
            scrollbar_track: Style::new(),
            scrollbar_thumb: Style::new(),
        }
    }
}
