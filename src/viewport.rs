//! Scroll position tracking for the windowed list.
//!
//! [`ViewportState`] owns the two values the window computation depends on:
//! the scroll offset and the container height. It also knows the height of the
//! content so scrolling can be clamped, mirroring how a terminal viewport can
//! never scroll past its last line.
//!
//! # Quick Start
//!
//! ```rust
//! use bubbletea_windowed_list::viewport::ViewportState;
//!
//! let mut viewport = ViewportState::new(10);
//! viewport.set_content_height(100);
//!
//! viewport.scroll_down(3);
//! assert_eq!(viewport.scroll_offset(), 3);
//!
//! viewport.page_down();
//! assert_eq!(viewport.scroll_offset(), 13);
//!
//! viewport.goto_bottom();
//! assert!(viewport.at_bottom());
//! assert_eq!(viewport.scroll_offset(), 90);
//! ```
//!
//! # Navigation Controls
//!
//! | Keys | Action | Description |
//! |------|--------| ----------- |
//! | `↑`, `k` | Line Up | Scroll up one row |
//! | `↓`, `j` | Line Down | Scroll down one row |
//! | `PgUp`, `b` | Page Up | Scroll up one container height |
//! | `PgDn`, `f`, `Space` | Page Down | Scroll down one container height |
//! | `u`, `ctrl+u` | Half Page Up | Scroll up half a container |
//! | `d`, `ctrl+d` | Half Page Down | Scroll down half a container |
//! | `g`, `Home` | Top | Jump to the first row |
//! | `G`, `End` | Bottom | Jump to the last page |

use crate::key::{self, KeyMap as KeyMapTrait, KeyPress};
use crossterm::event::{KeyCode, KeyModifiers};

const SPACEBAR: char = ' ';

/// Key bindings that move the scroll offset.
///
/// ```rust
/// use bubbletea_windowed_list::viewport::ScrollKeyMap;
/// use bubbletea_windowed_list::key::{Binding, KeyMap};
/// use crossterm::event::KeyCode;
///
/// let mut keymap = ScrollKeyMap::default();
/// keymap.page_down = Binding::new(vec![KeyCode::Char('n')]).with_help("n", "next page");
///
/// assert_eq!(keymap.short_help().len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct ScrollKeyMap {
    /// Scroll down one page. Default: Page Down, Space, `f`.
    pub page_down: key::Binding,
    /// Scroll up one page. Default: Page Up, `b`.
    pub page_up: key::Binding,
    /// Scroll up half a page. Default: `u`, `ctrl+u`.
    pub half_page_up: key::Binding,
    /// Scroll down half a page. Default: `d`, `ctrl+d`.
    pub half_page_down: key::Binding,
    /// Scroll down one row. Default: `↓`, `j`.
    pub down: key::Binding,
    /// Scroll up one row. Default: `↑`, `k`.
    pub up: key::Binding,
    /// Jump to the top. Default: `g`, Home.
    pub goto_top: key::Binding,
    /// Jump to the bottom. Default: `G`, End.
    pub goto_bottom: key::Binding,
}

impl Default for ScrollKeyMap {
    fn default() -> Self {
        Self {
            page_down: key::Binding::new(vec![
                KeyCode::PageDown,
                KeyCode::Char(SPACEBAR),
                KeyCode::Char('f'),
            ])
            .with_help("f/pgdn", "page down"),
            page_up: key::Binding::new(vec![KeyCode::PageUp, KeyCode::Char('b')])
                .with_help("b/pgup", "page up"),
            half_page_up: key::Binding::new(vec![
                KeyPress::from(KeyCode::Char('u')),
                KeyPress::from((KeyCode::Char('u'), KeyModifiers::CONTROL)),
            ])
            .with_help("u/ctrl+u", "½ page up"),
            half_page_down: key::Binding::new(vec![
                KeyPress::from(KeyCode::Char('d')),
                KeyPress::from((KeyCode::Char('d'), KeyModifiers::CONTROL)),
            ])
            .with_help("d/ctrl+d", "½ page down"),
            up: key::Binding::new(vec![KeyCode::Up, KeyCode::Char('k')]).with_help("↑/k", "up"),
            down: key::Binding::new(vec![KeyCode::Down, KeyCode::Char('j')])
                .with_help("↓/j", "down"),
            goto_top: key::Binding::new(vec![KeyCode::Home, KeyCode::Char('g')])
                .with_help("g/home", "go to top"),
            goto_bottom: key::Binding::new(vec![KeyCode::End, KeyCode::Char('G')])
                .with_help("G/end", "go to bottom"),
        }
    }
}

impl KeyMapTrait for ScrollKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.up, &self.down, &self.page_up, &self.page_down]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![&self.up, &self.down],
            vec![&self.page_up, &self.page_down],
            vec![&self.half_page_up, &self.half_page_down],
            vec![&self.goto_top, &self.goto_bottom],
        ]
    }
}

/// Scroll offset and visible height of a scrollable surface.
///
/// The offset is kept within `0..=max_scroll_offset()` at all times: every
/// mutation re-clamps it, including content and container resizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportState {
    scroll_offset: usize,
    container_height: usize,
    content_height: usize,
}

impl ViewportState {
    /// Creates a viewport scrolled to the top with no content.
    pub fn new(container_height: usize) -> Self {
        Self {
            scroll_offset: 0,
            container_height,
            content_height: 0,
        }
    }

    /// Rows scrolled past the top of the content.
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Visible height of the surface.
    pub fn container_height(&self) -> usize {
        self.container_height
    }

    /// Height of everything that could be scrolled through.
    pub fn content_height(&self) -> usize {
        self.content_height
    }

    /// Largest valid offset. Zero when the content fits in the container.
    pub fn max_scroll_offset(&self) -> usize {
        self.content_height.saturating_sub(self.container_height)
    }

    /// Updates the content height, pulling the offset back if it is now past
    /// the end.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_windowed_list::viewport::ViewportState;
    ///
    /// let mut viewport = ViewportState::new(10);
    /// viewport.set_content_height(100);
    /// viewport.goto_bottom();
    /// assert_eq!(viewport.scroll_offset(), 90);
    ///
    /// // The content shrank; the last page is still full.
    /// viewport.set_content_height(50);
    /// assert_eq!(viewport.scroll_offset(), 40);
    /// ```
    pub fn set_content_height(&mut self, content_height: usize) {
        self.content_height = content_height;
        self.clamp();
    }

    /// Resizes the container.
    pub fn set_container_height(&mut self, container_height: usize) {
        self.container_height = container_height;
        self.clamp();
    }

    /// Records a new scroll position.
    ///
    /// # Arguments
    ///
    /// * `offset` - Rows from the top of the content. Anything past
    ///   [`ViewportState::max_scroll_offset`] is clamped to it.
    pub fn scroll_to(&mut self, offset: usize) {
        self.scroll_offset = offset.min(self.max_scroll_offset());
    }

    /// Scrolls by a signed number of rows. Returns true if the offset changed.
    ///
    /// Negative deltas scroll up. The return value lets callers skip work
    /// when a key press hits an edge.
    ///
    /// ```rust
    /// use bubbletea_windowed_list::viewport::ViewportState;
    ///
    /// let mut viewport = ViewportState::new(5);
    /// viewport.set_content_height(20);
    /// assert!(viewport.scroll_by(4));
    /// assert!(viewport.scroll_by(-1));
    /// assert_eq!(viewport.scroll_offset(), 3);
    /// assert!(viewport.scroll_by(-10));
    /// assert!(viewport.at_top());
    /// assert!(!viewport.scroll_by(-1));
    /// ```
    pub fn scroll_by(&mut self, delta: isize) -> bool {
        if delta < 0 {
            self.scroll_up(delta.unsigned_abs())
        } else {
            self.scroll_down(delta.unsigned_abs())
        }
    }

    /// Scrolls down `n` rows. Returns true if the offset changed.
    pub fn scroll_down(&mut self, n: usize) -> bool {
        let before = self.scroll_offset;
        self.scroll_to(self.scroll_offset.saturating_add(n));
        before != self.scroll_offset
    }

    /// Scrolls up `n` rows. Returns true if the offset changed.
    pub fn scroll_up(&mut self, n: usize) -> bool {
        let before = self.scroll_offset;
        self.scroll_to(self.scroll_offset.saturating_sub(n));
        before != self.scroll_offset
    }

    /// Scrolls down one container height.
    ///
    /// # Use Cases
    ///
    /// - Bound to Page Down and Space by [`ScrollKeyMap::default`]
    /// - Stepping through a long log a screen at a time
    pub fn page_down(&mut self) -> bool {
        self.scroll_down(self.container_height)
    }

    /// Scrolls up one container height.
    pub fn page_up(&mut self) -> bool {
        self.scroll_up(self.container_height)
    }

    /// Scrolls down half a container height, rounded down. A one-row
    /// container does not move.
    pub fn half_page_down(&mut self) -> bool {
        self.scroll_down(self.container_height / 2)
    }

    /// Scrolls up half a container height.
    pub fn half_page_up(&mut self) -> bool {
        self.scroll_up(self.container_height / 2)
    }

    /// Jumps to the first row.
    pub fn goto_top(&mut self) -> bool {
        let before = self.scroll_offset;
        self.scroll_offset = 0;
        before != 0
    }

    /// Jumps so the last row of content sits at the bottom of the container.
    pub fn goto_bottom(&mut self) -> bool {
        let before = self.scroll_offset;
        self.scroll_offset = self.max_scroll_offset();
        before != self.scroll_offset
    }

    /// True when nothing is hidden above the container.
    pub fn at_top(&self) -> bool {
        self.scroll_offset == 0
    }

    /// True when nothing is hidden below the container.
    pub fn at_bottom(&self) -> bool {
        self.scroll_offset >= self.max_scroll_offset()
    }

    /// Scroll progress from 0.0 (top) to 1.0 (bottom).
    ///
    /// Content that fits entirely in the container reports 1.0.
    pub fn scroll_percent(&self) -> f64 {
        let max = self.max_scroll_offset();
        if max == 0 {
            return 1.0;
        }
        (self.scroll_offset as f64 / max as f64).clamp(0.0, 1.0)
    }

    fn clamp(&mut self) {
        self.scroll_offset = self.scroll_offset.min(self.max_scroll_offset());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(container: usize, content: usize) -> ViewportState {
        let mut v = ViewportState::new(container);
        v.set_content_height(content);
        v
    }

    #[test]
    fn test_new_starts_at_top() {
        let v = ViewportState::new(24);
        assert_eq!(v.scroll_offset(), 0);
        assert_eq!(v.container_height(), 24);
        assert!(v.at_top());
        assert!(v.at_bottom());
        assert_eq!(v.scroll_percent(), 1.0);
    }

    #[test]
    fn test_scroll_is_clamped_to_content() {
        let mut v = viewport(10, 25);
        assert_eq!(v.max_scroll_offset(), 15);

        v.scroll_to(1_000);
        assert_eq!(v.scroll_offset(), 15);
        assert!(v.at_bottom());

        assert!(!v.scroll_down(1));
        assert!(v.scroll_up(20));
        assert_eq!(v.scroll_offset(), 0);
        assert!(!v.scroll_up(1));
    }

    #[test]
    fn test_scroll_by_signed_delta() {
        let mut v = viewport(10, 100);
        v.scroll_by(7);
        assert_eq!(v.scroll_offset(), 7);
        v.scroll_by(-3);
        assert_eq!(v.scroll_offset(), 4);
        v.scroll_by(isize::MIN);
        assert_eq!(v.scroll_offset(), 0);
    }

    #[test]
    fn test_paging() {
        let mut v = viewport(10, 100);
        v.page_down();
        assert_eq!(v.scroll_offset(), 10);
        v.half_page_down();
        assert_eq!(v.scroll_offset(), 15);
        v.half_page_up();
        assert_eq!(v.scroll_offset(), 10);
        v.page_up();
        assert_eq!(v.scroll_offset(), 0);
    }

    #[test]
    fn test_goto_top_and_bottom() {
        let mut v = viewport(10, 100);
        assert!(v.goto_bottom());
        assert_eq!(v.scroll_offset(), 90);
        assert!(!v.goto_bottom());
        assert!(v.goto_top());
        assert!(!v.goto_top());
    }

    #[test]
    fn test_shrinking_content_pulls_offset_back() {
        let mut v = viewport(10, 100);
        v.scroll_to(80);
        v.set_content_height(40);
        assert_eq!(v.scroll_offset(), 30);
        v.set_content_height(5);
        assert_eq!(v.scroll_offset(), 0);
    }

    #[test]
    fn test_growing_container_pulls_offset_back() {
        let mut v = viewport(10, 100);
        v.goto_bottom();
        v.set_container_height(60);
        assert_eq!(v.scroll_offset(), 40);
        assert!(v.at_bottom());
    }

    #[test]
    fn test_scroll_percent() {
        let mut v = viewport(10, 30);
        assert_eq!(v.scroll_percent(), 0.0);
        v.scroll_to(10);
        assert_eq!(v.scroll_percent(), 0.5);
        v.goto_bottom();
        assert_eq!(v.scroll_percent(), 1.0);
    }

    #[test]
    fn test_default_keymap_help_groups() {
        let keymap = ScrollKeyMap::default();
        assert_eq!(keymap.short_help().len(), 4);
        let full = keymap.full_help();
        assert_eq!(full.len(), 4);
        assert!(full.iter().all(|group| group.len() == 2));
        assert_eq!(keymap.goto_bottom.help().key, "G/end");
    }
}
