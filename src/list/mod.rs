//! Windowed list component.
//!
//! A list that renders only the items intersecting its viewport, plus a few
//! overscan items on either side. Every item occupies the same number of rows,
//! so the slice to render is found with constant-time arithmetic
//! ([`crate::window::compute_window`]) no matter how large the collection is.
//!
//! ## Basic Usage
//!
//! ```rust
//! use bubbletea_windowed_list::list::Model;
//!
//! let items: Vec<String> = (0..10_000).map(|i| format!("event #{i}")).collect();
//! let mut list = Model::new(items, |item: &String, index: usize| format!("{index:>5} {item}"), 1, 5)
//!     .with_overscan(2);
//!
//! list.scroll_to(100);
//! let window = list.window().unwrap();
//! assert_eq!(window.start_index, 98);
//! assert_eq!(window.end_index, 107);
//!
//! let rows = list.view_rows();
//! assert_eq!(rows.len(), 5);
//! assert_eq!(rows[0], "  100 event #100");
//! ```
//!
//! ## Multi-row items
//!
//! ```rust
//! use bubbletea_windowed_list::list::Model;
//!
//! let cards = vec![("alpha".to_string(), 3), ("beta".to_string(), 7)];
//! let list = Model::new(
//!     cards,
//!     |card: &(String, i32), _index: usize| format!("{}\n  score: {}", card.0, card.1),
//!     3,
//!     6,
//! );
//! // Each card is padded to three rows.
//! assert_eq!(list.view_rows()[..3], ["alpha", "  score: 3", ""]);
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! The list handles scroll keys and, with auto-sizing on, terminal resizes.
//! Forward messages to [`Model::update`] and embed [`Model::view`] in your own
//! view.

mod rendering;
pub mod style;
mod types;


pub use style::Styles;
pub use types::{DisplayRenderer, ItemRenderer};

use crate::config::{ConfigError, ListConfig, DEFAULT_EMPTY_MESSAGE};
use crate::key::KeyMap as KeyMapTrait;
use crate::viewport::{ScrollKeyMap, ViewportState};
use crate::window::{compute_window, Window};
use crate::{key, Component};
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg, WindowSizeMsg};
use lipgloss_extras::lipgloss::Style;
use std::fmt::{self, Display};
use std::sync::Arc;
use tracing::{debug, trace};

/// Overscan used when none is configured.
pub const DEFAULT_OVERSCAN: usize = 3;

type SharedRenderer<T> = Arc<dyn ItemRenderer<T> + Send + Sync>;

/// A fixed-item-height list that materializes only its visible window.
///
/// The list owns its items and its [`ViewportState`]. The window itself is
/// never stored: it is derived from the item count and viewport whenever it
/// is needed, so it can never go stale after a scroll, resize or item change.
pub struct Model<T> {
    items: Vec<T>,
    renderer: SharedRenderer<T>,
    item_height: usize,
    overscan: usize,
    viewport: ViewportState,
    width: usize,
    show_scrollbar: bool,
    auto_size: bool,
    empty_message: String,
    focus: bool,

    /// Visual styles.
    pub styles: Styles,
    /// Scroll key bindings.
    pub keymap: ScrollKeyMap,
}

impl<T> Model<T> {
    /// Creates a list scrolled to the top.
    ///
    /// `item_height` and `container_height` are in rows and must be non-zero;
    /// use [`Model::from_config`] when they come from user input.
    ///
    /// # Arguments
    ///
    /// * `items` - The whole collection. Only the windowed slice is rendered.
    /// * `renderer` - Turns an item and its index in `items` into text. Any
    ///   `Fn(&T, usize) -> String` closure works.
    /// * `item_height` - Rows every item occupies. Longer output is cut,
    ///   shorter output padded.
    /// * `container_height` - Visible rows.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_windowed_list::list::{DisplayRenderer, Model};
    ///
    /// let list = Model::new(vec!["cpu", "mem", "disk"], DisplayRenderer, 1, 2);
    /// assert_eq!(list.total_content_height(), 3);
    /// assert_eq!(list.view_rows().len(), 2);
    /// ```
    pub fn new<R>(items: Vec<T>, renderer: R, item_height: usize, container_height: usize) -> Self
    where
        R: ItemRenderer<T> + Send + Sync + 'static,
    {
        let mut viewport = ViewportState::new(container_height);
        viewport.set_content_height(items.len().saturating_mul(item_height));
        Self {
            items,
            renderer: Arc::new(renderer),
            item_height,
            overscan: DEFAULT_OVERSCAN,
            viewport,
            width: 0,
            show_scrollbar: false,
            auto_size: false,
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
            focus: true,
            styles: Styles::default(),
            keymap: ScrollKeyMap::default(),
        }
    }

    /// Creates a list from validated settings.
    pub fn from_config<R>(config: ListConfig, items: Vec<T>, renderer: R) -> Result<Self, ConfigError>
    where
        R: ItemRenderer<T> + Send + Sync + 'static,
    {
        config.validate()?;
        let ListConfig {
            item_height,
            container_height,
            overscan,
            width,
            show_scrollbar,
            auto_size,
            empty_message,
        } = config;
        Ok(Self::new(items, renderer, item_height, container_height)
            .with_overscan(overscan)
            .with_width(width)
            .with_scrollbar(show_scrollbar)
            .with_auto_size(auto_size)
            .with_empty_message(empty_message))
    }

    /// Sets how many extra items to materialize beyond each visible edge.
    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    /// Sets the column budget. Zero leaves rows unclipped.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Shows or hides the scrollbar column.
    pub fn with_scrollbar(mut self, show: bool) -> Self {
        self.show_scrollbar = show;
        self
    }

    /// Follow `WindowSizeMsg` resizes.
    pub fn with_auto_size(mut self, auto_size: bool) -> Self {
        self.auto_size = auto_size;
        self
    }

    /// Sets the placeholder text for an empty list.
    pub fn with_empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    /// Sets the style wrapped around the whole rendered block.
    ///
    /// Only the surface style changes; the placeholder and scrollbar styles
    /// are left alone. Use [`Model::with_styles`] to replace all of them.
    ///
    /// ```rust
    /// use bubbletea_windowed_list::list::{DisplayRenderer, Model};
    /// use lipgloss_extras::prelude::*;
    ///
    /// let list = Model::new(vec![1, 2, 3], DisplayRenderer, 1, 3)
    ///     .with_style(Style::new().foreground(Color::from("#7D56F4")));
    /// assert_eq!(list.view_rows(), ["1", "2", "3"]);
    /// ```
    pub fn with_style(mut self, style: Style) -> Self {
        self.styles.surface = style;
        self
    }

    /// Replaces all styles.
    pub fn with_styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }

    /// The items, in order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Replaces the items, keeping the scroll offset when it is still valid.
    ///
    /// When the new collection is shorter, the offset is pulled back so the
    /// last page stays full.
    ///
    /// # Use Cases
    ///
    /// - Swapping in a freshly fetched snapshot of the data
    /// - Replacing the collection after a sort or filter applied elsewhere
    pub fn set_items(&mut self, items: Vec<T>) {
        debug!(from = self.items.len(), to = items.len(), "replacing list items");
        self.items = items;
        self.sync_content_height();
    }

    /// Appends items, for instance the next page of a paginated fetch.
    pub fn push_items<I: IntoIterator<Item = T>>(&mut self, items: I) {
        self.items.extend(items);
        self.sync_content_height();
    }

    /// Rows per item.
    pub fn item_height(&self) -> usize {
        self.item_height
    }

    /// Changes the row height of every item.
    pub fn set_item_height(&mut self, item_height: usize) {
        self.item_height = item_height;
        self.sync_content_height();
    }

    /// Extra items materialized beyond each visible edge.
    pub fn overscan(&self) -> usize {
        self.overscan
    }

    /// Changes the overscan.
    pub fn set_overscan(&mut self, overscan: usize) {
        self.overscan = overscan;
    }

    /// Visible rows.
    pub fn container_height(&self) -> usize {
        self.viewport.container_height()
    }

    /// Resizes the list vertically. The window follows on the next read.
    pub fn set_container_height(&mut self, container_height: usize) {
        debug!(
            from = self.viewport.container_height(),
            to = container_height,
            "resizing list"
        );
        self.viewport.set_container_height(container_height);
    }

    /// Column budget; zero means unclipped.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Changes the column budget.
    pub fn set_width(&mut self, width: usize) {
        self.width = width;
    }

    /// Resizes both dimensions.
    pub fn set_size(&mut self, width: usize, height: usize) {
        self.width = width;
        self.set_container_height(height);
    }

    /// Whether the scrollbar column is drawn.
    pub fn show_scrollbar(&self) -> bool {
        self.show_scrollbar
    }

    /// Shows or hides the scrollbar column.
    pub fn set_show_scrollbar(&mut self, show: bool) {
        self.show_scrollbar = show;
    }

    /// Placeholder text for an empty list.
    pub fn empty_message(&self) -> &str {
        &self.empty_message
    }

    /// Current scroll position and size.
    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    /// Rows scrolled past the top.
    pub fn scroll_offset(&self) -> usize {
        self.viewport.scroll_offset()
    }

    /// Height of the whole collection as if every item were rendered.
    pub fn total_content_height(&self) -> usize {
        self.items.len().saturating_mul(self.item_height)
    }

    /// Records a new scroll position, clamped to the content.
    ///
    /// The offset is in rows from the top of the content. Values past the
    /// last full page land on the last full page.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_windowed_list::list::{DisplayRenderer, Model};
    ///
    /// let mut list = Model::new((0..100).collect::<Vec<u32>>(), DisplayRenderer, 2, 10);
    /// list.scroll_to(40);
    /// assert_eq!(list.view_rows()[0], "20");
    ///
    /// list.scroll_to(10_000);
    /// assert_eq!(list.scroll_offset(), 190);
    /// assert!(list.at_bottom());
    /// ```
    pub fn scroll_to(&mut self, offset: usize) {
        self.viewport.scroll_to(offset);
        self.trace_window();
    }

    /// Scrolls by a signed number of rows.
    pub fn scroll_by(&mut self, delta: isize) {
        if self.viewport.scroll_by(delta) {
            self.trace_window();
        }
    }

    /// Scrolls so the item at `index` is the first visible one, or as close
    /// as the content allows.
    pub fn scroll_to_index(&mut self, index: usize) {
        self.scroll_to(index.saturating_mul(self.item_height));
    }

    /// Scrolls the minimum distance needed to show the item at `index` in
    /// full. Items taller than the container are aligned to the top.
    ///
    /// # Use Cases
    ///
    /// - Following a selection driven by something other than scroll keys
    /// - Jumping to a search hit without losing the surrounding context
    ///
    /// ```rust
    /// use bubbletea_windowed_list::list::{DisplayRenderer, Model};
    ///
    /// let mut list = Model::new((0..100).collect::<Vec<u32>>(), DisplayRenderer, 1, 10);
    /// list.scroll_into_view(25);
    /// assert_eq!(list.scroll_offset(), 16);
    /// assert_eq!(list.view_rows()[9], "25");
    /// ```
    pub fn scroll_into_view(&mut self, index: usize) {
        let top = index.saturating_mul(self.item_height);
        let bottom = top.saturating_add(self.item_height);
        let offset = self.viewport.scroll_offset();
        let visible_bottom = offset.saturating_add(self.viewport.container_height());
        if top < offset || self.item_height > self.viewport.container_height() {
            self.scroll_to(top);
        } else if bottom > visible_bottom {
            self.scroll_to(bottom - self.viewport.container_height());
        }
    }

    /// True when nothing is hidden above the viewport.
    pub fn at_top(&self) -> bool {
        self.viewport.at_top()
    }

    /// True when nothing is hidden below the viewport.
    pub fn at_bottom(&self) -> bool {
        self.viewport.at_bottom()
    }

    /// Scroll progress from 0.0 to 1.0.
    pub fn scroll_percent(&self) -> f64 {
        self.viewport.scroll_percent()
    }

    /// The materialized window, or `None` for an empty list.
    ///
    /// Recomputed on every call from the current offset, container height,
    /// item height and overscan, so it is never stale after a resize.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_windowed_list::list::{DisplayRenderer, Model};
    ///
    /// let mut list = Model::new((0..1_000).collect::<Vec<u32>>(), DisplayRenderer, 80, 600);
    /// list.scroll_to(4_000);
    /// let window = list.window().unwrap();
    /// assert_eq!(window.range(), 47..61);
    /// assert_eq!(window.top_offset, 3_760);
    ///
    /// let empty: Model<u32> = Model::new(Vec::new(), DisplayRenderer, 1, 10);
    /// assert!(empty.window().is_none());
    /// ```
    pub fn window(&self) -> Option<Window> {
        if self.items.is_empty() {
            return None;
        }
        Some(compute_window(
            self.items.len(),
            self.viewport.scroll_offset(),
            self.item_height,
            self.viewport.container_height(),
            self.overscan,
        ))
    }

    /// The materialized items paired with their index in the collection.
    pub fn visible_items(&self) -> Vec<(usize, &T)> {
        match self.window() {
            Some(window) => window
                .range()
                .zip(&self.items[window.range()])
                .collect(),
            None => Vec::new(),
        }
    }

    /// Handles scroll keys and terminal resizes.
    ///
    /// Scroll keys are ignored while the list is blurred or empty. Resizes are
    /// applied only when auto-sizing is on.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(size) = msg.downcast_ref::<WindowSizeMsg>() {
            if self.auto_size {
                self.set_size(size.width as usize, size.height as usize);
            }
            return None;
        }

        if !self.focus || self.items.is_empty() {
            return None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            let moved = if self.keymap.page_down.matches(key_msg) {
                self.viewport.page_down()
            } else if self.keymap.page_up.matches(key_msg) {
                self.viewport.page_up()
            } else if self.keymap.half_page_down.matches(key_msg) {
                self.viewport.half_page_down()
            } else if self.keymap.half_page_up.matches(key_msg) {
                self.viewport.half_page_up()
            } else if self.keymap.down.matches(key_msg) {
                self.viewport.scroll_down(1)
            } else if self.keymap.up.matches(key_msg) {
                self.viewport.scroll_up(1)
            } else if self.keymap.goto_top.matches(key_msg) {
                self.viewport.goto_top()
            } else if self.keymap.goto_bottom.matches(key_msg) {
                self.viewport.goto_bottom()
            } else {
                false
            };
            if moved {
                self.trace_window();
            }
        }
        None
    }

    fn sync_content_height(&mut self) {
        self.viewport
            .set_content_height(self.items.len().saturating_mul(self.item_height));
    }

    fn trace_window(&self) {
        if let Some(window) = self.window() {
            trace!(
                offset = self.viewport.scroll_offset(),
                start = window.start_index,
                end = window.end_index,
                "window recomputed"
            );
        }
    }
}

impl<T: Clone> Clone for Model<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            renderer: Arc::clone(&self.renderer),
            item_height: self.item_height,
            overscan: self.overscan,
            viewport: self.viewport,
            width: self.width,
            show_scrollbar: self.show_scrollbar,
            auto_size: self.auto_size,
            empty_message: self.empty_message.clone(),
            focus: self.focus,
            styles: self.styles.clone(),
            keymap: self.keymap.clone(),
        }
    }
}

impl<T> fmt::Debug for Model<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("len", &self.items.len())
            .field("item_height", &self.item_height)
            .field("overscan", &self.overscan)
            .field("viewport", &self.viewport)
            .field("width", &self.width)
            .field("show_scrollbar", &self.show_scrollbar)
            .field("focus", &self.focus)
            .finish_non_exhaustive()
    }
}

impl<T> Component for Model<T> {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        None
    }

    fn blur(&mut self) {
        self.focus = false;
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

impl<T> KeyMapTrait for Model<T> {
    fn short_help(&self) -> Vec<&key::Binding> {
        self.keymap.short_help()
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        self.keymap.full_help()
    }
}

impl<T: Display + Send + Sync + 'static> BubbleTeaModel for Model<T> {
    fn init() -> (Self, Option<Cmd>) {
        (Self::new(Vec::new(), DisplayRenderer, 1, 24), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        Model::update(self, msg)
    }

    fn view(&self) -> String {
        Model::view(self)
    }
}
