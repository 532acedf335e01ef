#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-windowed-list/")]

//! # bubbletea-windowed-list
//!
//! A windowed (virtualized) list for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! applications. Only the items that intersect the viewport, plus a small
//! overscan margin, are rendered, so a list of a million entries costs the
//! same to draw as a list of twenty.
//!
//! ## Overview
//!
//! Every item occupies the same number of rows. From the item count, the
//! item height, the scroll offset and the container height the list derives a
//! [`Window`]: the contiguous range of items to materialize and the row at
//! which that range starts. The computation is a pure function,
//! [`window::compute_window`], and can be used without any rendering at all.
//!
//! ## Components
//!
//! - **[`list::Model`]**: the windowed list component with key handling and view
//! - **[`viewport::ViewportState`]**: scroll offset and container height
//! - **[`window`]**: the window arithmetic
//! - **[`config::ListConfig`]**: validated, optionally serializable settings
//! - **[`key`]**: key bindings used for scrolling
//!
//! ## Quick Start
//!
//! ```rust
//! use bubbletea_windowed_list::prelude::*;
//!
//! let items: Vec<u32> = (0..1_000).collect();
//! let mut list = WindowedList::new(items, |n: &u32, _index: usize| format!("row {n}"), 1, 10);
//!
//! list.scroll_to(500);
//! let window = list.window().unwrap();
//! assert!(window.contains(500));
//! assert_eq!(list.view_rows()[0], "row 500");
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use bubbletea_windowed_list::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     log: WindowedList<String>,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let lines = (1..=10_000).map(|i| format!("log line {i}")).collect();
//!         let log = WindowedList::new(lines, DisplayRenderer, 1, 20)
//!             .with_auto_size(true)
//!             .with_scrollbar(true);
//!         (Self { log }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.log.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.log.view()
//!     }
//! }
//! ```

pub mod config;
pub mod key;
pub mod list;
pub mod viewport;
pub mod window;

use bubbletea_rs::Cmd;

/// Core trait for components that support focus management.
///
/// A focused component receives keyboard input; a blurred one ignores it.
///
/// ```rust
/// use bubbletea_windowed_list::prelude::*;
///
/// let mut list = WindowedList::new(vec!["a", "b"], DisplayRenderer, 1, 5);
/// assert!(list.focused());
///
/// list.blur();
/// assert!(!list.focused());
///
/// list.focus();
/// assert!(list.focused());
/// ```
pub trait Component {
    /// Sets the component to focused state, optionally returning a command to
    /// run on focus.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred (unfocused) state.
    fn blur(&mut self);

    /// Returns the current focus state of the component.
    fn focused(&self) -> bool;
}

pub use config::{ConfigError, ListConfig};
pub use key::{matches, Binding, Help as KeyHelp, KeyMap, KeyParseError, KeyPress};
pub use list::{
    DisplayRenderer, ItemRenderer, Model as WindowedList, Styles as WindowedListStyles,
};
pub use viewport::{ScrollKeyMap, ViewportState};
pub use window::{compute_window, Window};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_windowed_list::prelude::*;
///
/// let window = compute_window(100, 0, 1, 10, 2);
/// assert_eq!(window.range(), 0..12);
/// ```
pub mod prelude {
    pub use crate::config::{ConfigError, ListConfig};
    pub use crate::key::{matches, Binding, Help as KeyHelp, KeyMap, KeyParseError, KeyPress};
    pub use crate::list::{
        DisplayRenderer, ItemRenderer, Model as WindowedList, Styles as WindowedListStyles,
    };
    pub use crate::viewport::{ScrollKeyMap, ViewportState};
    pub use crate::window::{compute_window, Window};
    pub use crate::Component;
}
