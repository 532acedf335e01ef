//! View rendering for windowed lists.
//!
//! The materialized items are rendered into one block of rows that starts at
//! content row `top_offset`. The visible surface is the slice of that block
//! between the scroll offset and the scroll offset plus the container height,
//! so positioning happens once for the block rather than once per item.

use super::style::{SCROLLBAR_THUMB, SCROLLBAR_TRACK};
use super::Model;
use lipgloss_extras::lipgloss::width as lg_width;
use std::ops::Range;
use unicode_width::UnicodeWidthChar;

const ESC: char = '\x1b';
const RESET: &str = "\x1b[0m";

impl<T> Model<T> {
    /// Renders the list, exactly `container_height` rows tall, wrapped in the
    /// surface style.
    pub fn view(&self) -> String {
        self.styles.surface.render(&self.view_rows().join("\n"))
    }

    /// The visible rows before the surface style is applied.
    ///
    /// Always returns `container_height` rows. An empty list yields the
    /// placeholder followed by blank rows.
    pub fn view_rows(&self) -> Vec<String> {
        let height = self.viewport.container_height();
        let Some(window) = self.window() else {
            return self.empty_rows();
        };

        let content_width = self.content_width();
        let mut block = Vec::with_capacity(window.len().saturating_mul(self.item_height));
        for (index, item) in window.range().zip(&self.items[window.range()]) {
            block.extend(self.item_rows(item, index, content_width));
        }

        let skip = self.viewport.scroll_offset().saturating_sub(window.top_offset);
        let mut rows: Vec<String> = block.into_iter().skip(skip).take(height).collect();
        rows.resize(height, String::new());

        if self.show_scrollbar {
            self.attach_scrollbar(&mut rows, content_width);
        }
        rows
    }

    /// Renders one item into exactly `item_height` rows.
    fn item_rows(&self, item: &T, index: usize, content_width: Option<usize>) -> Vec<String> {
        let rendered = self.renderer.render(item, index);
        let mut rows: Vec<String> = rendered
            .lines()
            .take(self.item_height)
            .map(|line| clip(line, content_width))
            .collect();
        rows.resize(self.item_height, String::new());
        rows
    }

    fn empty_rows(&self) -> Vec<String> {
        let height = self.viewport.container_height();
        let mut rows = Vec::with_capacity(height);
        if height > 0 {
            let message = clip(&self.empty_message, self.content_width());
            rows.push(self.styles.empty.render(&message));
        }
        rows.resize(height, String::new());
        rows
    }

    /// Columns available to item text, `None` when the width is unbounded.
    ///
    /// The scrollbar takes one column out of a bounded width, so a one-column
    /// list with a scrollbar leaves `Some(0)` for text.
    fn content_width(&self) -> Option<usize> {
        match (self.width, self.show_scrollbar) {
            (0, _) => None,
            (width, true) => Some(width.saturating_sub(1)),
            (width, false) => Some(width),
        }
    }

    fn attach_scrollbar(&self, rows: &mut [String], content_width: Option<usize>) {
        let pad_to = content_width
            .unwrap_or_else(|| rows.iter().map(|row| lg_width(row)).max().unwrap_or(0));
        let thumb = thumb_range(
            self.viewport.container_height(),
            self.viewport.content_height(),
            self.viewport.scroll_offset(),
        );
        let track = self.styles.scrollbar_track.render(SCROLLBAR_TRACK);
        let handle = self.styles.scrollbar_thumb.render(SCROLLBAR_THUMB);

        for (i, row) in rows.iter_mut().enumerate() {
            let used = lg_width(row);
            if used < pad_to {
                row.push_str(&" ".repeat(pad_to - used));
            }
            row.push_str(if thumb.contains(&i) { &handle } else { &track });
        }
    }
}

/// Rows of a `container`-tall scrollbar covered by the thumb.
///
/// The thumb is proportional to the visible share of the content and at least
/// one row; content that fits entirely gets a full-height thumb.
pub(crate) fn thumb_range(container: usize, content: usize, offset: usize) -> Range<usize> {
    if container == 0 {
        return 0..0;
    }
    if content <= container {
        return 0..container;
    }
    let size = (container * container / content).clamp(1, container);
    let travel = container - size;
    let max_offset = content - container;
    let start = (offset.min(max_offset) * travel + max_offset / 2) / max_offset;
    start..start + size
}

/// Clips `line` to `width` display columns. `None` means no limit.
///
/// ANSI escape sequences are copied through without counting toward the
/// width, and a reset is appended when a styled line had to be cut.
pub(crate) fn clip(line: &str, width: Option<usize>) -> String {
    let Some(width) = width else {
        return line.to_string();
    };
    if lg_width(line) <= width {
        return line.to_string();
    }

    let mut out = String::with_capacity(line.len());
    let mut used = 0;
    let mut styled = false;
    let mut chars = line.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == ESC {
            styled = true;
            out.push(ch);
            if chars.peek() == Some(&'[') {
                for c in chars.by_ref() {
                    out.push(c);
                    if c != '[' && ('@'..='~').contains(&c) {
                        break;
                    }
                }
            }
            continue;
        }
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(ch);
    }
    if styled {
        out.push_str(RESET);
    }
    out
}
