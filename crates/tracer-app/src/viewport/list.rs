//! Selectable list viewport
//!
//! Tracks a cursor (`index`) into a list of items and where that cursor sits
//! inside a fixed-height window (`window_offset`, rows above the cursor).
//! The visible slice is `[index - window_offset, .. + window_height)`.

use std::ops::Range;

/// Commands understood by [`ListViewport::apply`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListCommand {
    /// Move the cursor by a signed number of rows
    MoveBy(isize),
    JumpTop,
    JumpBottom,
    PageUp,
    PageDown,
    /// Reduce the window to the given height
    Shrink(usize),
    /// Enlarge the window to the given height, pulling the list bottom down
    /// to the window bottom
    Grow(usize),
    /// Change the window height in whichever direction is needed
    Resize(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListViewport<T> {
    items: Vec<T>,
    index: usize,
    window_height: usize,
    window_offset: usize,
}

impl<T> Default for ListViewport<T> {
    fn default() -> Self {
        Self::new(Vec::new(), 1)
    }
}

impl<T> ListViewport<T> {
    /// Cursor on the first item. Heights below one are treated as one.
    pub fn new(items: Vec<T>, window_height: usize) -> Self {
        Self {
            items,
            index: 0,
            window_height: window_height.max(1),
            window_offset: 0,
        }
    }

    pub fn apply(mut self, command: ListCommand) -> Self {
        if self.items.is_empty() {
            return self;
        }
        match command {
            ListCommand::Resize(height) => {
                let next = if height < self.window_height {
                    ListCommand::Shrink(height)
                } else {
                    ListCommand::Grow(height)
                };
                return self.apply(next);
            }
            ListCommand::Shrink(height) => {
                self.window_height = height.max(1);
                self.window_offset = self.window_offset.min(self.window_height - 1);
            }
            ListCommand::Grow(height) => {
                self.window_height = height.max(1);
            }
            ListCommand::MoveBy(delta) => self.move_by(delta),
            ListCommand::JumpTop => {
                self.index = 0;
                self.window_offset = 0;
            }
            ListCommand::JumpBottom => {
                self.index = self.items.len() - 1;
                self.window_offset = self.index.min(self.window_height - 1);
            }
            ListCommand::PageUp => self.page_up(),
            ListCommand::PageDown => self.page_down(),
        }
        self.normalize();
        self
    }

    fn move_by(&mut self, delta: isize) {
        let last = self.items.len() - 1;
        self.index = shift(self.index, delta, last);
        self.window_offset = shift(self.window_offset, delta, self.window_height - 1);
    }

    fn page_up(&mut self) {
        if self.index == 0 {
            return;
        }
        if self.index < self.window_height {
            self.index = 0;
            self.window_offset = 0;
        } else {
            self.index -= self.window_height;
            // Keep the rows above the cursor on screen
            self.index = self.index.max(self.window_offset);
        }
    }

    fn page_down(&mut self) {
        let last = self.items.len() - 1;
        if self.index == last {
            return;
        }
        let rows_below = self.window_height - 1 - self.window_offset;
        let target = self.index + self.window_height;
        if target > last {
            self.index = last;
            self.window_offset = self.window_height - 1;
        } else if target + rows_below > last {
            self.index = last.saturating_sub(rows_below).max(self.index);
        } else {
            self.index = target;
        }
    }

    /// Clamp `window_offset` so the cursor is on screen, the window never
    /// starts before the first item, and no blank rows trail the last item
    /// while the list is at least as tall as the window.
    fn normalize(&mut self) {
        if self.items.is_empty() {
            self.index = 0;
            self.window_offset = 0;
            return;
        }
        let len = self.items.len();
        self.index = self.index.min(len - 1);
        let hi = self.index.min(self.window_height - 1);
        let lo = (self.index + self.window_height).saturating_sub(len).min(hi);
        self.window_offset = self.window_offset.clamp(lo, hi);
    }

    /// The item under the cursor
    pub fn select(&self) -> Option<&T> {
        self.items.get(self.index)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn window_height(&self) -> usize {
        self.window_height
    }

    pub fn window_offset(&self) -> usize {
        self.window_offset
    }

    /// Item indices currently on screen
    pub fn visible_range(&self) -> Range<usize> {
        if self.items.is_empty() {
            return 0..0;
        }
        let start = self.index - self.window_offset;
        let end = (start + self.window_height).min(self.items.len());
        start..end
    }

    pub fn visible_items(&self) -> &[T] {
        &self.items[self.visible_range()]
    }
}

fn shift(value: usize, delta: isize, max: usize) -> usize {
    let moved = if delta < 0 {
        value.saturating_sub(delta.unsigned_abs())
    } else {
        value.saturating_add(delta.unsigned_abs())
    };
    moved.min(max)
}
