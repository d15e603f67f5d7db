//! Suggestion popup state
//!
//! Tracks the visible suggestion list, the highlighted row, and a scroll
//! window so long lists stay navigable. Pure state; rendering lives in
//! `app::render`.

/// Maximum number of suggestion rows shown at once.
pub const MAX_VISIBLE_SUGGESTIONS: usize = 10;

#[derive(Debug, Clone, Default)]
pub struct PopupState {
    items: Vec<String>,
    selected: usize,
    scroll_offset: usize,
    visible: bool,
}

impl PopupState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the suggestion list. An empty list hides the popup; a
    /// non-empty one shows it with the first item highlighted.
    pub fn update_suggestions(&mut self, items: Vec<String>) {
        self.visible = !items.is_empty();
        self.items = items;
        self.selected = 0;
        self.scroll_offset = 0;
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.items.clear();
        self.selected = 0;
        self.scroll_offset = 0;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&String> {
        self.visible.then(|| self.items.get(self.selected)).flatten()
    }

    pub fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.items.len();
        self.ensure_selected_visible();
    }

    pub fn select_prev(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected = self
            .selected
            .checked_sub(1)
            .unwrap_or(self.items.len() - 1);
        self.ensure_selected_visible();
    }

    /// The slice of items currently inside the scroll window, plus the
    /// highlighted item's offset within it.
    pub fn visible_items(&self) -> (&[String], usize) {
        let end = (self.scroll_offset + MAX_VISIBLE_SUGGESTIONS).min(self.items.len());
        (
            &self.items[self.scroll_offset..end],
            self.selected - self.scroll_offset,
        )
    }

    fn ensure_selected_visible(&mut self) {
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if self.selected >= self.scroll_offset + MAX_VISIBLE_SUGGESTIONS {
            self.scroll_offset = self.selected + 1 - MAX_VISIBLE_SUGGESTIONS;
        }
    }
}

#[cfg(test)]
#[path = "popup_state_tests.rs"]
mod popup_state_tests;
