//! The tag suggestion component
//!
//! Alternates between two states: Idle (no active match) and awaiting
//! selection (a `TriggerMatch` is held from the last successful detection).
//! Re-detection is the only reset path; there is no explicit cancel.

use crate::host::document::{Document, DocumentMut, Position};
use crate::host::registry::EditorSuggest;
use crate::host::tag_index::TagIndex;
use crate::suggest::context::{ListMode, TriggerMatch, detect_trigger};
use crate::suggest::filter::{filter_suggestions, flatten_candidates};

/// Text that replaces the trigger span when `tag` is chosen. Both forms end
/// positioned to type the next entry immediately.
pub(crate) fn insert_text(tag: &str, mode: ListMode, indent: &str) -> String {
    match mode {
        ListMode::Inline => format!("{tag}, "),
        ListMode::Block => format!("{tag}\n{indent}- "),
    }
}

/// Frontmatter tag suggester over a host tag index.
pub struct TagSuggest {
    index: Box<dyn TagIndex>,
    active: Option<TriggerMatch>,
}

impl TagSuggest {
    pub fn new(index: Box<dyn TagIndex>) -> Self {
        Self {
            index,
            active: None,
        }
    }

    /// The currently held trigger, if any.
    pub fn active_match(&self) -> Option<&TriggerMatch> {
        self.active.as_ref()
    }

    /// One headless detect-and-filter cycle, leaving the component Idle.
    /// Used by the `suggest` subcommand and handy in tests.
    pub fn suggest_at(&self, cursor: Position, doc: &dyn Document) -> Vec<String> {
        match detect_trigger(cursor, doc) {
            Some(m) => filter_suggestions(&m.query, &flatten_candidates(self.index.tags())),
            None => Vec::new(),
        }
    }
}

impl EditorSuggest for TagSuggest {
    fn on_trigger(&mut self, cursor: Position, doc: &dyn Document) -> Option<TriggerMatch> {
        // Recomputed from scratch every time: the cursor may have moved to
        // a line with a different mode or indentation.
        self.active = detect_trigger(cursor, doc);
        self.active.clone()
    }

    fn suggestions(&self) -> Vec<String> {
        let Some(active) = &self.active else {
            return Vec::new();
        };
        filter_suggestions(&active.query, &flatten_candidates(self.index.tags()))
    }

    fn select(&mut self, doc: &mut dyn DocumentMut, choice: &str) {
        // Silent no-op while Idle.
        let Some(active) = self.active.take() else {
            return;
        };
        let text = insert_text(choice, active.mode, &active.indent);
        doc.replace_range(active.start, active.end, &text);
    }
}

#[cfg(test)]
#[path = "tag_suggest_tests.rs"]
mod tag_suggest_tests;
