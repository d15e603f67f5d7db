//! Editor extension registry
//!
//! The declared contract between the editor shell and suggestion providers.
//! Providers register once at startup; afterwards the shell drives them
//! through the trait on every relevant edit and never pokes at their
//! internals.

use crate::host::document::{Document, DocumentMut, Position};
use crate::suggest::TriggerMatch;

/// A suggestion provider the editor shell can drive.
pub trait EditorSuggest {
    /// Called on cursor movement and keystrokes. Returning `None` means
    /// this provider has nothing to offer here; any previously held trigger
    /// state is superseded either way.
    fn on_trigger(&mut self, cursor: Position, doc: &dyn Document) -> Option<TriggerMatch>;

    /// Items to show for the active trigger, already filtered. Empty when
    /// no trigger is active.
    fn suggestions(&self) -> Vec<String>;

    /// The user picked `choice` from the popup. A no-op when no trigger is
    /// active.
    fn select(&mut self, doc: &mut dyn DocumentMut, choice: &str);
}

/// Holds every registered provider for the lifetime of the shell. There is
/// no unregistration; providers drop with the registry.
#[derive(Default)]
pub struct ExtensionRegistry {
    suggesters: Vec<Box<dyn EditorSuggest>>,
}

impl ExtensionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_suggest(&mut self, suggester: Box<dyn EditorSuggest>) {
        self.suggesters.push(suggester);
    }

    /// Poll providers in registration order; the first trigger wins.
    pub fn on_trigger(&mut self, cursor: Position, doc: &dyn Document) -> Option<TriggerMatch> {
        let mut found = None;
        for suggester in &mut self.suggesters {
            // Every provider sees the event so stale trigger state from a
            // previous detection is superseded, not just the winner's.
            let hit = suggester.on_trigger(cursor, doc);
            if found.is_none() {
                found = hit;
            }
        }
        found
    }

    /// Suggestions from the first provider holding an active trigger.
    pub fn suggestions(&self) -> Vec<String> {
        for suggester in &self.suggesters {
            let items = suggester.suggestions();
            if !items.is_empty() {
                return items;
            }
        }
        Vec::new()
    }

    /// Forward a popup selection to every provider; inactive ones treat it
    /// as a no-op.
    pub fn select(&mut self, doc: &mut dyn DocumentMut, choice: &str) {
        for suggester in &mut self.suggesters {
            suggester.select(doc, choice);
        }
    }
}
