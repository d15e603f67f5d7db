//! Host-side collaborators
//!
//! The suggestion engine never talks to the editor, the tag cache, or the
//! extension machinery directly. Everything it needs from the surrounding
//! application comes through the traits in this module, so the same engine
//! runs under the interactive TUI, the headless CLI, and the tests.

pub mod document;
pub mod registry;
pub mod tag_index;

// Re-export public types
pub use document::{Document, DocumentMut, NoteBuffer, Position};
pub use registry::{EditorSuggest, ExtensionRegistry};
pub use tag_index::{StaticTags, TagIndex, VaultIndex};
