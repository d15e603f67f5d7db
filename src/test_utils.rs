pub mod test_helpers {
    use std::path::PathBuf;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::app::App;
    use crate::host::document::NoteBuffer;
    use crate::host::tag_index::StaticTags;

    pub const TEST_NOTE: &str = "---\ntags: work, \ntitle: Weekly review\n---\n\n# Notes\n";

    pub const TEST_TAGS: &[&str] = &["work", "home", "project/alpha", "project/beta"];

    pub fn note(text: &str) -> NoteBuffer {
        NoteBuffer::new(text)
    }

    pub fn test_app(text: &str) -> App {
        let index = Box::new(StaticTags::new(TEST_TAGS.iter().copied()));
        App::new(PathBuf::from("note.md"), text, index)
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Type a string into the app one character at a time, running the
    /// full key-handling path for each.
    pub fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key_event(key(KeyCode::Char(c)));
        }
    }
}
