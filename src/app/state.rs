use std::fs;
use std::io;
use std::path::PathBuf;

use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::{CursorMove, TextArea};

use crate::app::popup_state::PopupState;
use crate::host::document::{NoteBuffer, Position};
use crate::host::registry::ExtensionRegistry;
use crate::host::tag_index::TagIndex;
use crate::suggest::{ListMode, TagSuggest, TriggerMatch};

/// Application state
pub struct App {
    pub note_path: PathBuf,
    pub textarea: TextArea<'static>,
    pub registry: ExtensionRegistry,
    pub popup: PopupState,
    pub status: Option<String>,
    pub should_quit: bool,
    /// The trigger from the most recent detection, kept to place the cursor
    /// after a selection is applied.
    last_match: Option<TriggerMatch>,
}

impl App {
    /// Create a new App instance editing `text` with suggestions drawn from
    /// `index`.
    pub fn new(note_path: PathBuf, text: &str, index: Box<dyn TagIndex>) -> Self {
        let mut textarea = TextArea::from(text.split('\n').map(str::to_string));
        configure_textarea(&mut textarea, &note_path);

        // The suggester registers once at startup; afterwards the event
        // loop only talks to the registry.
        let mut registry = ExtensionRegistry::new();
        registry.register_suggest(Box::new(TagSuggest::new(index)));

        Self {
            note_path,
            textarea,
            registry,
            popup: PopupState::new(),
            status: None,
            should_quit: false,
            last_match: None,
        }
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Current cursor as a document position. tui-textarea reports
    /// (row, column) with the column in characters, which is exactly the
    /// document model's unit.
    pub fn cursor(&self) -> Position {
        let (row, col) = self.textarea.cursor();
        Position::new(row, col)
    }

    /// Snapshot of the note as a plain document.
    pub fn buffer(&self) -> NoteBuffer {
        NoteBuffer::from_lines(self.textarea.lines().to_vec())
    }

    /// Re-run trigger detection for the current cursor and refresh the
    /// popup. Called after every edit and cursor movement; any failure mode
    /// just leaves the popup hidden.
    pub fn update_suggestions(&mut self) {
        let buffer = self.buffer();
        self.last_match = self.registry.on_trigger(self.cursor(), &buffer);
        match &self.last_match {
            Some(_) => {
                let items = self.registry.suggestions();
                self.popup.update_suggestions(items);
            }
            None => self.popup.hide(),
        }
    }

    /// Apply the highlighted suggestion to the note and move the cursor to
    /// the end of the inserted text.
    pub fn accept_selected(&mut self) {
        let Some(choice) = self.popup.selected_item().cloned() else {
            return;
        };
        let Some(active) = self.last_match.take() else {
            return;
        };

        let mut buffer = self.buffer();
        self.registry.select(&mut buffer, &choice);

        let mut textarea = TextArea::from(buffer.lines().to_vec());
        configure_textarea(&mut textarea, &self.note_path);
        self.textarea = textarea;

        let cursor = cursor_after_insert(&active, &choice);
        self.textarea
            .move_cursor(CursorMove::Jump(cursor.line as u16, cursor.ch as u16));

        self.popup.hide();
        self.update_suggestions();
    }

    /// Write the note back to disk.
    pub fn save(&mut self) -> io::Result<()> {
        fs::write(&self.note_path, self.textarea.lines().join("\n"))?;
        self.status = Some(format!("Saved {}", self.note_path.display()));
        Ok(())
    }
}

/// Cursor position right after the inserted text: past `"<tag>, "` in
/// inline mode, past the fresh `"<indent>- "` on the new line in block
/// mode. Ready to type the next entry either way.
fn cursor_after_insert(active: &TriggerMatch, choice: &str) -> Position {
    match active.mode {
        ListMode::Inline => Position::new(active.start.line, active.start.ch + choice.chars().count() + 2),
        ListMode::Block => Position::new(active.start.line + 1, active.indent.chars().count() + 2),
    }
}

fn configure_textarea(textarea: &mut TextArea<'static>, note_path: &std::path::Path) {
    let title = note_path
        .file_name()
        .map(|n| format!(" {} ", n.to_string_lossy()))
        .unwrap_or_else(|| " Note ".to_string());
    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    textarea.set_cursor_line_style(Style::default());
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
