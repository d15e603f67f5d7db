use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::state::App;

impl App {
    /// Handle events and update application state
    pub fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event);
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.popup.is_visible() && self.handle_popup_key(key) {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('q') if ctrl => self.should_quit = true,
            KeyCode::Char('s') if ctrl => {
                match self.save() {
                    Ok(()) => self.should_quit = true,
                    // Degrade to a status message; the note stays open.
                    Err(e) => self.status = Some(format!("Save failed: {e}")),
                }
            }
            _ => {
                self.textarea.input(key);
                self.status = None;
                // Every keystroke and cursor movement re-evaluates the
                // trigger; a stale match never survives an edit.
                self.update_suggestions();
            }
        }
    }

    /// Keys captured by the open suggestion popup. Returns false for keys
    /// the popup does not consume.
    fn handle_popup_key(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Down => self.popup.select_next(),
            KeyCode::Up => self.popup.select_prev(),
            KeyCode::Char('n') if ctrl => self.popup.select_next(),
            KeyCode::Char('p') if ctrl => self.popup.select_prev(),
            KeyCode::Tab | KeyCode::Enter => self.accept_selected(),
            KeyCode::Esc => self.popup.hide(),
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
