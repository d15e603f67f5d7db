use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::widgets::popup;

use super::popup_state::MAX_VISIBLE_SUGGESTIONS;
use super::state::App;

// Suggestion popup display constants
const MAX_POPUP_WIDTH: usize = 40;
const POPUP_PADDING: u16 = 4;

impl App {
    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        // Note pane on top, one status line at the bottom
        let layout =
            Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(frame.area());

        let note_area = layout[0];
        let status_area = layout[1];

        frame.render_widget(&self.textarea, note_area);
        self.render_status_line(frame, status_area);

        if self.popup.is_visible() {
            self.render_suggestion_popup(frame, note_area);
        }
    }

    fn render_status_line(&self, frame: &mut Frame, area: Rect) {
        let text = match &self.status {
            Some(status) => status.clone(),
            None => "Esc quit  Ctrl-S save  Tab/Enter accept suggestion".to_string(),
        };
        let line = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(line, area);
    }

    /// Render the suggestion popup anchored at the cursor
    fn render_suggestion_popup(&self, frame: &mut Frame, note_area: Rect) {
        let (items, selected) = self.popup.visible_items();
        if items.is_empty() {
            return;
        }

        // Display width of each "#tag" row, wide characters counted
        // properly so CJK tags don't overflow the border.
        let max_text_width = items
            .iter()
            .map(|tag| tag.width() + 1)
            .max()
            .unwrap_or(10)
            .min(MAX_POPUP_WIDTH);
        let popup_width = (max_text_width as u16) + POPUP_PADDING;
        let popup_height = (items.len().min(MAX_VISIBLE_SUGGESTIONS) as u16) + 2;

        let (cursor_x, cursor_y) = self.cursor_screen_position(note_area);
        let popup_area =
            popup::popup_at_cursor(frame.area(), cursor_x, cursor_y, popup_width, popup_height);

        let rows: Vec<ListItem> = items
            .iter()
            .enumerate()
            .map(|(i, tag)| {
                let line = if i == selected {
                    Line::from(Span::styled(
                        format!("► #{tag}"),
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(Span::styled(
                        format!("  #{tag}"),
                        Style::default().fg(Color::Cyan),
                    ))
                };
                ListItem::new(line)
            })
            .collect();

        let list = List::new(rows).block(
            ratatui::widgets::Block::default()
                .borders(ratatui::widgets::Borders::ALL)
                .title(" Tags ")
                .border_style(Style::default().fg(Color::Cyan)),
        );

        popup::clear_area(frame, popup_area);
        frame.render_widget(list, popup_area);
    }

    /// Screen cell of the cursor inside the bordered textarea.
    pub(crate) fn cursor_screen_position(&self, note_area: Rect) -> (u16, u16) {
        let (row, col) = self.textarea.cursor();
        let prefix_width = self
            .textarea
            .lines()
            .get(row)
            .map(|line| {
                let byte = crate::host::document::byte_at(line, col);
                line[..byte].width()
            })
            .unwrap_or(0);
        let x = note_area.x + 1 + (prefix_width as u16).min(note_area.width.saturating_sub(2));
        let y = note_area.y + 1 + (row as u16).min(note_area.height.saturating_sub(2));
        (x, y)
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
