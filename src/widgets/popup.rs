use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Place a popup directly under a cursor cell, flipping above the cursor
/// row when there is not enough room below. Horizontally clamped so the
/// popup never runs off the frame.
pub fn popup_at_cursor(
    frame_area: Rect,
    cursor_x: u16,
    cursor_y: u16,
    width: u16,
    height: u16,
) -> Rect {
    let width = width.min(frame_area.width);
    let height = height.min(frame_area.height);

    let below = cursor_y.saturating_add(1);
    let room_below = frame_area.bottom().saturating_sub(below);
    let room_above = cursor_y.saturating_sub(frame_area.y);

    let (popup_y, popup_height) = if height <= room_below {
        (below, height)
    } else if height <= room_above {
        (cursor_y - height, height)
    } else if room_below >= room_above {
        (below, room_below)
    } else {
        (frame_area.y, room_above)
    };

    let max_x = frame_area.right().saturating_sub(width).max(frame_area.x);
    let popup_x = cursor_x.min(max_x);

    Rect {
        x: popup_x,
        y: popup_y,
        width,
        height: popup_height,
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
