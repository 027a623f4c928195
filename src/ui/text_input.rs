//! Single-line text field with end-of-line cursor

use macroquad::prelude::*;

use super::{theme::*, Rect};

/// Result of feeding a frame of keyboard input to a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEvent {
    None,
    Changed,
    /// Enter pressed
    Commit,
    /// Escape pressed
    Cancel,
}

/// Edit buffer of the focused field
#[derive(Debug, Clone, Default)]
pub struct TextField {
    pub text: String,
    blink_timer: f32,
}

impl TextField {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            blink_timer: 0.0,
        }
    }

    pub fn push(&mut self, ch: char) -> bool {
        // Control characters never reach the buffer
        if ch < ' ' || ch == '\u{7f}' {
            return false;
        }
        self.text.push(ch);
        self.blink_timer = 0.0;
        true
    }

    pub fn backspace(&mut self) -> bool {
        self.blink_timer = 0.0;
        self.text.pop().is_some()
    }

    /// Read this frame's keys; chars typed with Ctrl held belong to shortcuts
    pub fn handle_input(&mut self, ctrl: bool) -> FieldEvent {
        self.blink_timer += get_frame_time();

        if is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::KpEnter) {
            return FieldEvent::Commit;
        }
        if is_key_pressed(KeyCode::Escape) {
            return FieldEvent::Cancel;
        }

        let mut changed = false;
        if is_key_pressed(KeyCode::Backspace) {
            changed |= self.backspace();
        }
        while let Some(ch) = get_char_pressed() {
            if !ctrl {
                changed |= self.push(ch);
            }
        }
        if changed {
            FieldEvent::Changed
        } else {
            FieldEvent::None
        }
    }

    pub fn draw(&self, rect: Rect) {
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, BG_COLOR);
        draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.0, ACCENT_COLOR);

        let text_x = rect.x + 6.0;
        let text_y = rect.y + (rect.h + FONT_SIZE_CONTENT * 0.6) / 2.0;
        draw_text(&self.text, text_x, text_y, FONT_SIZE_CONTENT, TEXT_COLOR);

        if (self.blink_timer % 1.0) < 0.5 {
            let width = measure_text(&self.text, None, FONT_SIZE_CONTENT as u16, 1.0).width;
            let cursor_x = text_x + width + 1.0;
            draw_line(cursor_x, rect.y + 4.0, cursor_x, rect.bottom() - 4.0, 1.5, TEXT_COLOR);
        }
    }
}
