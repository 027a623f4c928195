//! Basic UI widgets

use macroquad::prelude::*;

use super::{theme::*, MouseState, Rect};

/// Draw text vertically centred in a rect
pub fn label(rect: Rect, text: &str, color: Color) {
    let dims = measure_text(text, None, FONT_SIZE_CONTENT as u16, 1.0);
    let y = (rect.y + (rect.h + dims.offset_y) * 0.5).round();
    draw_text(text, rect.x.round(), y, FONT_SIZE_CONTENT, color);
}

/// Draw a text button, returns true if clicked
pub fn button(mouse: &MouseState, rect: Rect, text: &str, enabled: bool) -> bool {
    let hovered = enabled && mouse.inside(&rect);
    let bg = if hovered { BUTTON_HOVER } else { BUTTON_BG };
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, bg);
    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.0, BORDER_COLOR);

    let dims = measure_text(text, None, FONT_SIZE_CONTENT as u16, 1.0);
    let x = (rect.x + (rect.w - dims.width) * 0.5).round();
    let y = (rect.y + (rect.h + dims.offset_y) * 0.5).round();
    let color = if enabled { TEXT_COLOR } else { TEXT_DIM };
    draw_text(text, x, y, FONT_SIZE_CONTENT, color);

    enabled && mouse.clicked(&rect)
}

/// `< value >` picker; returns -1, 0 or +1
pub fn stepper(mouse: &MouseState, rect: Rect, value: &str, enabled: bool) -> i32 {
    let arrow = rect.h;
    let (prev, rest) = rect.take_left(arrow);
    let (middle, next) = rest.take_right(arrow);

    let mut step = 0;
    if button(mouse, prev, "<", enabled) {
        step = -1;
    }
    if button(mouse, next, ">", enabled) {
        step = 1;
    }
    draw_rectangle(middle.x, middle.y, middle.w, middle.h, BG_COLOR);
    label(middle.pad(4.0), value, if enabled { TEXT_COLOR } else { TEXT_DIM });
    step
}

/// Index after stepping through `len` options, wrapping at both ends
///
/// A value not in the list steps to the first or last option.
pub fn step_index(current: Option<usize>, len: usize, step: i32) -> Option<usize> {
    if len == 0 || step == 0 {
        return current;
    }
    Some(match current {
        Some(i) if step > 0 => (i + 1) % len,
        Some(i) => (i + len - 1) % len,
        None if step > 0 => 0,
        None => len - 1,
    })
}

/// Read-only value box, returns true if clicked
pub fn value_box(mouse: &MouseState, rect: Rect, text: &str) -> bool {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, BG_COLOR);
    let border = if mouse.inside(&rect) { BUTTON_HOVER } else { BORDER_COLOR };
    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.0, border);
    label(Rect::new(rect.x + 6.0, rect.y, rect.w - 6.0, rect.h), text, TEXT_COLOR);
    mouse.clicked(&rect)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_index_wraps() {
        assert_eq!(step_index(Some(2), 3, 1), Some(0));
        assert_eq!(step_index(Some(0), 3, -1), Some(2));
        assert_eq!(step_index(Some(1), 3, 0), Some(1));
    }

    #[test]
    fn test_step_index_from_unknown() {
        assert_eq!(step_index(None, 4, 1), Some(0));
        assert_eq!(step_index(None, 4, -1), Some(3));
        assert_eq!(step_index(None, 0, 1), None);
    }
}
