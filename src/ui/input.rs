//! Input state for UI interaction

use macroquad::prelude::*;

use super::Rect;

/// Mouse state sampled once per frame
#[derive(Debug, Clone, Copy, Default)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub left_pressed: bool,
    pub right_pressed: bool,
    pub scroll: f32,
}

impl MouseState {
    pub fn sample() -> Self {
        let (x, y) = mouse_position();
        Self {
            x,
            y,
            left_pressed: is_mouse_button_pressed(MouseButton::Left),
            right_pressed: is_mouse_button_pressed(MouseButton::Right),
            scroll: mouse_wheel().1,
        }
    }

    pub fn inside(&self, rect: &Rect) -> bool {
        rect.contains(self.x, self.y)
    }

    /// Check if mouse just clicked inside a rect
    pub fn clicked(&self, rect: &Rect) -> bool {
        self.left_pressed && self.inside(rect)
    }
}

/// Keyboard modifiers held this frame
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
}

impl Modifiers {
    pub fn sample() -> Self {
        Self {
            ctrl: is_key_down(KeyCode::LeftControl)
                || is_key_down(KeyCode::RightControl)
                || is_key_down(KeyCode::LeftSuper)
                || is_key_down(KeyCode::RightSuper),
            shift: is_key_down(KeyCode::LeftShift) || is_key_down(KeyCode::RightShift),
        }
    }
}
