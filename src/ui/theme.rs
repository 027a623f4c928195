//! UI Theme - colors and sizes shared by the editor panels

use macroquad::prelude::Color;

// =============================================================================
// Base UI Colors
// =============================================================================

pub const BG_COLOR: Color = Color::new(0.11, 0.11, 0.13, 1.0);

/// Menu bar and panel headers
pub const HEADER_COLOR: Color = Color::new(0.15, 0.15, 0.18, 1.0);

pub const TEXT_COLOR: Color = Color::new(0.8, 0.8, 0.85, 1.0);

pub const TEXT_DIM: Color = Color::new(0.4, 0.4, 0.45, 1.0);

/// Accent for focus and selection
pub const ACCENT_COLOR: Color = Color::new(0.0, 0.75, 0.9, 1.0);

pub const BUTTON_BG: Color = Color::new(0.196, 0.196, 0.216, 1.0);

pub const BUTTON_HOVER: Color = Color::new(0.235, 0.235, 0.275, 1.0);

pub const BORDER_COLOR: Color = Color::new(0.314, 0.314, 0.314, 1.0);

pub const ROW_HIGHLIGHT: Color = Color::new(0.2, 0.25, 0.3, 1.0);

// =============================================================================
// Playfield
// =============================================================================

/// Off-field margin
pub const MARGIN_COLOR: Color = Color::new(0.07, 0.07, 0.09, 1.0);

pub const FIELD_COLOR: Color = Color::new(0.03, 0.04, 0.08, 1.0);

pub const FIELD_BORDER: Color = Color::new(0.35, 0.35, 0.45, 1.0);

pub const ENTITY_COLOR: Color = Color::new(0.55, 0.6, 0.7, 1.0);

pub const ENTITY_EDITING: Color = Color::new(1.0, 0.75, 0.2, 1.0);

pub const MOTION_COLOR: Color = Color::new(0.3, 0.8, 0.45, 0.8);

// =============================================================================
// Font Sizes
// =============================================================================

pub const FONT_SIZE_HEADER: f32 = 16.0;

pub const FONT_SIZE_CONTENT: f32 = 14.0;

pub const FONT_SIZE_SMALL: f32 = 12.0;
