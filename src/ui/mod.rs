//! Immediate-mode UI for the level editor
//!
//! - Rectangle layout, rebuilt every frame
//! - Macroquad for drawing and input

mod input;
mod layout;
mod rect;
mod text_input;
mod theme;
mod widgets;

pub use input::*;
pub use layout::*;
pub use rect::*;
pub use text_input::*;
