//! Level Editor
//!
//! - Session: open level, entity being edited, point picking, status line
//! - View: playfield <-> screen mapping and the edge placement grid

mod session;
mod view;

pub use session::*;
pub use view::*;
