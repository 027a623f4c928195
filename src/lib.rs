//! BeltRunner level editor
//!
//! Everything except the window lives here so it can be tested headless.

pub mod catalog;
pub mod config;
pub mod editor;
pub mod level;
pub mod motion;
