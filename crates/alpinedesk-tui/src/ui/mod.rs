//! Terminal UI module using ratatui.
//!
//! - `render`: frame layout, sidebar, header and overlays
//! - `input`: keyboard event handling
//! - `styles`: colors and text styles
//! - `views`: page content

pub mod input;
pub mod render;
pub mod styles;
pub mod views;
