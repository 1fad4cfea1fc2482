//! User interface rendering
//!
//! This module provides all terminal UI rendering functionality:
//! - `render` - Main rendering entry point
//! - `components` - Header, status bar, and footer
//! - `utils` - Shared utilities

mod components;
mod render;
mod utils;

pub use render::render;
