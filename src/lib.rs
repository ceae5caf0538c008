//! Mine Map Board WASM Module
//!
//! This is the WASM module for the mine map board client. The board
//! container in JavaScript owns the grid of cell values and asks this
//! module for one render node per cell; it then places the nodes in
//! rows and columns and styles them via the stylesheet.

pub mod models;
pub mod html_layout;
pub mod api;

// Re-export commonly used types
pub use models::cell::{CellValue, SPECIAL_MARKER};
pub use html_layout::{CellRenderer, CellClass, RenderCell, SPECIAL_GLYPH};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Mine map board WASM module initialized");
}
