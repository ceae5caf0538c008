//! Cell-level rendering
//!
//! This module maps one cell value to one render node. It is the entire
//! display logic of the board: the special marker is replaced by a
//! decorative glyph, every other value passes through unchanged.

use crate::models::cell::CellValue;
use super::display_list::{CellClass, RenderCell};

/// Glyph shown in place of the special marker (U+2731 HEAVY ASTERISK)
pub const SPECIAL_GLYPH: char = '\u{2731}';

/// Renderer for board cells
pub struct CellRenderer;

impl CellRenderer {
    /// Create a new cell renderer
    pub fn new() -> Self {
        Self
    }

    /// Build the render node for one cell.
    ///
    /// Two branches only: the special marker renders as [`SPECIAL_GLYPH`],
    /// anything else renders as-is. Total over all inputs; an empty value
    /// yields an empty cell. The input is never mutated and no state is
    /// read or written.
    pub fn render(&self, value: &CellValue) -> RenderCell {
        if value.is_special() {
            RenderCell::new(SPECIAL_GLYPH.to_string(), CellClass::Square)
        } else {
            RenderCell::new(value.as_str(), CellClass::Square)
        }
    }
}

impl Default for CellRenderer {
    fn default() -> Self {
        Self::new()
    }
}
