//! Render nodes handed to JavaScript
//!
//! This module defines the output structure returned from the cell renderer
//! to JavaScript. A RenderCell carries the display content and CSS classes
//! needed to create the DOM element without any rendering logic on the
//! JavaScript side.

use serde::{Deserialize, Serialize};

/// Styling hook attached to a render node.
///
/// The stylesheet targets cells by class name; keeping the class a closed
/// enum rather than a free-form string prevents drift between this module
/// and the stylesheet.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellClass {
    /// A board cell (borders, size, alignment come from the stylesheet)
    Square,
}

impl CellClass {
    /// Convert to the CSS class name the stylesheet targets
    pub fn as_css(&self) -> &'static str {
        match self {
            CellClass::Square => "square",
        }
    }
}

/// A single cell with all rendering information
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RenderCell {
    /// The text to display inside the cell
    pub content: String,

    /// CSS class names to apply
    pub classes: Vec<String>,
}

impl RenderCell {
    /// Create a render cell tagged with the given class
    pub fn new(content: impl Into<String>, class: CellClass) -> Self {
        Self {
            content: content.into(),
            classes: vec![class.as_css().to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_class_css_name() {
        assert_eq!(CellClass::Square.as_css(), "square");
    }

    #[test]
    fn test_render_cell_carries_class() {
        let cell = RenderCell::new("X", CellClass::Square);
        assert_eq!(cell.classes, vec!["square".to_string()]);
    }
}
