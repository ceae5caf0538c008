//! HTML Cell Rendering
//!
//! This module produces the render nodes for HTML/DOM rendering. Each node
//! carries the display content and CSS classes needed for JavaScript to
//! render one board cell without any further computation.

pub mod cell;
pub mod display_list;

pub use cell::{CellRenderer, SPECIAL_GLYPH};
pub use display_list::{CellClass, RenderCell};
