//! Cell render entry point for JavaScript
//!
//! The board container calls this once per cell with the cell's assigned
//! value and receives a render node to place into the grid layout.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, serialize};
use crate::html_layout::CellRenderer;
use crate::models::cell::CellValue;

/// Render one board cell.
///
/// Accepts the cell's value as a plain string from JavaScript and returns
/// a render node with the display content and CSS classes. `null` and
/// `undefined` are treated as an empty cell, so the operation never fails
/// on missing values.
#[wasm_bindgen(js_name = renderCell)]
pub fn render_cell(value: JsValue) -> Result<JsValue, JsValue> {
    let value: CellValue = if value.is_null() || value.is_undefined() {
        CellValue::default()
    } else {
        deserialize(value, "Failed to deserialize cell value")?
    };

    let cell = CellRenderer::new().render(&value);

    serialize(&cell, "Failed to serialize render cell")
}
