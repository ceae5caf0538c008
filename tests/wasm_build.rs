//! WASM build test
//!
//! This module tests that the WASM module can be built and that the
//! JavaScript-facing render entry point works end to end.

#![cfg(target_arch = "wasm32")]

use board_wasm::api::render_cell;
use board_wasm::RenderCell;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn content_of(result: Result<JsValue, JsValue>) -> String {
    let cell: RenderCell = serde_wasm_bindgen::from_value(result.unwrap()).unwrap();
    cell.content
}

#[wasm_bindgen_test]
fn test_render_cell_special_marker() {
    let result = render_cell(JsValue::from_str("*"));
    assert_eq!(content_of(result), "\u{2731}");
}

#[wasm_bindgen_test]
fn test_render_cell_plain_value() {
    let result = render_cell(JsValue::from_str("X"));
    assert_eq!(content_of(result), "X");
}

#[wasm_bindgen_test]
fn test_render_cell_undefined_is_empty() {
    let result = render_cell(JsValue::UNDEFINED);
    assert_eq!(content_of(result), "");
}

#[wasm_bindgen_test]
fn test_render_cell_null_is_empty() {
    let result = render_cell(JsValue::NULL);
    assert_eq!(content_of(result), "");
}

#[wasm_bindgen_test]
fn test_render_cell_carries_square_class() {
    let result = render_cell(JsValue::from_str("O"));
    let cell: RenderCell = serde_wasm_bindgen::from_value(result.unwrap()).unwrap();
    assert_eq!(cell.classes, vec!["square".to_string()]);
}
