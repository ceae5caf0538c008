//! Mine Map Board WASM API
//!
//! This module provides the JavaScript-facing API for the board cell
//! renderer. It includes shared utilities for serialization and error
//! handling, plus the render entry point the board container calls once
//! per cell.

pub mod helpers;
pub mod render;

pub use render::render_cell;
