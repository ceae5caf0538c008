//! Models module for the mine map board
//!
//! This module contains the data models shared between the board
//! container in JavaScript and the cell rendering code.

pub mod cell;

pub use cell::{CellValue, SPECIAL_MARKER};
