//! Cell value model
//!
//! A cell value is the datum assigned to one board position. The board
//! container in JavaScript owns the grid of values and passes them in one
//! at a time; this module only defines what a value is and which value is
//! the reserved special marker.

use serde::{Deserialize, Serialize};

/// Reserved sentinel value. A cell holding this value is displayed as the
/// decorative glyph instead of the literal character.
pub const SPECIAL_MARKER: &str = "*";

/// The value assigned to a single board cell.
///
/// Serializes transparently as a bare string, so the JavaScript side passes
/// plain strings ("0", "*", "X", ...) without any wrapping. An empty string
/// models an empty cell.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct CellValue(String);

impl CellValue {
    /// Create a cell value from any displayable string
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Whether this value is the reserved special marker.
    ///
    /// Exact equality against [`SPECIAL_MARKER`]; no other value is special.
    pub fn is_special(&self) -> bool {
        self.0 == SPECIAL_MARKER
    }

    /// The raw display text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is an empty cell
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
