//! Parsed rule type.

use serde::Serialize;

use crate::error::ParseError;
use crate::types::SymbolSpec;

/// Outcome of parsing one rule.
pub type ParseResult = std::result::Result<UniCompSpec, ParseError>;

/// A successfully parsed rule: grid dimensions plus an ordered symbol list.
///
/// Symbol order is layer order — the first symbol renders at the bottom,
/// the last on top. A `UniCompSpec` is only ever created by a successful
/// parse and is never mutated in place; transformations such as
/// [`resize_grid`](crate::geometry::resize_grid) parse, compute, and
/// re-serialize into fresh text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UniCompSpec {
    pub grid_width: usize,
    pub grid_height: usize,
    pub symbols: Vec<SymbolSpec>,
    /// Canonical source text rebuilt from the consumed token stream.
    pub raw: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

impl UniCompSpec {
    /// A spec with no symbols yet.
    pub fn new(grid_width: usize, grid_height: usize) -> Self {
        Self {
            grid_width,
            grid_height,
            symbols: Vec::new(),
            raw: String::new(),
            name: None,
            id: None,
            class_name: None,
        }
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.grid_width * self.grid_height
    }

    /// Largest valid linear cell index for this grid.
    pub fn max_index(&self) -> usize {
        self.cell_count().saturating_sub(1)
    }

    pub fn is_square(&self) -> bool {
        self.grid_width == self.grid_height
    }
}
