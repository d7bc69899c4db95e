// ABOUTME: Structural limits for the panel grid.
// ABOUTME: Caps on rows, panels per row, nesting depth, and split-group size.

use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_ROWS: usize = 8;
pub const DEFAULT_MAX_PANELS_PER_ROW: usize = 6;
pub const DEFAULT_MAX_DEPTH: usize = 4;

/// Caps enforced by the grid engine's split operations.
///
/// Callers pass these explicitly so tests can exercise boundary behavior
/// with small values instead of building six-panel rows by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridLimits {
    /// Maximum top-level rows in a grid
    pub max_rows: usize,
    /// Maximum panels side by side in one row
    pub max_panels_per_row: usize,
    /// Maximum nesting depth (top-level panel = 0, each split group = +1)
    pub max_depth: usize,
    /// Maximum children in one nested split group
    pub max_children: usize,
}

impl Default for GridLimits {
    fn default() -> Self {
        Self {
            max_rows: DEFAULT_MAX_ROWS,
            max_panels_per_row: DEFAULT_MAX_PANELS_PER_ROW,
            max_depth: DEFAULT_MAX_DEPTH,
            // Same cap as a row of panels
            max_children: DEFAULT_MAX_PANELS_PER_ROW,
        }
    }
}
