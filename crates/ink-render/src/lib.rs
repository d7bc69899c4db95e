// ABOUTME: Rendering boundary for the panel grid.
// ABOUTME: Resolves grids into per-leaf rectangles and reading-order frame numbers.

mod frames;
mod rect;

pub use frames::frame_numbers;
pub use rect::{leaf_rects, leaf_rects_with_gutter, PixelRect, Rect};
