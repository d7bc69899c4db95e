// ABOUTME: Frame numbering for storyboard-style panel labels.
// ABOUTME: Assigns 1-indexed reading-order numbers to content leaves.

use ink_grid::{GridLayout, PanelId};

/// Pair every content leaf with its 1-indexed frame number in reading order.
pub fn frame_numbers(grid: &GridLayout) -> Vec<(PanelId, u32)> {
    grid.leaf_panel_ids()
        .into_iter()
        .zip(1u32..)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ink_grid::GridLimits;

    #[test]
    fn test_frame_numbers_follow_reading_order() {
        let limits = GridLimits::default();
        let grid = GridLayout::new();
        let first = grid.rows[0].panels[0].id;
        let grid = grid.split_horizontal(first, &limits);
        let grid = grid.split_vertical(grid.rows[0].panels[1].id, &limits);

        let frames = frame_numbers(&grid);
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0], (first, 1));
        let numbers: Vec<u32> = frames.iter().map(|(_, n)| *n).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }
}
