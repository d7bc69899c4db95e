// ABOUTME: Resolves the panel tree into per-leaf rectangles.
// ABOUTME: Normalized page coordinates, with a pixel-space gutter variant.

use ink_grid::{GridLayout, PanelBody, PanelId, SplitDirection};

/// Rectangle in normalized page coordinates (0.0 to 1.0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn full() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 1.0,
            height: 1.0,
        }
    }
}

/// Rectangle in pixel coordinates after gutter insets
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Rectangles for every content leaf, in reading order.
///
/// The order matches `GridLayout::leaf_panel_ids`, so the nth entry is
/// frame n+1.
pub fn leaf_rects(grid: &GridLayout) -> Vec<(PanelId, Rect)> {
    let mut out = Vec::new();
    let mut y = 0.0;
    for row in &grid.rows {
        let row_height = row.height / 100.0;
        let mut x = 0.0;
        for panel in &row.panels {
            let panel_width = panel.width / 100.0;
            let rect = Rect {
                x,
                y,
                width: panel_width,
                height: row_height,
            };
            collect_rects(panel.id, &panel.body, rect, &mut out);
            x += panel_width;
        }
        y += row_height;
    }
    out
}

/// Pixel-space leaf rectangles with the grid's gutter applied.
///
/// Each leaf is inset by half the gutter on edges shared with another
/// panel; page borders get no inset.
pub fn leaf_rects_with_gutter(
    grid: &GridLayout,
    page_width: f32,
    page_height: f32,
) -> Vec<(PanelId, PixelRect)> {
    let half = grid.gutter_width / 2.0;
    leaf_rects(grid)
        .into_iter()
        .map(|(id, rect)| {
            let mut x = rect.x * page_width;
            let mut y = rect.y * page_height;
            let mut right = (rect.x + rect.width) * page_width;
            let mut bottom = (rect.y + rect.height) * page_height;
            if rect.x > f32::EPSILON {
                x += half;
            }
            if rect.y > f32::EPSILON {
                y += half;
            }
            if rect.x + rect.width < 1.0 - f32::EPSILON {
                right -= half;
            }
            if rect.y + rect.height < 1.0 - f32::EPSILON {
                bottom -= half;
            }
            (
                id,
                PixelRect {
                    x,
                    y,
                    width: (right - x).max(0.0),
                    height: (bottom - y).max(0.0),
                },
            )
        })
        .collect()
}

fn collect_rects(id: PanelId, body: &PanelBody, rect: Rect, out: &mut Vec<(PanelId, Rect)>) {
    match body {
        PanelBody::Leaf(_) => out.push((id, rect)),
        PanelBody::Split(group) => {
            let mut offset = 0.0;
            for child in &group.panels {
                let fraction = child.size / 100.0;
                let child_rect = match group.direction {
                    SplitDirection::Horizontal => Rect {
                        x: rect.x + rect.width * offset,
                        y: rect.y,
                        width: rect.width * fraction,
                        height: rect.height,
                    },
                    SplitDirection::Vertical => Rect {
                        x: rect.x,
                        y: rect.y + rect.height * offset,
                        width: rect.width,
                        height: rect.height * fraction,
                    },
                };
                collect_rects(child.id, &child.body, child_rect, out);
                offset += fraction;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ink_grid::GridLimits;

    fn first_panel_id(grid: &GridLayout) -> PanelId {
        grid.rows[0].panels[0].id
    }

    #[test]
    fn test_single_panel_fills_page() {
        let grid = GridLayout::new();
        let rects = leaf_rects(&grid);
        assert_eq!(rects.len(), 1);
        assert_eq!(rects[0].1, Rect::full());
    }

    #[test]
    fn test_horizontal_split_halves_width() {
        let grid = GridLayout::new();
        let grid = grid.split_horizontal(first_panel_id(&grid), &GridLimits::default());
        let rects = leaf_rects(&grid);
        assert_eq!(rects.len(), 2);
        assert!((rects[0].1.width - 0.5).abs() < 1e-4);
        assert!((rects[1].1.x - 0.5).abs() < 1e-4);
        assert!((rects[1].1.width - 0.5).abs() < 1e-4);
        assert!((rects[0].1.height - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_nested_split_tiles_parent_rect() {
        let limits = GridLimits::default();
        let grid = GridLayout::new();
        let left = first_panel_id(&grid);
        let grid = grid.split_horizontal(left, &limits);
        let grid = grid.split_vertical(left, &limits);

        let rects = leaf_rects(&grid);
        assert_eq!(rects.len(), 3);
        // Top-of-left and bottom-of-left stack inside the left half
        assert!((rects[0].1.height - 0.5).abs() < 1e-4);
        assert!((rects[1].1.y - 0.5).abs() < 1e-4);
        assert!((rects[0].1.width - 0.5).abs() < 1e-4);
        // Leaf areas tile the page
        let area: f32 = rects.iter().map(|(_, r)| r.width * r.height).sum();
        assert!((area - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_order_matches_leaf_enumeration() {
        let limits = GridLimits::default();
        let grid = GridLayout::new();
        let mut g = grid.split_vertical(first_panel_id(&grid), &limits);
        g = g.split_horizontal(g.rows[1].panels[0].id, &limits);
        let ids: Vec<PanelId> = leaf_rects(&g).into_iter().map(|(id, _)| id).collect();
        assert_eq!(ids, g.leaf_panel_ids());
    }

    #[test]
    fn test_gutter_insets_interior_edges_only() {
        let grid = GridLayout::new();
        let grid = grid.split_horizontal(first_panel_id(&grid), &GridLimits::default());
        let rects = leaf_rects_with_gutter(&grid, 800.0, 1200.0);
        let half = grid.gutter_width / 2.0;

        // Left panel: page edge on the left, gutter on the right
        assert_eq!(rects[0].1.x, 0.0);
        assert!((rects[0].1.width - (400.0 - half)).abs() < 1e-3);
        // Right panel: gutter on the left, page edge on the right
        assert!((rects[1].1.x - (400.0 + half)).abs() < 1e-3);
        assert!((rects[1].1.width - (400.0 - half)).abs() < 1e-3);
        // Full height both sides
        assert_eq!(rects[0].1.height, 1200.0);
    }
}
