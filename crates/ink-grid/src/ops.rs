// ABOUTME: Grid mutation operations: split, merge, resize, delete-row, set-content.
// ABOUTME: Pure immutable updates; inapplicable calls return the grid unchanged.

use ink_core::{GridLimits, PanelContent};
use uuid::Uuid;

use crate::model::{
    ChildPanel, GridLayout, Panel, PanelBody, PanelId, PanelPath, Row, RowId, SplitDirection,
    SplitGroup,
};

impl GridLayout {
    /// Add a panel to the right of the target, sharing its space evenly.
    ///
    /// Prefers growing the row; once the row is at the panel cap (or the
    /// target is nested) the target itself is subdivided instead. Returns
    /// the grid unchanged when the target is missing or depth-capped.
    pub fn split_horizontal(&self, id: PanelId, limits: &GridLimits) -> GridLayout {
        let Some(loc) = self.find_panel(id) else {
            return self.clone();
        };
        if !self.can_split(id, limits) {
            return self.clone();
        }
        if let (Some(r), Some(p)) = (loc.row_index, loc.panel_index) {
            if self.rows[r].panels.len() < limits.max_panels_per_row {
                let mut next = self.clone();
                let row = &mut next.rows[r];
                let half = row.panels[p].width / 2.0;
                row.panels[p].width = half;
                row.panels.insert(
                    p + 1,
                    Panel {
                        id: Uuid::new_v4(),
                        row_id: row.id,
                        width: half,
                        body: PanelBody::empty_leaf(),
                    },
                );
                return next;
            }
        }
        self.nested_split(&loc.path, SplitDirection::Horizontal, limits)
    }

    /// Stack a new region below the target.
    ///
    /// Splits the row itself only when the target is alone in it, so sibling
    /// panels never change height; otherwise the target is subdivided.
    pub fn split_vertical(&self, id: PanelId, limits: &GridLimits) -> GridLayout {
        let Some(loc) = self.find_panel(id) else {
            return self.clone();
        };
        if !self.can_split(id, limits) {
            return self.clone();
        }
        if let Some(r) = loc.row_index {
            if self.rows[r].panels.len() == 1 && self.rows.len() < limits.max_rows {
                let mut next = self.clone();
                let half = next.rows[r].height / 2.0;
                next.rows[r].height = half;
                let row_id = Uuid::new_v4();
                next.rows.insert(
                    r + 1,
                    Row {
                        id: row_id,
                        height: half,
                        panels: vec![Panel {
                            id: Uuid::new_v4(),
                            row_id,
                            width: 100.0,
                            body: PanelBody::empty_leaf(),
                        }],
                    },
                );
                return next;
            }
        }
        self.nested_split(&loc.path, SplitDirection::Vertical, limits)
    }

    /// Subdivide the node at `path` in the given direction.
    ///
    /// An existing group in the same direction gains one sibling by halving
    /// its last child, leaving earlier siblings' sizes stable. Anything else
    /// becomes a fresh 50/50 group whose first child inherits the node's
    /// content. A same-direction group already at the child cap is left
    /// unchanged.
    fn nested_split(
        &self,
        path: &PanelPath,
        direction: SplitDirection,
        limits: &GridLimits,
    ) -> GridLayout {
        let mut next = self.clone();
        let Some(body) = next.body_at_mut(path) else {
            return self.clone();
        };
        match body {
            PanelBody::Split(group) if group.direction == direction => {
                if group.panels.len() >= limits.max_children {
                    return self.clone();
                }
                let Some(last) = group.panels.last_mut() else {
                    return self.clone();
                };
                last.size /= 2.0;
                let size = last.size;
                group.panels.push(ChildPanel {
                    id: Uuid::new_v4(),
                    size,
                    body: PanelBody::empty_leaf(),
                });
            }
            _ => {
                let carried = match body {
                    PanelBody::Leaf(content) => content.clone(),
                    // Re-splitting across the other direction drops the old
                    // subtree; the node itself held no content
                    PanelBody::Split(_) => PanelContent::empty(),
                };
                *body = PanelBody::Split(SplitGroup {
                    direction,
                    panels: vec![
                        ChildPanel {
                            id: Uuid::new_v4(),
                            size: 50.0,
                            body: PanelBody::Leaf(carried),
                        },
                        ChildPanel {
                            id: Uuid::new_v4(),
                            size: 50.0,
                            body: PanelBody::empty_leaf(),
                        },
                    ],
                });
            }
        }
        next
    }

    /// Merge two row-adjacent top-level panels into one.
    ///
    /// The lower-index panel absorbs the other's width and keeps its own
    /// content; the second panel's content is discarded. Nested panels,
    /// cross-row pairs, and non-adjacent pairs are rejected unchanged.
    pub fn merge_panels(&self, first: PanelId, second: PanelId) -> GridLayout {
        let Some((r1, p1)) = self.top_level_index(first) else {
            return self.clone();
        };
        let Some((r2, p2)) = self.top_level_index(second) else {
            return self.clone();
        };
        if r1 != r2 || p1.abs_diff(p2) != 1 {
            return self.clone();
        }
        let (keep, gone) = (p1.min(p2), p1.max(p2));
        let mut next = self.clone();
        let row = &mut next.rows[r1];
        let absorbed = row.panels.remove(gone);
        let target = &mut row.panels[keep];
        target.width += absorbed.width;
        if !target.body.is_leaf() {
            target.body = PanelBody::empty_leaf();
        }
        next
    }

    /// Set every panel width in a row from raw gesture values, normalized
    /// to sum to 100. Unchanged on unknown row or length mismatch.
    pub fn resize_row_panels(&self, row_id: RowId, widths: &[f32]) -> GridLayout {
        let Some(r) = self.rows.iter().position(|row| row.id == row_id) else {
            return self.clone();
        };
        if widths.len() != self.rows[r].panels.len() {
            return self.clone();
        }
        let Some(normalized) = normalize(widths) else {
            return self.clone();
        };
        let mut next = self.clone();
        for (panel, width) in next.rows[r].panels.iter_mut().zip(normalized) {
            panel.width = width;
        }
        next
    }

    /// Set every row height from raw values, normalized to sum to 100.
    /// Unchanged on length mismatch.
    pub fn resize_rows(&self, heights: &[f32]) -> GridLayout {
        if heights.len() != self.rows.len() {
            return self.clone();
        }
        let Some(normalized) = normalize(heights) else {
            return self.clone();
        };
        let mut next = self.clone();
        for (row, height) in next.rows.iter_mut().zip(normalized) {
            row.height = height;
        }
        next
    }

    /// Set the child sizes of a subdivided panel from raw values, normalized
    /// to sum to 100. Unchanged unless the panel exists, is subdivided, and
    /// the value count matches its children.
    pub fn resize_nested(&self, parent_id: PanelId, sizes: &[f32]) -> GridLayout {
        let Some(loc) = self.find_panel(parent_id) else {
            return self.clone();
        };
        let Some(node) = self.resolve(&loc.path) else {
            return self.clone();
        };
        let PanelBody::Split(group) = node.body() else {
            return self.clone();
        };
        if sizes.len() != group.panels.len() {
            return self.clone();
        }
        let Some(normalized) = normalize(sizes) else {
            return self.clone();
        };
        let mut next = self.clone();
        if let Some(PanelBody::Split(group)) = next.body_at_mut(&loc.path) {
            for (child, size) in group.panels.iter_mut().zip(normalized) {
                child.size = size;
            }
        }
        next
    }

    /// Remove a row and share its height equally among the remaining rows.
    /// The last row cannot be deleted.
    pub fn delete_row(&self, row_id: RowId) -> GridLayout {
        if self.rows.len() <= 1 {
            return self.clone();
        }
        let Some(r) = self.rows.iter().position(|row| row.id == row_id) else {
            return self.clone();
        };
        let mut next = self.clone();
        let removed = next.rows.remove(r);
        let share = removed.height / next.rows.len() as f32;
        for row in &mut next.rows {
            row.height += share;
        }
        next
    }

    /// Replace a panel's content at any depth, collapsing a split body if
    /// one is present.
    pub fn set_panel_content(&self, id: PanelId, content: PanelContent) -> GridLayout {
        let Some(loc) = self.find_panel(id) else {
            return self.clone();
        };
        let mut next = self.clone();
        if let Some(body) = next.body_at_mut(&loc.path) {
            *body = PanelBody::Leaf(content);
        }
        next
    }
}

/// Scale raw values so they sum to 100: `v / sum * 100`. Requires a
/// finite, positive sum.
fn normalize(raw: &[f32]) -> Option<Vec<f32>> {
    let sum: f32 = raw.iter().sum();
    if !sum.is_finite() || sum <= 0.0 {
        return None;
    }
    Some(raw.iter().map(|v| v / sum * 100.0).collect())
}
