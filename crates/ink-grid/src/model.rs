// ABOUTME: Grid data model: rows, panels, nested split groups, path addressing.
// ABOUTME: Lookup, depth computation, leaf enumeration, and integrity checks.

use ink_core::{GridLimits, PanelContent};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type RowId = Uuid;
pub type PanelId = Uuid;

/// Tolerance for percentage-sum invariant checks
pub const SUM_TOLERANCE: f32 = 0.01;

/// Gutter width a fresh grid starts with, in pixels
pub const DEFAULT_GUTTER_WIDTH: f32 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitDirection {
    Horizontal,
    Vertical,
}

/// The panel tree for one page.
///
/// Rows partition the page top to bottom by height percentage; each row holds
/// panels left to right by width percentage; any panel may be subdivided into
/// a nested split group. Engine operations never mutate a grid in place:
/// each takes `&self` and returns a new grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridLayout {
    pub rows: Vec<Row>,
    /// Spacing between panels at render time; carried through unchanged
    pub gutter_width: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub id: RowId,
    /// Percent of page height; row heights in a grid sum to 100
    pub height: f32,
    pub panels: Vec<Panel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub id: PanelId,
    /// Back-reference to the owning row
    pub row_id: RowId,
    /// Percent of row width; panel widths in a row sum to 100
    pub width: f32,
    pub body: PanelBody,
}

/// A nested panel inside a split group. Position is implicit via tree path,
/// so it carries no row reference or width of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildPanel {
    pub id: PanelId,
    /// Percent of the parent group's extent; sibling sizes sum to 100
    pub size: f32,
    pub body: PanelBody,
}

/// A panel is either a content leaf or a split into children, never both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelBody {
    Leaf(PanelContent),
    Split(SplitGroup),
}

impl PanelBody {
    pub fn is_leaf(&self) -> bool {
        matches!(self, PanelBody::Leaf(_))
    }

    pub fn empty_leaf() -> Self {
        PanelBody::Leaf(PanelContent::empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitGroup {
    pub direction: SplitDirection,
    pub panels: Vec<ChildPanel>,
}

/// One structural step from the grid root toward a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathStep {
    Row(usize),
    Panel(usize),
    Child(usize),
}

/// An addressable route to a panel node: `Row(r), Panel(p), Child(c)...`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PanelPath(pub Vec<PathStep>);

impl PanelPath {
    /// Nesting depth of the addressed node: top-level panel = 0,
    /// each split-group level = +1.
    pub fn depth(&self) -> usize {
        self.0
            .iter()
            .filter(|step| matches!(step, PathStep::Child(_)))
            .count()
    }

    pub fn is_top_level(&self) -> bool {
        self.depth() == 0
    }
}

/// Result of a lookup by panel id. `row_index`/`panel_index` are set only
/// for top-level matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelLocation {
    pub path: PanelPath,
    pub row_index: Option<usize>,
    pub panel_index: Option<usize>,
}

/// A reference to either a top-level panel or a nested child panel.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Top(&'a Panel),
    Nested(&'a ChildPanel),
}

impl<'a> NodeRef<'a> {
    pub fn id(&self) -> PanelId {
        match self {
            NodeRef::Top(panel) => panel.id,
            NodeRef::Nested(child) => child.id,
        }
    }

    pub fn body(&self) -> &'a PanelBody {
        match self {
            NodeRef::Top(panel) => &panel.body,
            NodeRef::Nested(child) => &child.body,
        }
    }
}

/// Nesting height below a node: 0 for a leaf, `1 + max(child heights)` for
/// a split group. An empty group never results from engine operations and
/// counts as height 1.
pub fn nested_depth(body: &PanelBody) -> usize {
    match body {
        PanelBody::Leaf(_) => 0,
        PanelBody::Split(group) => {
            1 + group
                .panels
                .iter()
                .map(|child| nested_depth(&child.body))
                .max()
                .unwrap_or(0)
        }
    }
}

impl GridLayout {
    /// A fresh page: one full-height row holding one full-width empty panel.
    pub fn new() -> Self {
        let row_id = Uuid::new_v4();
        Self {
            rows: vec![Row {
                id: row_id,
                height: 100.0,
                panels: vec![Panel {
                    id: Uuid::new_v4(),
                    row_id,
                    width: 100.0,
                    body: PanelBody::empty_leaf(),
                }],
            }],
            gutter_width: DEFAULT_GUTTER_WIDTH,
        }
    }

    /// Depth-first lookup by panel id across rows, panels, and split groups.
    pub fn find_panel(&self, id: PanelId) -> Option<PanelLocation> {
        for (r, row) in self.rows.iter().enumerate() {
            for (p, panel) in row.panels.iter().enumerate() {
                let mut steps = vec![PathStep::Row(r), PathStep::Panel(p)];
                if panel.id == id {
                    return Some(PanelLocation {
                        path: PanelPath(steps),
                        row_index: Some(r),
                        panel_index: Some(p),
                    });
                }
                if find_in_body(&panel.body, id, &mut steps) {
                    return Some(PanelLocation {
                        path: PanelPath(steps),
                        row_index: None,
                        panel_index: None,
                    });
                }
            }
        }
        None
    }

    /// Row and panel index of a top-level panel, ignoring nested nodes.
    pub(crate) fn top_level_index(&self, id: PanelId) -> Option<(usize, usize)> {
        self.rows.iter().enumerate().find_map(|(r, row)| {
            row.panels
                .iter()
                .position(|panel| panel.id == id)
                .map(|p| (r, p))
        })
    }

    /// Rebuild a reference to the node a path addresses.
    pub fn resolve(&self, path: &PanelPath) -> Option<NodeRef<'_>> {
        let mut steps = path.0.iter();
        let row = match steps.next()? {
            PathStep::Row(r) => self.rows.get(*r)?,
            _ => return None,
        };
        let panel = match steps.next()? {
            PathStep::Panel(p) => row.panels.get(*p)?,
            _ => return None,
        };
        let mut node = NodeRef::Top(panel);
        for step in steps {
            let PathStep::Child(c) = step else { return None };
            match node.body() {
                PanelBody::Split(group) => node = NodeRef::Nested(group.panels.get(*c)?),
                PanelBody::Leaf(_) => return None,
            }
        }
        Some(node)
    }

    /// Mutable access to the body of the node a path addresses.
    pub(crate) fn body_at_mut(&mut self, path: &PanelPath) -> Option<&mut PanelBody> {
        let mut steps = path.0.iter();
        let row = match steps.next()? {
            PathStep::Row(r) => self.rows.get_mut(*r)?,
            _ => return None,
        };
        let panel = match steps.next()? {
            PathStep::Panel(p) => row.panels.get_mut(*p)?,
            _ => return None,
        };
        descend_mut(&mut panel.body, steps.as_slice())
    }

    /// Whether a split on this panel is allowed: the panel must exist and its
    /// children would stay within the nesting depth cap.
    pub fn can_split(&self, id: PanelId, limits: &GridLimits) -> bool {
        self.find_panel(id)
            .map(|loc| loc.path.depth() < limits.max_depth)
            .unwrap_or(false)
    }

    /// Ids of all content leaves in reading order: top row to bottom, left
    /// panel to right, descending into split groups before the next sibling.
    pub fn leaf_panel_ids(&self) -> Vec<PanelId> {
        let mut ids = Vec::new();
        for row in &self.rows {
            for panel in &row.panels {
                collect_leaves(panel.id, &panel.body, &mut ids);
            }
        }
        ids
    }

    /// Check the row-height and per-row panel-width sum invariants.
    ///
    /// Diagnostic helper; nested group sums and structural caps are not
    /// checked here.
    pub fn validate_integrity(&self) -> bool {
        let height_sum: f32 = self.rows.iter().map(|row| row.height).sum();
        if (height_sum - 100.0).abs() > SUM_TOLERANCE {
            return false;
        }
        self.rows.iter().all(|row| {
            let width_sum: f32 = row.panels.iter().map(|panel| panel.width).sum();
            (width_sum - 100.0).abs() <= SUM_TOLERANCE
        })
    }
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::new()
    }
}

fn descend_mut<'a>(body: &'a mut PanelBody, steps: &[PathStep]) -> Option<&'a mut PanelBody> {
    let Some((step, rest)) = steps.split_first() else {
        return Some(body);
    };
    let PathStep::Child(c) = step else {
        return None;
    };
    match body {
        PanelBody::Split(group) => descend_mut(&mut group.panels.get_mut(*c)?.body, rest),
        PanelBody::Leaf(_) => None,
    }
}

fn find_in_body(body: &PanelBody, id: PanelId, steps: &mut Vec<PathStep>) -> bool {
    let PanelBody::Split(group) = body else {
        return false;
    };
    for (c, child) in group.panels.iter().enumerate() {
        steps.push(PathStep::Child(c));
        if child.id == id || find_in_body(&child.body, id, steps) {
            return true;
        }
        steps.pop();
    }
    false
}

fn collect_leaves(id: PanelId, body: &PanelBody, out: &mut Vec<PanelId>) {
    match body {
        PanelBody::Leaf(_) => out.push(id),
        PanelBody::Split(group) => {
            for child in &group.panels {
                collect_leaves(child.id, &child.body, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_one_full_panel() {
        let grid = GridLayout::new();
        assert_eq!(grid.rows.len(), 1);
        assert_eq!(grid.rows[0].height, 100.0);
        assert_eq!(grid.rows[0].panels.len(), 1);
        assert_eq!(grid.rows[0].panels[0].width, 100.0);
        assert!(grid.rows[0].panels[0].body.is_leaf());
        assert_eq!(grid.rows[0].panels[0].row_id, grid.rows[0].id);
        assert!(grid.validate_integrity());
    }

    #[test]
    fn test_find_top_level_panel() {
        let grid = GridLayout::new();
        let id = grid.rows[0].panels[0].id;
        let loc = grid.find_panel(id).unwrap();
        assert_eq!(loc.path.0, vec![PathStep::Row(0), PathStep::Panel(0)]);
        assert_eq!(loc.row_index, Some(0));
        assert_eq!(loc.panel_index, Some(0));
        assert!(loc.path.is_top_level());
    }

    #[test]
    fn test_find_missing_panel() {
        let grid = GridLayout::new();
        assert!(grid.find_panel(Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_find_nested_panel_path_and_resolve() {
        let mut grid = GridLayout::new();
        let inner = ChildPanel {
            id: Uuid::new_v4(),
            size: 50.0,
            body: PanelBody::empty_leaf(),
        };
        let deep = ChildPanel {
            id: Uuid::new_v4(),
            size: 50.0,
            body: PanelBody::Split(SplitGroup {
                direction: SplitDirection::Horizontal,
                panels: vec![inner.clone()],
            }),
        };
        grid.rows[0].panels[0].body = PanelBody::Split(SplitGroup {
            direction: SplitDirection::Vertical,
            panels: vec![
                ChildPanel {
                    id: Uuid::new_v4(),
                    size: 50.0,
                    body: PanelBody::empty_leaf(),
                },
                deep,
            ],
        });

        let loc = grid.find_panel(inner.id).unwrap();
        assert_eq!(
            loc.path.0,
            vec![
                PathStep::Row(0),
                PathStep::Panel(0),
                PathStep::Child(1),
                PathStep::Child(0)
            ]
        );
        assert_eq!(loc.path.depth(), 2);
        assert_eq!(loc.row_index, None);
        assert_eq!(loc.panel_index, None);

        let node = grid.resolve(&loc.path).unwrap();
        assert_eq!(node.id(), inner.id);
    }

    #[test]
    fn test_nested_depth() {
        assert_eq!(nested_depth(&PanelBody::empty_leaf()), 0);
        let one = PanelBody::Split(SplitGroup {
            direction: SplitDirection::Horizontal,
            panels: vec![ChildPanel {
                id: Uuid::new_v4(),
                size: 100.0,
                body: PanelBody::empty_leaf(),
            }],
        });
        assert_eq!(nested_depth(&one), 1);
        let two = PanelBody::Split(SplitGroup {
            direction: SplitDirection::Vertical,
            panels: vec![ChildPanel {
                id: Uuid::new_v4(),
                size: 100.0,
                body: one,
            }],
        });
        assert_eq!(nested_depth(&two), 2);
    }

    #[test]
    fn test_leaf_ids_reading_order() {
        let mut grid = GridLayout::new();
        let row_id = grid.rows[0].id;
        let top_left = Uuid::new_v4();
        let bottom_left = Uuid::new_v4();
        let right = Uuid::new_v4();
        grid.rows[0].panels = vec![
            Panel {
                id: Uuid::new_v4(),
                row_id,
                width: 50.0,
                body: PanelBody::Split(SplitGroup {
                    direction: SplitDirection::Vertical,
                    panels: vec![
                        ChildPanel {
                            id: top_left,
                            size: 50.0,
                            body: PanelBody::empty_leaf(),
                        },
                        ChildPanel {
                            id: bottom_left,
                            size: 50.0,
                            body: PanelBody::empty_leaf(),
                        },
                    ],
                }),
            },
            Panel {
                id: right,
                row_id,
                width: 50.0,
                body: PanelBody::empty_leaf(),
            },
        ];

        assert_eq!(grid.leaf_panel_ids(), vec![top_left, bottom_left, right]);
    }

    #[test]
    fn test_validate_integrity_rejects_bad_sums() {
        let mut grid = GridLayout::new();
        grid.rows[0].height = 90.0;
        assert!(!grid.validate_integrity());

        let mut grid = GridLayout::new();
        grid.rows[0].panels[0].width = 99.5;
        assert!(!grid.validate_integrity());
    }

    #[test]
    fn test_can_split_respects_depth_cap() {
        let limits = GridLimits::default();
        let mut grid = GridLayout::new();
        let deep = Uuid::new_v4();
        // Bury a leaf at the depth cap
        let mut body = PanelBody::Split(SplitGroup {
            direction: SplitDirection::Vertical,
            panels: vec![ChildPanel {
                id: deep,
                size: 100.0,
                body: PanelBody::empty_leaf(),
            }],
        });
        for _ in 1..limits.max_depth {
            body = PanelBody::Split(SplitGroup {
                direction: SplitDirection::Vertical,
                panels: vec![ChildPanel {
                    id: Uuid::new_v4(),
                    size: 100.0,
                    body,
                }],
            });
        }
        grid.rows[0].panels[0].body = body;

        let top = grid.rows[0].panels[0].id;
        assert!(grid.can_split(top, &limits));
        assert!(!grid.can_split(deep, &limits));
        assert!(!grid.can_split(Uuid::new_v4(), &limits));
    }

    #[test]
    fn test_grid_serialization_roundtrip() {
        let grid = GridLayout::new();
        let json = serde_json::to_string(&grid).unwrap();
        let restored: GridLayout = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, grid);
    }
}
