// ABOUTME: Panel-grid layout engine for paginated comic and storyboard pages.
// ABOUTME: Rows of panels with recursive split groups, path-addressed mutation.

mod model;
mod ops;

pub use ink_core::GridLimits;
pub use model::{
    nested_depth, ChildPanel, GridLayout, NodeRef, Panel, PanelBody, PanelId, PanelLocation,
    PanelPath, PathStep, Row, RowId, SplitDirection, SplitGroup, DEFAULT_GUTTER_WIDTH,
    SUM_TOLERANCE,
};
