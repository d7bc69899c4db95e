// ABOUTME: Shared types and configuration for inkgrid.
// ABOUTME: Defines panel content, layers, grid limits, and config file handling.

pub mod config;
pub mod layer;
pub mod limits;

pub use config::{ConfigError, EditorConfig};
pub use layer::{BubbleStyle, Layer, LayerId, LayerKind, PanelContent};
pub use limits::GridLimits;
