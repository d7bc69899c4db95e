// ABOUTME: Panel content payloads: layer stacks with image, text, and speech-bubble kinds.
// ABOUTME: Opaque to the grid engine, which carries content through mutations untouched.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type LayerId = Uuid;

/// Background color a freshly created panel starts with.
pub const DEFAULT_BACKGROUND: &str = "#ffffff";

/// The content of a leaf panel: an ordered layer stack over a background fill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelContent {
    pub layers: Vec<Layer>,
    pub background_color: String,
}

impl PanelContent {
    /// Empty content with the default white background.
    pub fn empty() -> Self {
        Self {
            layers: Vec::new(),
            background_color: DEFAULT_BACKGROUND.to_string(),
        }
    }

    /// Add a layer on top of the stack, assigning the next z order.
    pub fn push_layer(&mut self, kind: LayerKind) -> LayerId {
        let id = Uuid::new_v4();
        let order = self.layers.iter().map(|l| l.order + 1).max().unwrap_or(0);
        self.layers.push(Layer {
            id,
            kind,
            x: 0.0,
            y: 0.0,
            width: 1.0,
            height: 1.0,
            order,
        });
        id
    }
}

impl Default for PanelContent {
    fn default() -> Self {
        Self::empty()
    }
}

/// A single positioned element inside a panel.
///
/// Position and size are normalized to the panel (0.0 to 1.0), so layers
/// survive panel resizes without adjustment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub id: LayerId,
    pub kind: LayerKind,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Z order within the panel, higher draws on top
    pub order: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LayerKind {
    /// Raster image referenced by URL or data URI
    Image { url: String },
    /// Free-standing caption text
    Text {
        text: String,
        font_size: f32,
        color: String,
    },
    /// Dialogue bubble with a styled outline
    Bubble { text: String, style: BubbleStyle },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BubbleStyle {
    #[default]
    Speech,
    Thought,
    Shout,
}
