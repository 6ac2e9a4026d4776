// src/config/model.rs

use serde::Deserialize;

/// Layout configuration as read from a TOML file.
///
/// ```toml
/// [canvas]
/// node_width = 160.0
/// node_height = 56.0
/// column_gap = 48.0
/// level_gap = 120.0
/// canvas_width = 1280.0
/// base_offset = 40.0
/// ```
///
/// All fields are optional and default to the values above.
#[derive(Debug, Clone, Deserialize)]
pub struct RawLayoutFile {
    #[serde(default)]
    pub canvas: CanvasSection,
}

/// `[canvas]` section: rendering parameters for the virtual canvas.
///
/// These are tunable display constants, not algorithmic inputs; changing
/// them moves nodes around but never changes levels, columns or edges.
#[derive(Debug, Clone, Deserialize)]
pub struct CanvasSection {
    #[serde(default = "default_node_width")]
    pub node_width: f64,

    #[serde(default = "default_node_height")]
    pub node_height: f64,

    /// Horizontal gap between adjacent columns at the same level.
    #[serde(default = "default_column_gap")]
    pub column_gap: f64,

    /// Vertical gap between the tops of consecutive levels.
    #[serde(default = "default_level_gap")]
    pub level_gap: f64,

    /// Nominal canvas width that each level row is centered within.
    #[serde(default = "default_canvas_width")]
    pub canvas_width: f64,

    /// Vertical offset of level 0 from the canvas top.
    #[serde(default = "default_base_offset")]
    pub base_offset: f64,
}

fn default_node_width() -> f64 {
    160.0
}

fn default_node_height() -> f64 {
    56.0
}

fn default_column_gap() -> f64 {
    48.0
}

fn default_level_gap() -> f64 {
    120.0
}

fn default_canvas_width() -> f64 {
    1280.0
}

fn default_base_offset() -> f64 {
    40.0
}

impl Default for CanvasSection {
    fn default() -> Self {
        Self {
            node_width: default_node_width(),
            node_height: default_node_height(),
            column_gap: default_column_gap(),
            level_gap: default_level_gap(),
            canvas_width: default_canvas_width(),
            base_offset: default_base_offset(),
        }
    }
}

/// Validated layout configuration handed to the layout engine.
///
/// Construct via [`Default`] or `TryFrom<RawLayoutFile>`; the latter is the
/// only place dimension checks happen.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    pub node_width: f64,
    pub node_height: f64,
    pub column_gap: f64,
    pub level_gap: f64,
    pub canvas_width: f64,
    pub base_offset: f64,
}

impl LayoutConfig {
    pub(crate) fn new_unchecked(canvas: CanvasSection) -> Self {
        Self {
            node_width: canvas.node_width,
            node_height: canvas.node_height,
            column_gap: canvas.column_gap,
            level_gap: canvas.level_gap,
            canvas_width: canvas.canvas_width,
            base_offset: canvas.base_offset,
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new_unchecked(CanvasSection::default())
    }
}
