// src/config/validate.rs

use crate::config::model::{LayoutConfig, RawLayoutFile};
use crate::errors::{Result, TaskDagError};

impl TryFrom<RawLayoutFile> for LayoutConfig {
    type Error = crate::errors::TaskDagError;

    fn try_from(raw: RawLayoutFile) -> std::result::Result<Self, Self::Error> {
        validate_canvas(&raw)?;
        Ok(LayoutConfig::new_unchecked(raw.canvas))
    }
}

fn validate_canvas(raw: &RawLayoutFile) -> Result<()> {
    let canvas = &raw.canvas;

    ensure_positive("node_width", canvas.node_width)?;
    ensure_positive("node_height", canvas.node_height)?;
    ensure_positive("column_gap", canvas.column_gap)?;
    ensure_positive("level_gap", canvas.level_gap)?;
    ensure_positive("canvas_width", canvas.canvas_width)?;

    if !canvas.base_offset.is_finite() || canvas.base_offset < 0.0 {
        return Err(TaskDagError::ConfigError(format!(
            "[canvas].base_offset must be finite and >= 0 (got {})",
            canvas.base_offset
        )));
    }

    if canvas.canvas_width < canvas.node_width {
        return Err(TaskDagError::ConfigError(format!(
            "[canvas].canvas_width ({}) must be at least node_width ({})",
            canvas.canvas_width, canvas.node_width
        )));
    }

    Ok(())
}

fn ensure_positive(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(TaskDagError::ConfigError(format!(
            "[canvas].{field} must be finite and > 0 (got {value})"
        )));
    }
    Ok(())
}
