use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::effect::{Effect, default_rainbow_palette};
use crate::error::{EngineError, EngineResult};
use crate::tools::Tool;

/// Engine-wide settings. Missing fields take their default values when
/// deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Canvas background, also the eraser color
    pub background: Color32,
    /// Palette the rainbow effect picks from
    pub rainbow_palette: Vec<Color32>,
    /// Color the bulk recolor paints every stroke with
    pub filter_color: Color32,
    /// Smallest allowed stroke width
    pub min_width: f32,
    /// Anchor each new drag at the previous release location instead of
    /// where the drag actually began
    pub anchor_from_release: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            background: Color32::WHITE,
            rainbow_palette: default_rainbow_palette(),
            filter_color: Color32::GRAY,
            min_width: 1.0,
            anchor_from_release: false,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> EngineResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|err| EngineError::InvalidConfig(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> EngineResult<()> {
        if self.rainbow_palette.is_empty() {
            return Err(EngineError::InvalidConfig(
                "rainbow_palette must not be empty".to_owned(),
            ));
        }
        if !(self.min_width.is_finite() && self.min_width > 0.0) {
            return Err(EngineError::InvalidConfig(format!(
                "min_width must be positive, got {}",
                self.min_width
            )));
        }
        Ok(())
    }

    /// Clamp a requested width into the allowed range
    pub fn clamp_width(&self, width: f32) -> f32 {
        if width.is_finite() {
            width.max(self.min_width)
        } else {
            self.min_width
        }
    }
}

/// Tool and style selections, passed with every stroke update
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushSettings {
    pub tool: Tool,
    pub effect: Effect,
    pub eraser: bool,
    pub color: Color32,
    pub width: f32,
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self {
            tool: Tool::Freehand,
            effect: Effect::Normal,
            eraser: false,
            color: Color32::BLACK,
            width: 5.0,
        }
    }
}

impl BrushSettings {
    pub fn with_tool(self, tool: Tool) -> Self {
        Self { tool, ..self }
    }

    pub fn with_effect(self, effect: Effect) -> Self {
        Self { effect, ..self }
    }

    pub fn with_eraser(self, eraser: bool) -> Self {
        Self { eraser, ..self }
    }
}
