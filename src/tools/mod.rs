use serde::{Deserialize, Serialize};

use crate::command::Style;
use crate::config::Settings;
use egui::Color32;

mod stickers;
pub use stickers::StickerPalette;

/// What a pointer-down on the canvas creates
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tool {
    #[default]
    Brush,
    Sticker { glyph: String },
}

impl Tool {
    pub fn name(&self) -> &str {
        match self {
            Tool::Brush => "Brush",
            Tool::Sticker { glyph } => glyph,
        }
    }

    pub fn is_sticker(&self) -> bool {
        matches!(self, Tool::Sticker { .. })
    }
}

/// Armed tool plus brush size. Not part of the undo history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolState {
    tool: Tool,
    brush_width: f32,
    max_brush_width: f32,
    sticker_font_scale: f32,
}

impl ToolState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            tool: Tool::Brush,
            brush_width: settings.default_brush_width,
            max_brush_width: settings.max_brush_width,
            sticker_font_scale: settings.sticker_font_scale,
        }
    }

    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    pub fn set_tool(&mut self, tool: Tool) {
        if self.tool != tool {
            log::info!("Tool changed: {} -> {}", self.tool.name(), tool.name());
            self.tool = tool;
        }
    }

    /// Arm a sticker for the next placement
    pub fn arm_sticker(&mut self, glyph: impl Into<String>) {
        self.set_tool(Tool::Sticker { glyph: glyph.into() });
    }

    pub fn brush_width(&self) -> f32 {
        self.brush_width
    }

    pub fn max_brush_width(&self) -> f32 {
        self.max_brush_width
    }

    pub fn set_brush_width(&mut self, width: f32) {
        self.brush_width = width.clamp(f32::EPSILON, self.max_brush_width);
    }

    /// Slider position (1..=100) for the current width
    pub fn brush_percent(&self) -> u32 {
        ((self.brush_width * 100.0 / self.max_brush_width).round() as u32).clamp(1, 100)
    }

    /// Scale a slider position (1..=100) to a brush width
    pub fn set_brush_percent(&mut self, percent: u32) {
        let percent = percent.clamp(1, 100);
        self.set_brush_width(self.max_brush_width * percent as f32 / 100.0);
    }

    pub fn sticker_size(&self) -> f32 {
        self.sticker_font_scale * self.brush_width
    }

    /// Style for a command created now with the armed tool
    pub fn style(&self, color: Color32) -> Style {
        match &self.tool {
            Tool::Brush => Style::Stroke {
                width: self.brush_width,
                color,
            },
            Tool::Sticker { glyph } => Style::Sticker {
                glyph: glyph.clone(),
                size: self.sticker_size(),
            },
        }
    }
}
