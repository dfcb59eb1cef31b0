use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading settings
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid settings: {0}")]
    Invalid(String),
}

/// Fixed parameters of a painting session.
///
/// Every field has a default, so a settings file only needs to name the
/// values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Width of the drawing surface in surface-local pixels
    pub canvas_width: u32,
    /// Height of the drawing surface in surface-local pixels
    pub canvas_height: u32,
    /// Factor applied when rasterizing the drawing for export
    pub export_scale: u32,
    pub max_brush_width: f32,
    pub default_brush_width: f32,
    /// Sticker size is this factor times the brush width
    pub sticker_font_scale: f32,
    pub recent_colors_capacity: usize,
    pub picker_width: u32,
    pub picker_height: u32,
    pub default_stickers: Vec<String>,
    pub export_file_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas_width: 256,
            canvas_height: 256,
            export_scale: 4,
            max_brush_width: 20.0,
            default_brush_width: 5.0,
            sticker_font_scale: 12.0,
            recent_colors_capacity: 10,
            picker_width: 100,
            picker_height: 100,
            default_stickers: vec!["🌎".to_owned(), "🪐".to_owned(), "⭐️".to_owned()],
            export_file_name: "image.png".to_owned(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON, validating the result
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json_str(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(ConfigError::Invalid(format!(
                "canvas size must be non-zero, got {}x{}",
                self.canvas_width, self.canvas_height
            )));
        }
        if self.picker_width == 0 || self.picker_height == 0 {
            return Err(ConfigError::Invalid(format!(
                "color picker size must be non-zero, got {}x{}",
                self.picker_width, self.picker_height
            )));
        }
        if self.export_scale == 0 {
            return Err(ConfigError::Invalid("export scale must be at least 1".to_owned()));
        }
        if self.export_size().is_none() {
            return Err(ConfigError::Invalid(format!(
                "canvas {}x{} at export scale {} is too large",
                self.canvas_width, self.canvas_height, self.export_scale
            )));
        }
        if !(self.max_brush_width > 0.0) || !(self.default_brush_width > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "brush widths must be positive, got max {} and default {}",
                self.max_brush_width, self.default_brush_width
            )));
        }
        if self.default_brush_width > self.max_brush_width {
            return Err(ConfigError::Invalid(format!(
                "default brush width {} exceeds maximum {}",
                self.default_brush_width, self.max_brush_width
            )));
        }
        if !(self.sticker_font_scale > 0.0) {
            return Err(ConfigError::Invalid("sticker font scale must be positive".to_owned()));
        }
        if self.recent_colors_capacity == 0 {
            return Err(ConfigError::Invalid("recent colors capacity must be at least 1".to_owned()));
        }
        Ok(())
    }

    /// Bounds of the drawing surface in surface-local coordinates
    pub fn canvas_rect(&self) -> egui::Rect {
        egui::Rect::from_min_size(
            egui::Pos2::ZERO,
            egui::vec2(self.canvas_width as f32, self.canvas_height as f32),
        )
    }

    /// Pixel size of an exported image, or `None` if it does not fit in `u32`
    pub fn export_size(&self) -> Option<(u32, u32)> {
        Some((
            self.canvas_width.checked_mul(self.export_scale)?,
            self.canvas_height.checked_mul(self.export_scale)?,
        ))
    }

    pub fn picker_size(&self) -> egui::Vec2 {
        egui::vec2(self.picker_width as f32, self.picker_height as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.canvas_rect().size(), egui::vec2(256.0, 256.0));
        assert_eq!(settings.default_stickers.len(), 3);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json_str(r#"{ "export_scale": 2 }"#).unwrap();
        assert_eq!(settings.export_scale, 2);
        assert_eq!(settings.canvas_width, 256);
        assert_eq!(settings.recent_colors_capacity, 10);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let result = Settings::from_json_str(r#"{ "canvas_width": 0 }"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));

        let result = Settings::from_json_str(r#"{ "default_brush_width": 50.0 }"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));

        let result = Settings::from_json_str("not json");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_export_size_overflow_rejected() {
        let settings = Settings::default();
        assert_eq!(settings.export_size(), Some((1024, 1024)));

        let result = Settings::from_json_str(r#"{ "canvas_width": 4000000000, "export_scale": 4 }"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = Settings::load("/definitely/not/here/settings.json");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
