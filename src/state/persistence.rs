use serde::{Deserialize, Serialize};

use super::EditorContext;
use crate::color_picker::ColorPicker;
use crate::tools::{StickerPalette, ToolState};

/// The parts of a session worth keeping across restarts.
///
/// The drawing itself is deliberately absent: only tool settings, the
/// sticker palette and the color selection are saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorSnapshot {
    pub tools: ToolState,
    pub stickers: StickerPalette,
    pub picker: ColorPicker,
    /// Version of the application when the snapshot was taken
    pub version: String,
}

impl EditorSnapshot {
    /// Take a snapshot of the current editor context
    pub fn new(ctx: &EditorContext) -> Self {
        Self {
            tools: ctx.tools().clone(),
            stickers: ctx.stickers().clone(),
            picker: ctx.picker().clone(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Apply this snapshot to an editor context
    pub fn restore(self, ctx: &mut EditorContext) {
        if self.version != env!("CARGO_PKG_VERSION") {
            log::warn!(
                "Snapshot version {} differs from current version {}",
                self.version,
                env!("CARGO_PKG_VERSION")
            );
        }
        ctx.restore_parts(self.tools, self.stickers, self.picker);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use egui::Pos2;

    #[test]
    fn test_restore_tools_and_color() {
        let mut editor = EditorContext::new(Settings::default());
        editor.set_brush_percent(50);
        editor.arm_sticker("🪐");
        editor.add_sticker(":D");
        editor.pick_color(Pos2::new(50.0, 50.0));

        let json = serde_json::to_string(&EditorSnapshot::new(&editor)).unwrap();
        let snapshot: EditorSnapshot = serde_json::from_str(&json).unwrap();

        let mut restored = EditorContext::new(Settings::default());
        snapshot.restore(&mut restored);
        assert_eq!(restored.tools(), editor.tools());
        assert_eq!(restored.stickers(), editor.stickers());
        assert_eq!(restored.picker(), editor.picker());
        assert!(restored.document().is_empty());
    }

    #[test]
    fn test_picker_of_other_size_is_ignored() {
        let mut editor = EditorContext::new(Settings::default());
        editor.pick_color(Pos2::new(50.0, 50.0));
        let snapshot = EditorSnapshot::new(&editor);

        let settings = Settings {
            picker_width: 200,
            ..Settings::default()
        };
        let mut restored = EditorContext::new(settings);
        snapshot.restore(&mut restored);
        assert!(restored.picker().recent().is_empty());
        assert_eq!(restored.picker().size(), egui::Vec2::new(200.0, 100.0));
    }

    #[test]
    fn test_recent_capacity_follows_settings() {
        let mut editor = EditorContext::new(Settings::default());
        for i in 0..6 {
            editor.pick_color(Pos2::new(i as f32 * 10.0, 50.0));
        }
        let snapshot = EditorSnapshot::new(&editor);

        let settings = Settings {
            recent_colors_capacity: 3,
            ..Settings::default()
        };
        let mut restored = EditorContext::new(settings);
        snapshot.restore(&mut restored);
        assert_eq!(restored.picker().recent().capacity(), 3);
        assert_eq!(restored.picker().recent().entries(), &editor.picker().recent().entries()[..3]);
    }

    #[test]
    fn test_zero_capacity_in_saved_state_is_replaced() {
        let editor = EditorContext::new(Settings::default());
        let mut json = serde_json::to_value(EditorSnapshot::new(&editor)).unwrap();
        json["picker"]["recent"]["capacity"] = serde_json::json!(0);
        let snapshot: EditorSnapshot = serde_json::from_value(json).unwrap();

        let mut restored = EditorContext::new(Settings::default());
        snapshot.restore(&mut restored);
        assert_eq!(restored.picker().recent().capacity(), 10);

        restored.pick_color(Pos2::new(10.0, 10.0));
        assert_eq!(restored.picker().recent().len(), 1);
    }
}
