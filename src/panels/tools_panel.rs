use crate::PaintApp;
use crate::app::APP_NAME;
use crate::tools::Tool;

pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("tools_panel").show(ctx, |ui| {
        ui.heading(APP_NAME);

        // History and export
        ui.horizontal(|ui| {
            if ui.button("Clear").clicked() {
                app.clear();
            }

            let can_undo = app.editor.document().can_undo();
            let can_redo = app.editor.document().can_redo();
            if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                app.undo();
            }
            if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                app.redo();
            }

            if ui.button("Export").clicked() {
                app.export();
            }
        });

        // Stickers
        ui.horizontal_wrapped(|ui| {
            let glyphs = app.editor.stickers().glyphs().to_vec();
            for glyph in &glyphs {
                let armed = matches!(app.editor.tools().tool(), Tool::Sticker { glyph: armed } if armed == glyph);
                if ui.selectable_label(armed, glyph.as_str()).clicked() {
                    app.editor.arm_sticker(glyph);
                }
            }

            ui.add(
                egui::TextEdit::singleline(&mut app.new_sticker_name)
                    .hint_text(":D")
                    .desired_width(60.0),
            );
            if ui.button("Add Sticker").clicked() && app.editor.add_sticker(&app.new_sticker_name) {
                app.new_sticker_name.clear();
            }
        });

        // Brush size
        ui.horizontal(|ui| {
            let brush_armed = !app.editor.tools().tool().is_sticker();
            if ui.selectable_label(brush_armed, "🖌 Brush").clicked() {
                app.editor.select_brush();
            }

            let mut percent = app.editor.tools().brush_percent();
            if ui
                .add(egui::Slider::new(&mut percent, 1..=100).show_value(false))
                .changed()
            {
                app.editor.set_brush_percent(percent);
            }
            ui.label(format!("Brush/Sticker Size: x{}", app.editor.tools().brush_width()));
        });

        if let Some(status) = &app.status {
            ui.label(status.as_str());
        }
    });
}
