use egui::{Sense, Vec2};

use crate::PaintApp;

/// Side length of one recent-color swatch
const RECENT_SWATCH_SIZE: f32 = 20.0;

pub fn color_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::SidePanel::right("color_panel")
        .resizable(false)
        .show(ctx, |ui| {
            ui.heading("Color");

            // Hue/saturation picker: record on press and release, follow drags
            let size = app.editor.picker().size();
            let (response, painter) = ui.allocate_painter(size, Sense::click_and_drag());
            if let Some(pos) = response.interact_pointer_pos() {
                let local = (pos - response.rect.min).to_pos2();
                if response.clicked() || response.drag_started() || response.drag_stopped() {
                    app.editor.pick_color(local);
                } else if response.dragged() {
                    app.editor.preview_color(local);
                }
            }
            app.renderer.render_picker(&painter, response.rect, &app.editor);

            let mut lightness = app.editor.picker().lightness();
            let slider = ui.add(egui::Slider::new(&mut lightness, 0..=100).text("Lightness"));
            if slider.changed() {
                if slider.dragged() {
                    app.editor.preview_lightness(lightness);
                } else {
                    app.editor.set_lightness(lightness);
                }
            }
            if slider.drag_stopped() {
                app.editor.set_lightness(lightness);
            }

            let (demo, painter) = ui.allocate_painter(size, Sense::hover());
            app.renderer.render_demo(&painter, demo.rect, &app.editor);
            ui.label(app.editor.picker().current().to_string());

            ui.separator();
            ui.label("Recent colors");
            let picker_size = app.editor.picker().size();
            let recent = app.editor.picker().recent().entries().to_vec();
            ui.horizontal_wrapped(|ui| {
                for color in recent {
                    let (swatch, painter) = ui.allocate_painter(Vec2::splat(RECENT_SWATCH_SIZE), Sense::click());
                    painter.rect_filled(swatch.rect, 0.0, color.hsl(picker_size).to_color32());
                    let swatch = swatch.on_hover_text(color.hsl(picker_size).to_string());
                    if swatch.clicked() {
                        app.editor.restore_color(color);
                    }
                }
            });
        });
}
