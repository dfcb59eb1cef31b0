use egui::Sense;

use crate::PaintApp;

pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let size = app.editor.settings().canvas_rect().size();
        let (response, painter) = ui.allocate_painter(size, Sense::click_and_drag());
        let canvas_rect = response.rect;

        // Handle input
        for event in app.input.process_input(ctx, canvas_rect) {
            app.editor.handle_input(event);
        }

        // The cursor preview replaces the system cursor over the canvas
        if response.hovered() {
            ctx.set_cursor_icon(egui::CursorIcon::None);
        }

        // Render the canvas
        app.renderer.render_canvas(&painter, canvas_rect, &app.editor);

        let document = app.editor.document();
        ui.label(format!(
            "Commands: {}  Redo: {}  Redraws: {}",
            document.committed().len(),
            document.redo_buffer().len(),
            app.redraws.count()
        ));
    });
}
