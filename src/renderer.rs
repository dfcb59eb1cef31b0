use egui::{Color32, Context, Painter, Pos2, Rect, Stroke, TextureHandle, Vec2};

use crate::color_picker::gradient_image;
use crate::state::EditorContext;
use crate::surface::PainterSurface;

/// Side length of the marker drawn over the selected picker position
const SELECTOR_SIZE: f32 = 10.0;

pub struct Renderer {
    canvas_background: Color32,
    gradient: Option<TextureHandle>,
    ctx: Context,
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("canvas_background", &self.canvas_background)
            .field("has_gradient", &self.gradient.is_some())
            .finish()
    }
}

impl Renderer {
    pub fn new(ctx: &Context) -> Self {
        Self {
            canvas_background: Color32::WHITE,
            gradient: None,
            ctx: ctx.clone(),
        }
    }

    /// Redraw the whole canvas from the editor's history
    ///
    /// Args:
    ///     painter (egui::Painter): The painter to draw with
    ///     rect (egui::Rect): Screen rectangle of the canvas
    ///     editor (EditorContext): The session to draw
    pub fn render_canvas(&self, painter: &Painter, rect: Rect, editor: &EditorContext) {
        let painter = painter.with_clip_rect(rect);
        let mut surface = PainterSurface::new(&painter, rect.min, self.canvas_background);
        editor.redraw(&mut surface);
        painter.rect_stroke(rect, 0.0, Stroke::new(1.0, Color32::BLACK));
    }

    /// Draw the hue/saturation gradient with the selection marker on top
    pub fn render_picker(&mut self, painter: &Painter, rect: Rect, editor: &EditorContext) {
        let texture = self.gradient_texture(editor.picker().size());
        painter.image(
            texture.id(),
            rect,
            Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
            Color32::WHITE,
        );

        let marker = Rect::from_center_size(
            rect.min + editor.picker().point().to_vec2(),
            Vec2::splat(SELECTOR_SIZE),
        );
        painter.rect_stroke(marker, 0.0, Stroke::new(1.0, editor.picker().color32()));
    }

    /// Solid swatch of the current color
    pub fn render_demo(&self, painter: &Painter, rect: Rect, editor: &EditorContext) {
        painter.rect_filled(rect, 0.0, editor.picker().color32());
        painter.rect_stroke(rect, 0.0, Stroke::new(1.0, Color32::BLACK));
    }

    /// The gradient only depends on the picker size, so it is built once
    fn gradient_texture(&mut self, size: Vec2) -> &TextureHandle {
        let ctx = &self.ctx;
        self.gradient.get_or_insert_with(|| {
            log::debug!("Building color picker gradient {}x{}", size.x, size.y);
            ctx.load_texture(
                "color_picker_gradient",
                gradient_image(size.x as usize, size.y as usize),
                egui::TextureOptions::NEAREST,
            )
        })
    }
}
