use egui::{Color32, FontId, Galley, Painter, Pos2, Rect, Shape, Stroke, Vec2};

use super::{GLYPH_COLOR, Surface};
use crate::geometry::{ellipse_points, to_screen};

const ELLIPSE_SEGMENTS: usize = 32;

/// On-screen surface backed by an egui painter.
///
/// `origin` is the screen position of the surface-local (0, 0).
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    origin: Pos2,
    background: Color32,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, origin: Pos2, background: Color32) -> Self {
        Self {
            painter,
            origin,
            background,
        }
    }

    fn screen(&self, local: Pos2) -> Pos2 {
        to_screen(self.origin, local)
    }
}

/// Distance from the top of a laid out galley to its first baseline
pub(crate) fn baseline(galley: &Galley) -> f32 {
    galley
        .rows
        .first()
        .and_then(|row| row.glyphs.first())
        .map_or(galley.size().y, |glyph| glyph.pos.y)
}

impl Surface for PainterSurface<'_> {
    fn clear(&mut self, region: Rect) {
        let region = region.translate(self.origin.to_vec2());
        self.painter.rect_filled(region, 0.0, self.background);
    }

    fn stroke_path(&mut self, points: &[Pos2], width: f32, color: Color32) {
        if points.len() < 2 {
            return;
        }
        let points = points.iter().map(|p| self.screen(*p)).collect();
        self.painter.add(Shape::line(points, Stroke::new(width, color)));
    }

    fn fill_ellipse(&mut self, center: Pos2, radius_x: f32, radius_y: f32, color: Color32) {
        let outline = ellipse_points(self.screen(center), Vec2::new(radius_x, radius_y), ELLIPSE_SEGMENTS);
        self.painter.add(Shape::convex_polygon(outline, color, Stroke::NONE));
    }

    fn draw_glyph(&mut self, text: &str, position: Pos2, size: f32) {
        let galley = self
            .painter
            .layout_no_wrap(text.to_owned(), FontId::proportional(size), GLYPH_COLOR);
        let top_left = self.screen(position) - Vec2::new(0.0, baseline(&galley));
        self.painter.galley(top_left, galley, GLYPH_COLOR);
    }

    fn measure_glyph(&mut self, text: &str, size: f32) -> f32 {
        self.painter
            .layout_no_wrap(text.to_owned(), FontId::proportional(size), GLYPH_COLOR)
            .size()
            .x
    }
}
