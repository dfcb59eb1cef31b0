use egui::{Color32, Pos2, Rect};

mod painter;
mod raster;

pub use painter::PainterSurface;
pub use raster::RasterSurface;

/// Ink used for sticker glyphs
pub const GLYPH_COLOR: Color32 = Color32::BLACK;

/// The 2D drawing target commands render onto.
///
/// All coordinates are surface-local pixels. Implementations must not keep
/// any drawing state between calls: everything a call needs is passed in.
pub trait Surface {
    /// Wipe every pixel inside `region`
    fn clear(&mut self, region: Rect);

    /// Draw a connected polyline through `points`
    fn stroke_path(&mut self, points: &[Pos2], width: f32, color: Color32);

    fn fill_ellipse(&mut self, center: Pos2, radius_x: f32, radius_y: f32, color: Color32);

    /// Draw `text` with its baseline starting at `position`
    fn draw_glyph(&mut self, text: &str, position: Pos2, size: f32);

    /// Horizontal advance of `text` at `size`
    fn measure_glyph(&mut self, text: &str, size: f32) -> f32;
}
