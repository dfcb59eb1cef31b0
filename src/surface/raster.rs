use std::sync::OnceLock;

use ab_glyph::{Font, FontVec, PxScale, ScaleFont, point};
use egui::{Color32, Pos2, Rect};
use image::{Rgba, RgbaImage};
use tiny_skia::{
    BlendMode, FillRule, LineCap, LineJoin, Mask, Paint, PathBuilder, Pixmap, Stroke, Transform,
};

use super::{GLYPH_COLOR, Surface};

static GLYPH_FONTS: OnceLock<Vec<FontVec>> = OnceLock::new();

/// Fonts used for glyphs, in fallback order.
///
/// These are the fonts egui bundles for its proportional family, so stickers
/// rasterize with the same faces the on-screen canvas uses.
fn glyph_fonts() -> &'static [FontVec] {
    GLYPH_FONTS.get_or_init(|| {
        let definitions = egui::FontDefinitions::default();
        let names = definitions
            .families
            .get(&egui::FontFamily::Proportional)
            .cloned()
            .unwrap_or_default();

        let fonts: Vec<FontVec> = names
            .iter()
            .filter_map(|name| {
                let data = definitions.font_data.get(name)?;
                match FontVec::try_from_vec(data.font.to_vec()) {
                    Ok(font) => Some(font),
                    Err(err) => {
                        log::warn!("Skipping font {}: {}", name, err);
                        None
                    }
                }
            })
            .collect();

        if fonts.is_empty() {
            log::warn!("No glyph fonts available; stickers will not be rasterized");
        }
        fonts
    })
}

/// First font able to draw `ch`
fn font_for(ch: char) -> Option<&'static FontVec> {
    glyph_fonts().iter().find(|font| font.glyph_id(ch).0 != 0)
}

/// Offscreen surface rasterizing into a tiny-skia pixmap.
///
/// Anti-aliasing is off for paths, so the same command list always yields
/// the same pixels. Surface-local coordinates are multiplied by `scale`.
#[derive(Debug, Clone)]
pub struct RasterSurface {
    pixmap: Pixmap,
    scale: f32,
}

impl RasterSurface {
    /// A transparent surface of `width` x `height` surface-local pixels.
    ///
    /// Returns `None` when the scaled size is zero or too large to allocate.
    pub fn new(width: u32, height: u32, scale: u32) -> Option<Self> {
        let scale = scale.max(1);
        let pixmap = Pixmap::new(width.checked_mul(scale)?, height.checked_mul(scale)?)?;
        Some(Self {
            pixmap,
            scale: scale as f32,
        })
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Unpremultiplied pixel at device coordinates (after scaling)
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let color = self.pixmap.pixel(x, y)?.demultiply();
        Some([color.red(), color.green(), color.blue(), color.alpha()])
    }

    /// True when no pixel has been painted
    pub fn is_blank(&self) -> bool {
        self.pixmap.pixels().iter().all(|pixel| pixel.alpha() == 0)
    }

    pub fn to_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.pixmap.width(), self.pixmap.height(), |x, y| {
            Rgba(self.pixel(x, y).unwrap_or_default())
        })
    }

    pub fn into_image(self) -> RgbaImage {
        self.to_image()
    }

    fn transform(&self) -> Transform {
        Transform::from_scale(self.scale, self.scale)
    }

    fn paint(color: Color32) -> Paint<'static> {
        let [r, g, b, a] = color.to_srgba_unmultiplied();
        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = false;
        paint
    }
}

impl Surface for RasterSurface {
    fn clear(&mut self, region: Rect) {
        let Some(rect) =
            tiny_skia::Rect::from_ltrb(region.min.x, region.min.y, region.max.x, region.max.y)
        else {
            return;
        };
        let mut paint = Self::paint(Color32::BLACK);
        paint.blend_mode = BlendMode::Clear;
        let transform = self.transform();
        self.pixmap.fill_rect(rect, &paint, transform, None);
    }

    fn stroke_path(&mut self, points: &[Pos2], width: f32, color: Color32) {
        let [first, rest @ ..] = points else {
            return;
        };
        if rest.is_empty() {
            return;
        }
        let mut builder = PathBuilder::new();
        builder.move_to(first.x, first.y);
        for point in rest {
            builder.line_to(point.x, point.y);
        }
        let Some(path) = builder.finish() else {
            return;
        };

        let stroke = Stroke {
            width,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Default::default()
        };
        let transform = self.transform();
        self.pixmap
            .stroke_path(&path, &Self::paint(color), &stroke, transform, None);
    }

    fn fill_ellipse(&mut self, center: Pos2, radius_x: f32, radius_y: f32, color: Color32) {
        let Some(oval) = tiny_skia::Rect::from_xywh(
            center.x - radius_x,
            center.y - radius_y,
            radius_x * 2.0,
            radius_y * 2.0,
        ) else {
            return;
        };
        let Some(path) = PathBuilder::from_oval(oval) else {
            return;
        };
        let transform = self.transform();
        self.pixmap
            .fill_path(&path, &Self::paint(color), FillRule::Winding, transform, None);
    }

    fn draw_glyph(&mut self, text: &str, position: Pos2, size: f32) {
        let (width, height) = (self.pixmap.width(), self.pixmap.height());
        let Some(mut mask) = Mask::new(width, height) else {
            return;
        };

        let px = PxScale::from(size * self.scale);
        let baseline = position.y * self.scale;
        let mut caret = position.x * self.scale;
        let mut inked = false;

        // Coverage goes into a mask, then the glyph color is filled through it
        let coverage = mask.data_mut();
        for ch in text.chars() {
            // Characters no font covers (e.g. variation selectors) take no space
            let Some(font) = font_for(ch) else {
                continue;
            };
            let glyph_id = font.glyph_id(ch);
            let glyph = glyph_id.with_scale_and_position(px, point(caret, baseline));
            if let Some(outlined) = font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                outlined.draw(|gx, gy, alpha| {
                    let x = bounds.min.x as i64 + gx as i64;
                    let y = bounds.min.y as i64 + gy as i64;
                    if (0..width as i64).contains(&x) && (0..height as i64).contains(&y) {
                        let cell = &mut coverage[(y * width as i64 + x) as usize];
                        *cell = (*cell).max((alpha.clamp(0.0, 1.0) * 255.0).round() as u8);
                        inked = true;
                    }
                });
            }
            caret += font.as_scaled(px).h_advance(glyph_id);
        }

        if !inked {
            return;
        }
        let Some(full) = tiny_skia::Rect::from_xywh(0.0, 0.0, width as f32, height as f32) else {
            return;
        };
        let mut paint = Self::paint(GLYPH_COLOR);
        paint.anti_alias = true;
        self.pixmap
            .fill_rect(full, &paint, Transform::identity(), Some(&mask));
    }

    fn measure_glyph(&mut self, text: &str, size: f32) -> f32 {
        let px = PxScale::from(size);
        text.chars()
            .filter_map(|ch| font_for(ch).map(|font| font.as_scaled(px).h_advance(font.glyph_id(ch))))
            .sum()
    }
}
