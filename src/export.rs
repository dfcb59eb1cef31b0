use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbaImage};
use thiserror::Error;

use crate::config::Settings;
use crate::document::Document;
use crate::surface::{RasterSurface, Surface};

/// Errors that can occur while exporting the drawing
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Failed to write image: {0}")]
    Io(#[from] std::io::Error),

    #[error("Export scale must be at least 1")]
    InvalidScale,

    #[error("Cannot allocate a {width}x{height} image at scale {scale}")]
    InvalidSize { width: u32, height: u32, scale: u32 },
}

/// Rasterize the committed history at the configured export scale.
///
/// Only committed commands are drawn; cursor previews and stickers still
/// being positioned never show up in an export.
pub fn render_export(document: &Document, settings: &Settings) -> Result<RgbaImage, ExportError> {
    if settings.export_scale == 0 {
        return Err(ExportError::InvalidScale);
    }
    let mut surface = RasterSurface::new(
        settings.canvas_width,
        settings.canvas_height,
        settings.export_scale,
    )
    .ok_or(ExportError::InvalidSize {
        width: settings.canvas_width,
        height: settings.canvas_height,
        scale: settings.export_scale,
    })?;
    surface.clear(settings.canvas_rect());
    document.render(&mut surface);
    Ok(surface.into_image())
}

/// Encode an image as PNG bytes
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, ExportError> {
    let mut bytes = Cursor::new(Vec::new());
    image.write_to(&mut bytes, ImageFormat::Png)?;
    Ok(bytes.into_inner())
}

/// Render, encode and write the drawing to `path`
pub fn export_png_to(document: &Document, settings: &Settings, path: impl AsRef<Path>) -> Result<(), ExportError> {
    let path = path.as_ref();
    let image = render_export(document, settings)?;
    let bytes = encode_png(&image)?;
    std::fs::write(path, &bytes)?;
    log::info!(
        "Exported {}x{} drawing ({} commands) to {}",
        image.width(),
        image.height(),
        document.committed().len(),
        path.display()
    );
    Ok(())
}
