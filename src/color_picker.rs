use egui::{Color32, ColorImage, Pos2, Vec2};
use serde::{Deserialize, Serialize};

use crate::color::Hsl;

/// Lightness used when drawing the hue/saturation gradient swatch
pub const GRADIENT_LIGHTNESS: u8 = 50;

/// A color the user has selected, remembered by where it was picked
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecentColor {
    /// Position inside the picker widget
    pub point: Pos2,
    pub lightness: u8,
}

impl RecentColor {
    pub fn new(point: Pos2, lightness: u8) -> Self {
        Self { point, lightness }
    }

    /// Resolve to a concrete color for a picker of the given size
    pub fn hsl(&self, picker_size: Vec2) -> Hsl {
        let (hue, saturation) = hue_saturation_at(self.point, picker_size);
        Hsl::new(hue, saturation, self.lightness)
    }
}

/// Bounded most-recently-used list of colors, newest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentColors {
    entries: Vec<RecentColor>,
    capacity: usize,
}

impl RecentColors {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    /// Move `color` to the front, inserting it if it is not present yet.
    /// Returns false when the list is unchanged (the color was already first).
    pub fn record(&mut self, color: RecentColor) -> bool {
        match self.entries.iter().position(|entry| *entry == color) {
            Some(0) => false,
            Some(index) => {
                let existing = self.entries.remove(index);
                self.entries.insert(0, existing);
                true
            }
            None => {
                self.entries.insert(0, color);
                self.entries.truncate(self.capacity);
                true
            }
        }
    }

    pub fn entries(&self) -> &[RecentColor] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Change the bound, dropping the oldest entries that no longer fit
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
        self.entries.truncate(self.capacity);
    }
}

/// Map a position inside a picker of `size` to (hue, saturation).
///
/// Hue scales linearly with x over 0..360, saturation with y over 0..100.
pub fn hue_saturation_at(point: Pos2, size: Vec2) -> (u16, u8) {
    let hue = (point.x / size.x * 360.0).floor().clamp(0.0, 360.0) as u16;
    let saturation = (point.y / size.y * 100.0).floor().clamp(0.0, 100.0) as u8;
    (hue, saturation)
}

/// State of the hue/saturation picker plus the lightness control
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorPicker {
    size: Vec2,
    point: Pos2,
    lightness: u8,
    recent: RecentColors,
}

impl ColorPicker {
    /// Starts at full saturation red, 50% lightness
    pub fn new(size: Vec2, recent_capacity: usize) -> Self {
        Self {
            size,
            point: Pos2::new(0.0, size.y),
            lightness: 50,
            recent: RecentColors::new(recent_capacity),
        }
    }

    /// Select the color under `point` and record it as recently used
    pub fn pick(&mut self, point: Pos2) -> Hsl {
        self.preview(point);
        self.record_current();
        self.current()
    }

    /// Select the color under `point` without touching the recent list
    pub fn preview(&mut self, point: Pos2) -> Hsl {
        self.point = Pos2::new(point.x.clamp(0.0, self.size.x), point.y.clamp(0.0, self.size.y));
        self.current()
    }

    pub fn set_lightness(&mut self, lightness: u8) -> Hsl {
        self.preview_lightness(lightness);
        self.record_current();
        self.current()
    }

    /// Change lightness without touching the recent list
    pub fn preview_lightness(&mut self, lightness: u8) -> Hsl {
        self.lightness = lightness.min(100);
        self.current()
    }

    /// Re-select a previously used color
    pub fn restore(&mut self, color: RecentColor) -> Hsl {
        self.point = color.point;
        self.lightness = color.lightness.min(100);
        self.record_current();
        self.current()
    }

    /// Push the current (point, lightness) pair onto the recent list
    pub fn record_current(&mut self) -> bool {
        self.recent.record(RecentColor::new(self.point, self.lightness))
    }

    pub fn current(&self) -> Hsl {
        let (hue, saturation) = hue_saturation_at(self.point, self.size);
        Hsl::new(hue, saturation, self.lightness)
    }

    pub fn color32(&self) -> Color32 {
        self.current().to_color32()
    }

    pub fn point(&self) -> Pos2 {
        self.point
    }

    pub fn lightness(&self) -> u8 {
        self.lightness
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn recent(&self) -> &RecentColors {
        &self.recent
    }

    pub fn set_recent_capacity(&mut self, capacity: usize) {
        self.recent.set_capacity(capacity);
    }
}

/// Build the hue/saturation gradient swatch shown behind the picker marker
pub fn gradient_image(width: usize, height: usize) -> ColorImage {
    let mut image = ColorImage::new([width, height], Color32::TRANSPARENT);
    let size = Vec2::new(width as f32, height as f32);
    for y in 0..height {
        for x in 0..width {
            let (hue, saturation) = hue_saturation_at(Pos2::new(x as f32, y as f32), size);
            image.pixels[y * width + x] = Hsl::new(hue, saturation, GRADIENT_LIGHTNESS).to_color32();
        }
    }
    image
}
