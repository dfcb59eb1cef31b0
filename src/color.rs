use egui::Color32;
use serde::{Deserialize, Serialize};

/// A hue/saturation/lightness triple as chosen in the color picker.
///
/// `hue` is in degrees (0..360), `saturation` and `lightness` are percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hsl {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

impl Hsl {
    pub fn new(hue: u16, saturation: u8, lightness: u8) -> Self {
        Self {
            hue: hue % 360,
            saturation: saturation.min(100),
            lightness: lightness.min(100),
        }
    }

    /// Resolve to an opaque sRGB color (CSS Color Module Level 3 algorithm)
    pub fn to_color32(self) -> Color32 {
        let (r, g, b) = hsl_to_rgb(
            self.hue as f32 / 360.0,
            self.saturation as f32 / 100.0,
            self.lightness as f32 / 100.0,
        );
        Color32::from_rgb(to_channel(r), to_channel(g), to_channel(b))
    }
}

impl Default for Hsl {
    fn default() -> Self {
        Self::new(0, 100, 50)
    }
}

impl std::fmt::Display for Hsl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
    }
}

fn to_channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// `h`, `s` and `l` are all in 0..=1
pub(crate) fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (f32, f32, f32) {
    if s <= 0.0 {
        return (l, l, l);
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    (
        hue_to_rgb(p, q, h + 1.0 / 3.0),
        hue_to_rgb(p, q, h),
        hue_to_rgb(p, q, h - 1.0 / 3.0),
    )
}
