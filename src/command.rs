use egui::{Color32, Pos2};

use crate::surface::Surface;

/// Style captured when a command is created.
///
/// Values are copied into the command, so later tool or color changes never
/// repaint existing commands.
#[derive(Debug, Clone, PartialEq)]
pub enum Style {
    Stroke { width: f32, color: Color32 },
    Sticker { glyph: String, size: f32 },
}

/// Freehand line through an ordered list of points
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeCommand {
    points: Vec<Pos2>,
    width: f32,
    color: Color32,
}

impl StrokeCommand {
    pub fn new(width: f32, color: Color32) -> Self {
        Self {
            points: Vec::new(),
            width,
            color,
        }
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn extend(&mut self, point: Pos2) {
        self.points.push(point);
    }

    /// A stroke needs two points before anything shows
    pub fn render(&self, surface: &mut dyn Surface) {
        if self.points.len() < 2 {
            return;
        }
        surface.stroke_path(&self.points, self.width, self.color);
    }
}

/// A glyph placed centered on a single anchor point
#[derive(Debug, Clone, PartialEq)]
pub struct StickerCommand {
    glyph: String,
    size: f32,
    anchor: Option<Pos2>,
}

impl StickerCommand {
    pub fn new(glyph: impl Into<String>, size: f32) -> Self {
        Self {
            glyph: glyph.into(),
            size,
            anchor: None,
        }
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn anchor(&self) -> Option<Pos2> {
        self.anchor
    }

    /// Stickers have one position; extending moves it
    pub fn extend(&mut self, point: Pos2) {
        self.anchor = Some(point);
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        let Some(anchor) = self.anchor else {
            return;
        };
        let offset = surface.measure_glyph(&self.glyph, self.size) / 2.0;
        surface.draw_glyph(
            &self.glyph,
            Pos2::new(anchor.x - offset, anchor.y + offset / 2.0),
            self.size,
        );
    }
}

/// A drawable unit of the document history
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Stroke(StrokeCommand),
    Sticker(StickerCommand),
}

impl Command {
    /// Start a new command, optionally already extended to `initial`
    pub fn create(style: Style, initial: Option<Pos2>) -> Self {
        let mut command = match style {
            Style::Stroke { width, color } => Command::Stroke(StrokeCommand::new(width, color)),
            Style::Sticker { glyph, size } => Command::Sticker(StickerCommand::new(glyph, size)),
        };
        if let Some(point) = initial {
            command.extend(point);
        }
        command
    }

    pub fn extend(&mut self, point: Pos2) {
        match self {
            Command::Stroke(stroke) => stroke.extend(point),
            Command::Sticker(sticker) => sticker.extend(point),
        }
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        match self {
            Command::Stroke(stroke) => stroke.render(surface),
            Command::Sticker(sticker) => sticker.render(surface),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Stroke(_) => "Stroke",
            Command::Sticker(_) => "Sticker",
        }
    }

    pub fn is_sticker(&self) -> bool {
        matches!(self, Command::Sticker(_))
    }
}

/// What follows the pointer while hovering; never part of the history
#[derive(Debug, Clone, PartialEq)]
pub enum CursorPreview {
    /// Brush tip: a dot as wide as the brush
    Dot { center: Pos2, width: f32, color: Color32 },
    /// The armed sticker, shown where it would land
    Sticker(StickerCommand),
}

impl CursorPreview {
    pub fn render(&self, surface: &mut dyn Surface) {
        match self {
            CursorPreview::Dot { center, width, color } => {
                surface.fill_ellipse(*center, width / 2.0, width / 2.0, *color);
            }
            CursorPreview::Sticker(sticker) => sticker.render(surface),
        }
    }
}
