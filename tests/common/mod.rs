#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use egui::{Color32, Pos2, Rect};
use paint_world::{EditorContext, EditorEvent, EventHandler, Settings, Surface};

/// One call made against a `RecordingSurface`
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Clear(Rect),
    StrokePath { points: Vec<Pos2>, width: f32, color: Color32 },
    FillEllipse { center: Pos2, radius_x: f32, radius_y: f32, color: Color32 },
    DrawGlyph { text: String, position: Pos2, size: f32 },
}

/// Surface double that records draw calls instead of drawing
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<Call>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls that put ink on the surface
    pub fn draws(&self) -> Vec<&Call> {
        self.calls.iter().filter(|call| !matches!(call, Call::Clear(_))).collect()
    }
}

/// Every glyph is half as wide as it is tall
pub const GLYPH_ASPECT: f32 = 0.5;

impl Surface for RecordingSurface {
    fn clear(&mut self, region: Rect) {
        self.calls.push(Call::Clear(region));
    }

    fn stroke_path(&mut self, points: &[Pos2], width: f32, color: Color32) {
        self.calls.push(Call::StrokePath { points: points.to_vec(), width, color });
    }

    fn fill_ellipse(&mut self, center: Pos2, radius_x: f32, radius_y: f32, color: Color32) {
        self.calls.push(Call::FillEllipse { center, radius_x, radius_y, color });
    }

    fn draw_glyph(&mut self, text: &str, position: Pos2, size: f32) {
        self.calls.push(Call::DrawGlyph { text: text.to_owned(), position, size });
    }

    fn measure_glyph(&mut self, text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * size * GLYPH_ASPECT
    }
}

/// Handler that keeps every event it receives
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<EditorEvent>>>,
}

impl EventLog {
    pub fn events(&self) -> Vec<EditorEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn take(&self) -> Vec<EditorEvent> {
        std::mem::take(&mut *self.events.lock().unwrap())
    }
}

impl EventHandler for EventLog {
    fn handle_event(&mut self, event: &EditorEvent) {
        self.events.lock().unwrap().push(*event);
    }
}

/// A fresh session with an event log attached
pub fn editor_with_log() -> (EditorContext, EventLog) {
    let editor = EditorContext::new(Settings::default());
    let log = EventLog::default();
    editor.event_bus.subscribe(Box::new(log.clone()));
    (editor, log)
}

pub fn pos(x: f32, y: f32) -> Pos2 {
    Pos2::new(x, y)
}
