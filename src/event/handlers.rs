use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::event::{EditorEvent, EventHandler};

/// Asks egui for a new frame whenever the canvas needs redrawing
pub struct RepaintHandler {
    ctx: egui::Context,
}

impl RepaintHandler {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl EventHandler for RepaintHandler {
    fn handle_event(&mut self, event: &EditorEvent) {
        if event.needs_redraw() || *event == EditorEvent::ColorChanged {
            self.ctx.request_repaint();
        }
    }
}

/// Counts redraw requests; shares the count through an `Arc`
#[derive(Debug, Default, Clone)]
pub struct RedrawCounter {
    count: Arc<AtomicUsize>,
}

impl RedrawCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl EventHandler for RedrawCounter {
    fn handle_event(&mut self, event: &EditorEvent) {
        if event.needs_redraw() {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }
}
