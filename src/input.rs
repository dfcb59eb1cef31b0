use egui::{Context, Pos2, Rect};

/// Pointer events in surface-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button was pressed over the canvas
    PointerDown { position: Pos2 },
    /// Pointer moved over the canvas
    PointerMove {
        position: Pos2,
        /// Whether the primary button is held
        pressed: bool,
    },
    /// Primary button was released over the canvas
    PointerUp { position: Pos2 },
    /// Pointer entered the canvas
    PointerEnter { position: Pos2 },
    /// Pointer left the canvas
    PointerLeave,
}

impl InputEvent {
    pub fn position(&self) -> Option<Pos2> {
        match self {
            InputEvent::PointerDown { position }
            | InputEvent::PointerMove { position, .. }
            | InputEvent::PointerUp { position }
            | InputEvent::PointerEnter { position } => Some(*position),
            InputEvent::PointerLeave => None,
        }
    }
}

/// Handles converting raw egui input into canvas `InputEvent`s
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    inside: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process this frame's pointer state against the canvas at `canvas_rect`
    /// (screen space). Events come out in enter, down, move, up, leave order.
    pub fn process_input(&mut self, ctx: &Context, canvas_rect: Rect) -> Vec<InputEvent> {
        ctx.input(|input| {
            let pointer = &input.pointer;
            self.translate(
                canvas_rect,
                pointer.hover_pos(),
                pointer.primary_pressed(),
                pointer.primary_down(),
                pointer.primary_released(),
            )
        })
    }

    /// Pure part of `process_input`, separated so it can be driven without egui
    pub fn translate(
        &mut self,
        canvas_rect: Rect,
        hover_pos: Option<Pos2>,
        pressed: bool,
        down: bool,
        released: bool,
    ) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let local = |pos: Pos2| (pos - canvas_rect.min).to_pos2();

        let inside_pos = hover_pos.filter(|pos| canvas_rect.contains(*pos));
        match inside_pos {
            Some(pos) => {
                let position = local(pos);
                if !self.inside {
                    events.push(InputEvent::PointerEnter { position });
                }
                if pressed {
                    events.push(InputEvent::PointerDown { position });
                }
                // A press already carries this frame's position
                if !pressed && self.last_pointer_pos != Some(pos) {
                    events.push(InputEvent::PointerMove {
                        position,
                        pressed: down,
                    });
                }
                if released {
                    events.push(InputEvent::PointerUp { position });
                }
                self.inside = true;
                self.last_pointer_pos = Some(pos);
            }
            None => {
                if self.inside {
                    events.push(InputEvent::PointerLeave);
                }
                self.inside = false;
                self.last_pointer_pos = None;
            }
        }

        events
    }
}
