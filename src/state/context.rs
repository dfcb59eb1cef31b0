/// The painting session: one explicit home for everything the canvas
/// handlers touch.
///
/// `EditorContext` owns the document, the armed tool, the color picker, the
/// sticker palette and the pointer state machine. Pointer input is fed in
/// through [`EditorContext::handle_input`]; every change that affects the
/// canvas is announced on the event bus exactly once, and operations that
/// turn out to be no-ops announce nothing.
///
/// # Drawing flow
///
/// ```text
/// down  -> create command from the armed tool, Placing
///          (strokes are committed immediately and keep growing,
///           stickers stay open until release)
/// move  -> extend the open command         (DrawingChanged)
///          or just move the cursor preview (ToolMoved)
/// up    -> commit an open sticker, close a stroke, Hovering
/// leave -> close a stroke, drop an unplaced sticker, Outside
/// ```
use egui::Pos2;

use super::PointerState;
use crate::color::Hsl;
use crate::color_picker::{ColorPicker, RecentColor};
use crate::command::{Command, CursorPreview, StickerCommand};
use crate::config::Settings;
use crate::document::Document;
use crate::event::{EditorEvent, EventBus};
use crate::input::InputEvent;
use crate::surface::Surface;
use crate::tools::{StickerPalette, Tool, ToolState};

/// The command that currently follows the pointer
#[derive(Debug, Clone, PartialEq)]
enum OpenCommand {
    /// The newest committed command is a stroke still being drawn
    Stroke,
    /// A sticker being positioned; committed on release
    Sticker(Command),
}

/// The main context for the paint application.
#[derive(Debug)]
pub struct EditorContext {
    settings: Settings,
    document: Document,
    tools: ToolState,
    picker: ColorPicker,
    stickers: StickerPalette,
    pointer: PointerState,
    cursor: Option<Pos2>,
    open: Option<OpenCommand>,
    /// The event bus for broadcasting editor events
    pub event_bus: EventBus,
}

impl EditorContext {
    /// Creates a new session with an empty document and the brush armed.
    pub fn new(settings: Settings) -> Self {
        Self {
            document: Document::new(),
            tools: ToolState::new(&settings),
            picker: ColorPicker::new(settings.picker_size(), settings.recent_colors_capacity),
            stickers: StickerPalette::new(settings.default_stickers.iter().cloned()),
            pointer: PointerState::default(),
            cursor: None,
            open: None,
            event_bus: EventBus::new(),
            settings,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn picker(&self) -> &ColorPicker {
        &self.picker
    }

    pub fn stickers(&self) -> &StickerPalette {
        &self.stickers
    }

    pub fn pointer_state(&self) -> PointerState {
        self.pointer
    }

    pub fn cursor(&self) -> Option<Pos2> {
        self.cursor
    }

    /// The sticker being positioned, if any
    pub fn open_sticker(&self) -> Option<&Command> {
        match &self.open {
            Some(OpenCommand::Sticker(command)) => Some(command),
            _ => None,
        }
    }

    /// True while a stroke is still receiving points
    pub fn is_drawing_stroke(&self) -> bool {
        matches!(self.open, Some(OpenCommand::Stroke))
    }

    /// Deliver an event to the fixed internal subscribers, then to the bus.
    fn notify(&mut self, event: EditorEvent) {
        // The color a stroke is drawn with counts as recently used
        if event == EditorEvent::DrawingChanged && self.is_drawing_stroke() {
            self.picker.record_current();
        }
        self.event_bus.emit(event);
    }

    // ---------------------------------------------------------------------
    // Pointer input
    // ---------------------------------------------------------------------

    /// Apply one pointer event to the session
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerEnter { position } => self.pointer_enter(position),
            InputEvent::PointerDown { position } => self.pointer_down(position),
            InputEvent::PointerMove { position, .. } => self.pointer_move(position),
            InputEvent::PointerUp { position } => self.pointer_up(position),
            InputEvent::PointerLeave => self.pointer_leave(),
        }
    }

    fn pointer_enter(&mut self, position: Pos2) {
        self.cursor = Some(position);
        if !self.pointer.is_placing() {
            self.pointer = PointerState::Hovering;
        }
        self.notify(EditorEvent::ToolMoved);
    }

    fn pointer_down(&mut self, position: Pos2) {
        if self.pointer.is_placing() {
            return;
        }
        self.cursor = Some(position);

        let style = self.tools.style(self.picker.color32());
        let command = Command::create(style, Some(position));
        if command.is_sticker() {
            self.open = Some(OpenCommand::Sticker(command));
        } else {
            self.document.commit(command);
            self.open = Some(OpenCommand::Stroke);
        }
        self.pointer = PointerState::Placing;
        self.notify(EditorEvent::DrawingChanged);
    }

    fn pointer_move(&mut self, position: Pos2) {
        self.cursor = Some(position);

        if self.pointer.is_placing() {
            let extended = match &mut self.open {
                Some(OpenCommand::Stroke) => match self.document.last_mut() {
                    Some(command) => {
                        command.extend(position);
                        true
                    }
                    None => false,
                },
                Some(OpenCommand::Sticker(command)) => {
                    command.extend(position);
                    true
                }
                None => false,
            };
            if extended {
                self.notify(EditorEvent::DrawingChanged);
                return;
            }
            // The open command was closed underneath us (undo mid-drag)
            self.pointer = PointerState::Hovering;
        } else if self.pointer == PointerState::Outside {
            self.pointer = PointerState::Hovering;
        }
        self.notify(EditorEvent::ToolMoved);
    }

    fn pointer_up(&mut self, position: Pos2) {
        self.cursor = Some(position);
        if !self.pointer.is_placing() {
            return;
        }
        self.pointer = PointerState::Hovering;

        match self.open.take() {
            Some(OpenCommand::Sticker(command)) => {
                self.document.commit(command);
                // Stickers are placed one at a time
                self.tools.set_tool(Tool::Brush);
                self.notify(EditorEvent::DrawingChanged);
            }
            Some(OpenCommand::Stroke) | None => self.notify(EditorEvent::ToolMoved),
        }
    }

    fn pointer_leave(&mut self) {
        self.cursor = None;
        if let Some(OpenCommand::Sticker(command)) = &self.open {
            log::debug!("Dropping unplaced {} on pointer leave", command.name());
        }
        self.open = None;
        self.pointer = PointerState::Outside;
        self.notify(EditorEvent::ToolMoved);
    }

    /// Stop following the pointer with whatever command is open.
    /// Strokes are already committed; an unplaced sticker is dropped.
    fn close_open_command(&mut self) {
        if self.open.take().is_some() && self.pointer.is_placing() {
            self.pointer = PointerState::Hovering;
        }
    }

    // ---------------------------------------------------------------------
    // History
    // ---------------------------------------------------------------------

    /// Commit a finished command directly
    pub fn commit(&mut self, command: Command) {
        self.close_open_command();
        self.document.commit(command);
        self.notify(EditorEvent::DrawingChanged);
    }

    /// Returns false, without notifying, when there is nothing to undo
    pub fn undo(&mut self) -> bool {
        self.close_open_command();
        let changed = self.document.undo();
        if changed {
            self.notify(EditorEvent::DrawingChanged);
        }
        changed
    }

    /// Returns false, without notifying, when there is nothing to redo
    pub fn redo(&mut self) -> bool {
        self.close_open_command();
        let changed = self.document.redo();
        if changed {
            self.notify(EditorEvent::DrawingChanged);
        }
        changed
    }

    /// Empty the history and the redo buffer. Not undoable.
    pub fn clear(&mut self) -> bool {
        self.close_open_command();
        if self.document.is_empty() {
            return false;
        }
        self.document.clear();
        self.notify(EditorEvent::DrawingChanged);
        true
    }

    // ---------------------------------------------------------------------
    // Tools
    // ---------------------------------------------------------------------

    pub fn select_brush(&mut self) {
        self.tools.set_tool(Tool::Brush);
        self.notify(EditorEvent::ToolMoved);
    }

    pub fn arm_sticker(&mut self, glyph: &str) {
        self.tools.arm_sticker(glyph);
        self.notify(EditorEvent::ToolMoved);
    }

    /// Set the brush size from a 1..=100 slider position
    pub fn set_brush_percent(&mut self, percent: u32) {
        self.tools.set_brush_percent(percent);
        self.notify(EditorEvent::ToolMoved);
    }

    pub fn add_sticker(&mut self, name: &str) -> bool {
        self.stickers.add(name)
    }

    // ---------------------------------------------------------------------
    // Color
    // ---------------------------------------------------------------------

    pub fn pick_color(&mut self, point: Pos2) -> Hsl {
        let hsl = self.picker.pick(point);
        self.notify(EditorEvent::ColorChanged);
        hsl
    }

    /// Follow a drag inside the picker without recording every step
    pub fn preview_color(&mut self, point: Pos2) -> Hsl {
        let hsl = self.picker.preview(point);
        self.notify(EditorEvent::ColorChanged);
        hsl
    }

    pub fn set_lightness(&mut self, lightness: u8) -> Hsl {
        let hsl = self.picker.set_lightness(lightness);
        self.notify(EditorEvent::ColorChanged);
        hsl
    }

    /// Follow the lightness slider while it is dragged
    pub fn preview_lightness(&mut self, lightness: u8) -> Hsl {
        let hsl = self.picker.preview_lightness(lightness);
        self.notify(EditorEvent::ColorChanged);
        hsl
    }

    pub fn restore_color(&mut self, color: RecentColor) -> Hsl {
        let hsl = self.picker.restore(color);
        self.notify(EditorEvent::ColorChanged);
        hsl
    }

    // ---------------------------------------------------------------------
    // Rendering
    // ---------------------------------------------------------------------

    /// What to draw under the pointer when nothing is being placed
    pub fn cursor_preview(&self) -> Option<CursorPreview> {
        if !self.pointer.is_hovering() || self.open.is_some() {
            return None;
        }
        let center = self.cursor?;
        Some(match self.tools.tool() {
            Tool::Brush => CursorPreview::Dot {
                center,
                width: self.tools.brush_width(),
                color: self.picker.color32(),
            },
            Tool::Sticker { glyph } => {
                let mut sticker = StickerCommand::new(glyph.clone(), self.tools.sticker_size());
                sticker.extend(center);
                CursorPreview::Sticker(sticker)
            }
        })
    }

    /// Full redraw: clear, replay the history in order, then draw the open
    /// sticker or the cursor preview on top.
    pub fn redraw(&self, surface: &mut dyn Surface) {
        surface.clear(self.settings.canvas_rect());
        self.document.render(surface);

        if let Some(command) = self.open_sticker() {
            command.render(surface);
        } else if let Some(preview) = self.cursor_preview() {
            preview.render(surface);
        }
    }

    // ---------------------------------------------------------------------
    // Persistence
    // ---------------------------------------------------------------------

    /// Adopt saved tool, palette and color state, fitted to the current settings
    pub(super) fn restore_parts(&mut self, tools: ToolState, stickers: StickerPalette, picker: ColorPicker) {
        self.tools.set_brush_width(tools.brush_width());
        self.tools.set_tool(tools.tool().clone());
        self.stickers = stickers;
        if picker.size() == self.settings.picker_size() {
            self.picker = picker;
            self.picker.set_recent_capacity(self.settings.recent_colors_capacity);
        } else {
            log::warn!("Saved color picker has a different size; keeping defaults");
        }
        self.notify(EditorEvent::ColorChanged);
    }
}
