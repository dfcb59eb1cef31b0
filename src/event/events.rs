/// Notifications emitted by the editor after it handles input or a command.
///
/// The set is closed: subscribers match on it instead of registering for
/// named events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorEvent {
    /// The document or the command being drawn changed; redraw everything
    DrawingChanged,
    /// Only the cursor preview moved; redraw without touching history
    ToolMoved,
    /// The selected color changed; refresh the picker and demo swatch
    ColorChanged,
}

impl EditorEvent {
    /// Whether the canvas needs to be redrawn for this event
    pub fn needs_redraw(&self) -> bool {
        matches!(self, EditorEvent::DrawingChanged | EditorEvent::ToolMoved)
    }
}
