/// Where the pointer is relative to the canvas, and whether it is drawing.
///
/// ```text
///              enter / move               down
///  ┌─────────┐ ─────────────► ┌──────────┐ ──────► ┌─────────┐
///  │ Outside │                │ Hovering │         │ Placing │
///  └─────────┘ ◄───────────── └──────────┘ ◄────── └─────────┘
///       ▲          leave                      up        │
///       └───────────────────────────────────────────────┘
///                          leave
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerState {
    /// Over the canvas with no button held
    Hovering,
    /// Button held; a command is open and follows the pointer
    Placing,
    /// Not over the canvas
    #[default]
    Outside,
}

impl PointerState {
    pub fn is_placing(&self) -> bool {
        matches!(self, PointerState::Placing)
    }

    pub fn is_hovering(&self) -> bool {
        matches!(self, PointerState::Hovering)
    }
}
