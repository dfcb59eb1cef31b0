mod context;
mod persistence;
mod pointer_state;

pub use context::EditorContext;
pub use persistence::EditorSnapshot;
pub use pointer_state::PointerState;
