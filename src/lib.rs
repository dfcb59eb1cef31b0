#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod color;
pub mod color_picker;
pub mod command;
pub mod config;
pub mod document;
pub mod event;
pub mod export;
mod geometry;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod state;
pub mod surface;
pub mod tools;

pub use app::PaintApp;
pub use color::Hsl;
pub use color_picker::{ColorPicker, RecentColor, RecentColors};
pub use command::{Command, CursorPreview, StickerCommand, StrokeCommand, Style};
pub use config::{ConfigError, Settings};
pub use document::Document;
pub use event::{EditorEvent, EventBus, EventHandler};
pub use export::ExportError;
pub use input::{InputEvent, InputHandler};
pub use renderer::Renderer;
pub use state::{EditorContext, EditorSnapshot, PointerState};
pub use surface::{PainterSurface, RasterSurface, Surface};
pub use tools::{StickerPalette, Tool, ToolState};
