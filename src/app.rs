use egui::{Key, KeyboardShortcut, Modifiers};

use crate::config::Settings;
use crate::event::{RedrawCounter, RepaintHandler};
use crate::input::InputHandler;
use crate::panels::{central_panel, color_panel, tools_panel};
use crate::renderer::Renderer;
use crate::state::{EditorContext, EditorSnapshot};

pub const APP_NAME: &str = "Paint World";

const UNDO: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
const REDO: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);
const REDO_SHIFT: KeyboardShortcut = KeyboardShortcut::new(
    Modifiers {
        shift: true,
        ..Modifiers::COMMAND
    },
    Key::Z,
);

pub struct PaintApp {
    pub(crate) editor: EditorContext,
    pub(crate) renderer: Renderer,
    pub(crate) input: InputHandler,
    pub(crate) redraws: RedrawCounter,
    /// Text field backing the "Add Sticker" button
    pub(crate) new_sticker_name: String,
    /// Result of the last export, shown under the toolbar
    pub(crate) status: Option<String>,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        let mut editor = EditorContext::new(settings);

        // Restore tool and color choices; the drawing always starts empty
        if let Some(storage) = cc.storage {
            if let Some(snapshot) = eframe::get_value::<EditorSnapshot>(storage, eframe::APP_KEY) {
                log::info!("Restoring saved tool and color settings");
                snapshot.restore(&mut editor);
            }
        }

        editor
            .event_bus
            .subscribe(Box::new(RepaintHandler::new(cc.egui_ctx.clone())));
        let redraws = RedrawCounter::new();
        editor.event_bus.subscribe(Box::new(redraws.clone()));

        Self {
            editor,
            renderer: Renderer::new(&cc.egui_ctx),
            input: InputHandler::new(),
            redraws,
            new_sticker_name: String::new(),
            status: None,
        }
    }

    pub fn editor(&self) -> &EditorContext {
        &self.editor
    }

    pub(crate) fn undo(&mut self) {
        self.editor.undo();
    }

    pub(crate) fn redo(&mut self) {
        self.editor.redo();
    }

    pub(crate) fn clear(&mut self) {
        self.editor.clear();
        self.status = None;
    }

    /// Rasterize the drawing at the export scale and save it as a PNG
    pub(crate) fn export(&mut self) {
        #[cfg(not(target_arch = "wasm32"))]
        {
            let settings = self.editor.settings();
            let path = settings.export_file_name.clone();
            self.status = Some(
                match crate::export::export_png_to(self.editor.document(), settings, &path) {
                    Ok(()) => format!("Exported to {}", path),
                    Err(err) => {
                        log::error!("Export failed: {}", err);
                        format!("Export failed: {}", err)
                    }
                },
            );
        }

        #[cfg(target_arch = "wasm32")]
        {
            log::warn!("Export is not available in the web build");
            self.status = Some("Export is not available in the browser".to_owned());
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        // Check the shifted variant first: plain Cmd+Z also matches Cmd+Shift+Z
        let redo = ctx.input_mut(|i| i.consume_shortcut(&REDO_SHIFT) || i.consume_shortcut(&REDO));
        let undo = !redo && ctx.input_mut(|i| i.consume_shortcut(&UNDO));

        if redo {
            self.redo();
        } else if undo {
            self.undo();
        }
    }
}

impl eframe::App for PaintApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &EditorSnapshot::new(&self.editor));
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);

        tools_panel(self, ctx);
        color_panel(self, ctx);
        central_panel(self, ctx);
    }
}
