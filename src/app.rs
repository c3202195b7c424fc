use egui::{Color32, Key, KeyboardShortcut, Modifiers};

use crate::config::{BrushSettings, EngineConfig};
use crate::engine::DrawingEngine;
use crate::input::InputHandler;
use crate::panels::{central_panel, tools_panel};

const UNDO_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
const DARK_CANVAS: Color32 = Color32::from_gray(24);

/// We derive Deserialize/Serialize so we can persist app state on shutdown.
/// Only the settings are kept; drawings are not.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct PaintApp {
    pub(crate) settings: BrushSettings,
    pub(crate) config: EngineConfig,
    pub(crate) dark_mode: bool,

    #[serde(skip)]
    pub(crate) engine: DrawingEngine,
    #[serde(skip)]
    pub(crate) input: InputHandler,
}

impl Default for PaintApp {
    fn default() -> Self {
        Self {
            settings: BrushSettings::default(),
            config: EngineConfig::default(),
            dark_mode: false,
            engine: DrawingEngine::new(),
            input: InputHandler::new(),
        }
    }
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app: Self = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        app.engine = match DrawingEngine::with_config(app.config.clone()) {
            Ok(engine) => engine,
            Err(err) => {
                log::warn!("Discarding stored config: {err}");
                app.config = EngineConfig::default();
                DrawingEngine::new()
            }
        };
        app.set_dark_mode(&cc.egui_ctx, app.dark_mode);
        app
    }

    pub fn engine(&self) -> &DrawingEngine {
        &self.engine
    }

    pub fn settings(&self) -> &BrushSettings {
        &self.settings
    }

    /// Switch the theme; the canvas background (and so the eraser) follows it
    pub fn set_dark_mode(&mut self, ctx: &egui::Context, dark_mode: bool) {
        self.dark_mode = dark_mode;
        ctx.set_visuals(if dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });
        self.engine.set_background(self.canvas_background());
    }

    pub fn canvas_background(&self) -> Color32 {
        if self.dark_mode {
            DARK_CANVAS
        } else {
            self.config.background
        }
    }
}

impl eframe::App for PaintApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input_mut(|input| input.consume_shortcut(&UNDO_SHORTCUT)) {
            self.engine.undo();
        }

        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}
