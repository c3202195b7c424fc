#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod components;
pub mod config;
pub mod effect;
pub mod engine;
pub mod error;
pub mod history;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod stroke;
pub mod tools;

pub use app::PaintApp;
pub use config::{BrushSettings, EngineConfig};
pub use effect::{ColorResolver, Effect, RandomSource, SystemRandom};
pub use engine::DrawingEngine;
pub use error::{EngineError, EngineResult};
pub use history::StrokeHistory;
pub use input::{DragEvent, InputHandler, route_event};
pub use renderer::RenderCommand;
pub use stroke::{Point, Stroke, StrokeId, StrokeRef};
pub use tools::{GeometryBuilder, Tool};
