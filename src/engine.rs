use egui::Color32;
use std::sync::Arc;

use crate::config::{BrushSettings, EngineConfig};
use crate::effect::{ColorResolver, RandomSource, SystemRandom};
use crate::error::{EngineError, EngineResult};
use crate::history::StrokeHistory;
use crate::renderer::{self, RenderCommand};
use crate::stroke::{Point, Stroke, StrokeRef};
use crate::tools::GeometryBuilder;

/// Stroke capture and rendering engine.
///
/// The host feeds it drag events and pulls render commands after every
/// mutation. Tool and style selections are passed with each update rather
/// than stored here.
#[derive(Debug)]
pub struct DrawingEngine<R: RandomSource = SystemRandom> {
    config: EngineConfig,
    builder: GeometryBuilder,
    resolver: ColorResolver,
    history: StrokeHistory,
    rng: R,
}

impl Default for DrawingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawingEngine {
    pub fn new() -> Self {
        Self::build(EngineConfig::default(), SystemRandom::new())
    }

    pub fn with_config(config: EngineConfig) -> EngineResult<Self> {
        Self::with_random(config, SystemRandom::new())
    }
}

impl<R: RandomSource> DrawingEngine<R> {
    /// Engine with a custom randomness source for the dynamic effects
    pub fn with_random(config: EngineConfig, rng: R) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self::build(config, rng))
    }

    fn build(config: EngineConfig, rng: R) -> Self {
        let resolver = ColorResolver::new(config.background, config.rainbow_palette.clone());
        Self {
            config,
            builder: GeometryBuilder::new(),
            resolver,
            history: StrokeHistory::new(),
            rng,
        }
    }

    /// Start a stroke at `point` in the default brush style. Fails if a
    /// stroke is already in progress.
    pub fn begin_stroke(&mut self, point: Point) -> EngineResult<()> {
        self.begin_stroke_with(point, &BrushSettings::default())
    }

    /// Start a stroke at `point` styled by `settings`, so a drag released
    /// before any move still commits with a real color and width.
    pub fn begin_stroke_with(&mut self, point: Point, settings: &BrushSettings) -> EngineResult<()> {
        ensure_finite(point)?;

        let anchor = match self.builder.last_release() {
            Some(release) if self.config.anchor_from_release => release,
            _ => point,
        };
        let stroke = self.builder.begin(anchor)?;
        let color = self.resolver.resolve(
            anchor,
            settings.effect,
            settings.eraser,
            settings.color,
            &mut self.rng,
        );
        stroke.set_style(color, self.config.clamp_width(settings.width));
        log::debug!("Began {} at ({}, {})", stroke.id(), anchor.x, anchor.y);
        Ok(())
    }

    /// Move the active drag to `point`, rebuilding the in-progress geometry
    /// and re-resolving its color. Returns the in-progress stroke for redraw.
    pub fn update_stroke(&mut self, point: Point, settings: &BrushSettings) -> EngineResult<&Stroke> {
        ensure_finite(point)?;

        let stroke = self.builder.update(point, settings.tool)?;
        let color = self.resolver.resolve(
            point,
            settings.effect,
            settings.eraser,
            settings.color,
            &mut self.rng,
        );
        stroke.set_style(color, self.config.clamp_width(settings.width));
        log::trace!("Updated {}: {} points", stroke.id(), stroke.points().len());
        Ok(&*stroke)
    }

    /// Commit the in-progress stroke to the history
    pub fn end_stroke(&mut self) -> EngineResult<StrokeRef> {
        let stroke = self.builder.end()?;
        log::debug!("Committing {} with {} points", stroke.id(), stroke.points().len());
        Ok(self.history.append(stroke))
    }

    /// Discard the in-progress stroke, if any, without committing it
    pub fn cancel_stroke(&mut self) -> Option<Stroke> {
        let cancelled = self.builder.cancel();
        if let Some(stroke) = &cancelled {
            log::debug!("Cancelled {}", stroke.id());
        }
        cancelled
    }

    /// Remove the last committed stroke; no-op on an empty history
    pub fn undo(&mut self) -> Option<StrokeRef> {
        let removed = self.history.undo();
        match &removed {
            Some(stroke) => log::info!("Undo removed {}", stroke.id()),
            None => log::debug!("Undo on empty history"),
        }
        removed
    }

    pub fn clear_all(&mut self) {
        log::info!("Clearing {} strokes", self.history.len());
        self.history.clear();
    }

    /// Toggle the history-wide recolor to `color`. Returns whether it is
    /// applied afterwards.
    pub fn apply_bulk_recolor(&mut self, color: Color32) -> bool {
        let active = self.history.toggle_recolor(color);
        log::info!("Bulk recolor {}", if active { "applied" } else { "reverted" });
        active
    }

    /// Toggle the recolor using the configured filter color
    pub fn toggle_filter(&mut self) -> bool {
        self.apply_bulk_recolor(self.config.filter_color)
    }

    pub fn is_filter_active(&self) -> bool {
        self.history.is_recolored()
    }

    /// Draw commands for the committed strokes, in-progress stroke on top
    pub fn render_commands(&self) -> Vec<RenderCommand> {
        renderer::render(
            self.history.strokes().iter().map(Arc::as_ref),
            self.builder.in_progress(),
        )
    }

    pub fn set_background(&mut self, background: Color32) {
        self.config.background = background;
        self.resolver.set_background(background);
    }

    pub fn background(&self) -> Color32 {
        self.resolver.background()
    }

    pub fn is_drawing(&self) -> bool {
        self.builder.is_active()
    }

    pub fn in_progress(&self) -> Option<&Stroke> {
        self.builder.in_progress()
    }

    pub fn history(&self) -> &StrokeHistory {
        &self.history
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

fn ensure_finite(point: Point) -> EngineResult<()> {
    if point.x.is_finite() && point.y.is_finite() {
        Ok(())
    } else {
        Err(EngineError::NonFinitePoint {
            x: point.x,
            y: point.y,
        })
    }
}
