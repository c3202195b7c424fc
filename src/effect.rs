use egui::Color32;
use egui::ecolor::Hsva;
use serde::{Deserialize, Serialize};

use crate::stroke::Point;

/// Color-resolution policy applied while dragging
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effect {
    /// Paint with the selected flat color
    #[default]
    Normal,
    /// Random pick from the discrete rainbow palette on every update
    Rainbow,
    /// Random fully saturated hue on every update
    Sprinkles,
}

impl Effect {
    pub const ALL: [Effect; 3] = [Effect::Normal, Effect::Rainbow, Effect::Sprinkles];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Rainbow => "Rainbow",
            Self::Sprinkles => "Sprinkles",
        }
    }
}

/// Source of randomness for the dynamic effects
pub trait RandomSource {
    fn next_u32(&mut self) -> u32;

    /// Uniform value in `[0, 1)`
    fn next_unit(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn next_index(&mut self, len: usize) -> usize {
        (self.next_unit() * len as f32) as usize % len
    }
}

/// Randomness from the operating system.
///
/// If the OS source fails, falls back to a linear congruential sequence so
/// the effects keep varying; the failure is logged once.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRandom {
    fallback: Option<u32>,
}

impl SystemRandom {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_fallback(&mut self) -> u32 {
        let state = self
            .fallback
            .unwrap_or(0x9E37_79B9)
            .wrapping_mul(1_664_525)
            .wrapping_add(1_013_904_223);
        self.fallback = Some(state);
        state
    }
}

impl RandomSource for SystemRandom {
    fn next_u32(&mut self) -> u32 {
        if self.fallback.is_some() {
            return self.next_fallback();
        }
        match getrandom::u32() {
            Ok(value) => value,
            Err(err) => {
                log::warn!("System randomness unavailable, using fallback sequence: {err}");
                self.next_fallback()
            }
        }
    }
}

/// Resolves the paint color for a drag update.
///
/// The resolved color is applied to the whole in-progress stroke. Storing a
/// color per point would be needed for a multi-colored trail; `point` is
/// passed through for that purpose but does not affect the result today.
#[derive(Debug, Clone)]
pub struct ColorResolver {
    background: Color32,
    palette: Vec<Color32>,
}

impl ColorResolver {
    /// `palette` must not be empty; the engine config validates this
    pub fn new(background: Color32, palette: Vec<Color32>) -> Self {
        Self { background, palette }
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    pub fn set_background(&mut self, background: Color32) {
        self.background = background;
    }

    pub fn palette(&self) -> &[Color32] {
        &self.palette
    }

    pub fn resolve(
        &self,
        _point: Point,
        effect: Effect,
        eraser: bool,
        flat_color: Color32,
        rng: &mut impl RandomSource,
    ) -> Color32 {
        // Eraser overrides every effect
        if eraser {
            return self.background;
        }

        match effect {
            Effect::Normal => flat_color,
            Effect::Rainbow => {
                if self.palette.is_empty() {
                    return flat_color;
                }
                self.palette[rng.next_index(self.palette.len())]
            }
            Effect::Sprinkles => Hsva::new(rng.next_unit(), 1.0, 1.0, 1.0).into(),
        }
    }
}

/// The six rainbow hues: red, orange, yellow, green, blue, purple
pub fn default_rainbow_palette() -> Vec<Color32> {
    vec![
        Color32::from_rgb(255, 59, 48),
        Color32::from_rgb(255, 149, 0),
        Color32::from_rgb(255, 204, 0),
        Color32::from_rgb(52, 199, 89),
        Color32::from_rgb(0, 122, 255),
        Color32::from_rgb(175, 82, 222),
    ]
}
