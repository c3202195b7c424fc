use serde::{Deserialize, Serialize};

mod geometry_builder;
pub use geometry_builder::{GeometryBuilder, rectangle_outline};

/// Geometry-construction policy mapping a drag to a point sequence
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tool {
    /// Every move event appends the pointer position
    #[default]
    Freehand,
    /// Always exactly `[start, current]`
    StraightLine,
    /// Closed axis-aligned outline through `start` and `current`
    Rectangle,
}

impl Tool {
    pub const ALL: [Tool; 3] = [Tool::Freehand, Tool::StraightLine, Tool::Rectangle];

    /// Return the name of the tool
    pub fn name(&self) -> &'static str {
        match self {
            Self::Freehand => "Freehand",
            Self::StraightLine => "Line",
            Self::Rectangle => "Rectangle",
        }
    }
}
