use egui::{Color32, Pos2};
use std::sync::Arc;

/// A 2D coordinate in canvas space
pub type Point = Pos2;

/// Identifies a stroke for its whole lifetime. Never reused, even after the
/// stroke is undone or cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StrokeId(u64);

impl StrokeId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for StrokeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "stroke#{}", self.0)
    }
}

/// Hands out stroke ids in increasing order
#[derive(Debug, Default)]
pub(crate) struct StrokeIdGenerator {
    next: u64,
}

impl StrokeIdGenerator {
    pub(crate) fn next_id(&mut self) -> StrokeId {
        self.next += 1;
        StrokeId(self.next)
    }
}

/// One drawn path with a single color and width.
///
/// The color is the last color resolved for the stroke, not a per-point
/// color: under the rainbow and sprinkles effects the whole in-progress
/// stroke takes on each newly resolved color.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    id: StrokeId,
    points: Vec<Point>,
    color: Color32,
    width: f32,
}

// Shared handle for committed strokes
pub type StrokeRef = Arc<Stroke>;

impl Stroke {
    pub fn new(id: StrokeId, points: Vec<Point>, color: Color32, width: f32) -> Self {
        Self {
            id,
            points,
            color,
            width,
        }
    }

    /// An empty stroke, not yet started
    pub(crate) fn empty(id: StrokeId, color: Color32, width: f32) -> Self {
        Self::new(id, Vec::new(), color, width)
    }

    pub fn id(&self) -> StrokeId {
        self.id
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// A single-point stroke, drawn as a dot
    pub fn is_dot(&self) -> bool {
        self.points.len() == 1
    }

    /// Copy of this stroke with another color, same id and geometry
    pub fn with_color(&self, color: Color32) -> Self {
        Self {
            color,
            ..self.clone()
        }
    }

    pub(crate) fn push_point(&mut self, point: Point) {
        self.points.push(point);
    }

    pub(crate) fn replace_points(&mut self, points: Vec<Point>) {
        self.points = points;
    }

    pub(crate) fn set_style(&mut self, color: Color32, width: f32) {
        self.color = color;
        self.width = width;
    }
}
