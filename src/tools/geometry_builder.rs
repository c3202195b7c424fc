use egui::{Color32, pos2};

use super::Tool;
use crate::error::{EngineError, EngineResult};
use crate::stroke::{Point, Stroke, StrokeIdGenerator};

/// Transient state: the stroke being drawn by the active drag
#[derive(Debug)]
struct ActiveDrag {
    anchor: Point,
    // Last pointer position reported by `update`
    pointer: Option<Point>,
    stroke: Stroke,
}

/// Builds the point sequence of the in-progress stroke from a drag.
///
/// Only ever mutates its own in-progress stroke; committed strokes live in
/// [`crate::StrokeHistory`].
#[derive(Debug, Default)]
pub struct GeometryBuilder {
    active: Option<ActiveDrag>,
    ids: StrokeIdGenerator,
    // Where the last committed drag was released
    last_release: Option<Point>,
}

impl GeometryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new, empty in-progress stroke anchored at `start`.
    ///
    /// Fails if a stroke is already in progress, so an uncommitted stroke is
    /// never overwritten.
    pub fn begin(&mut self, start: Point) -> EngineResult<&mut Stroke> {
        if self.active.is_some() {
            return Err(EngineError::invalid_state(
                "begin_stroke",
                "a stroke is already in progress",
            ));
        }

        let stroke = Stroke::empty(self.ids.next_id(), Color32::TRANSPARENT, 1.0);
        let active = self.active.insert(ActiveDrag {
            anchor: start,
            pointer: None,
            stroke,
        });
        Ok(&mut active.stroke)
    }

    /// Recompute the in-progress points for the pointer at `current`
    pub fn update(&mut self, current: Point, tool: Tool) -> EngineResult<&mut Stroke> {
        let Some(active) = self.active.as_mut() else {
            return Err(EngineError::invalid_state(
                "update_stroke",
                "no stroke in progress",
            ));
        };

        let start = active.anchor;
        active.pointer = Some(current);
        match tool {
            Tool::Freehand => active.stroke.push_point(current),
            Tool::StraightLine => active.stroke.replace_points(vec![start, current]),
            Tool::Rectangle => active.stroke.replace_points(rectangle_outline(start, current)),
        }
        Ok(&mut active.stroke)
    }

    /// Finish the in-progress stroke and hand it over for commitment.
    ///
    /// Zero-length drags are returned as well; a stroke is never dropped for
    /// being too short.
    pub fn end(&mut self) -> EngineResult<Stroke> {
        let Some(active) = self.active.take() else {
            return Err(EngineError::invalid_state(
                "end_stroke",
                "no stroke in progress",
            ));
        };

        // Not the last stroke point: a rectangle outline ends back at its anchor
        self.last_release = Some(active.pointer.unwrap_or(active.anchor));
        Ok(active.stroke)
    }

    /// Drop the in-progress stroke without committing it
    pub fn cancel(&mut self) -> Option<Stroke> {
        self.active.take().map(|active| active.stroke)
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn in_progress(&self) -> Option<&Stroke> {
        self.active.as_ref().map(|active| &active.stroke)
    }

    /// Anchor of the active drag, if any
    pub fn anchor(&self) -> Option<Point> {
        self.active.as_ref().map(|active| active.anchor)
    }

    /// Release location of the last committed drag
    pub fn last_release(&self) -> Option<Point> {
        self.last_release
    }
}

/// Closed 5-point outline of the axis-aligned rectangle spanned by `start`
/// and `current`, starting and ending at `start`
pub fn rectangle_outline(start: Point, current: Point) -> Vec<Point> {
    vec![
        start,
        pos2(current.x, start.y),
        current,
        pos2(start.x, current.y),
        start,
    ]
}
