use egui::Color32;
use std::collections::HashMap;
use std::sync::Arc;

use crate::stroke::{Stroke, StrokeId, StrokeRef};

/// Ordered history of committed strokes. Insertion order is z-order: later
/// strokes are drawn on top.
///
/// Entries are never mutated in place. The bulk recolor replaces the whole
/// sequence with a recolored copy.
#[derive(Debug, Default, Clone)]
pub struct StrokeHistory {
    strokes: Vec<StrokeRef>,
    /// Colors from before the bulk recolor, present while it is applied
    filtered: Option<HashMap<StrokeId, Color32>>,
}

impl StrokeHistory {
    /// Creates a new empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit a stroke on top of all others
    pub fn append(&mut self, stroke: Stroke) -> StrokeRef {
        let stroke = Arc::new(stroke);
        self.strokes.push(Arc::clone(&stroke));
        stroke
    }

    /// Remove the most recently committed stroke. Does nothing on an empty
    /// history.
    pub fn undo(&mut self) -> Option<StrokeRef> {
        let removed = self.strokes.pop()?;
        if let Some(saved) = &mut self.filtered {
            saved.remove(&removed.id());
        }
        Some(removed)
    }

    /// Remove every stroke. There is no redo.
    pub fn clear(&mut self) {
        self.strokes.clear();
        self.filtered = None;
    }

    /// Toggle the history-wide recolor.
    ///
    /// The first call paints every committed stroke with `color` and keeps
    /// the previous colors; the next call puts those colors back. Strokes
    /// committed while the recolor is applied are left alone by the revert.
    /// Returns whether the recolor is applied afterwards.
    pub fn toggle_recolor(&mut self, color: Color32) -> bool {
        match self.filtered.take() {
            None => {
                let saved = self
                    .strokes
                    .iter()
                    .map(|stroke| (stroke.id(), stroke.color()))
                    .collect();
                self.map_strokes(|_| Some(color));
                self.filtered = Some(saved);
                true
            }
            Some(saved) => {
                self.map_strokes(|stroke| saved.get(&stroke.id()).copied());
                false
            }
        }
    }

    pub fn is_recolored(&self) -> bool {
        self.filtered.is_some()
    }

    // Replace the sequence with a copy, recoloring where `recolor` says so
    fn map_strokes(&mut self, recolor: impl Fn(&Stroke) -> Option<Color32>) {
        self.strokes = self
            .strokes
            .iter()
            .map(|stroke| match recolor(stroke) {
                Some(color) if color != stroke.color() => Arc::new(stroke.with_color(color)),
                _ => Arc::clone(stroke),
            })
            .collect();
    }

    pub fn strokes(&self) -> &[StrokeRef] {
        &self.strokes
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub fn last(&self) -> Option<&StrokeRef> {
        self.strokes.last()
    }
}
