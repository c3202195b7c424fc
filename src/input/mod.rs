use egui::{Pos2, Response};

use crate::stroke::Point;

mod router;
pub use router::route_event;

/// Drag lifecycle events in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    /// Pointer pressed on the canvas and started dragging
    Begin(Point),
    /// Pointer moved while held down
    Move(Point),
    /// Pointer released
    End,
    /// Drag abandoned; the stroke must not be committed
    Cancel,
}

/// Pointer state of the canvas for one frame, in screen coordinates
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerSample {
    pub drag_started: bool,
    pub dragging: bool,
    pub drag_stopped: bool,
    pub cancel_requested: bool,
    pub position: Option<Pos2>,
}

/// Converts raw egui canvas input into [`DragEvent`]s
#[derive(Debug, Default)]
pub struct InputHandler {
    canvas_origin: Pos2,
    /// Last position reported to the engine during the current drag
    last_pointer_pos: Option<Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read this frame's drag state off the canvas response
    pub fn process_response(&mut self, response: &Response) -> Vec<DragEvent> {
        self.canvas_origin = response.rect.min;
        let cancel_requested = response.ctx.input(|input| input.key_pressed(egui::Key::Escape));
        self.process_sample(PointerSample {
            drag_started: response.drag_started(),
            dragging: response.dragged(),
            drag_stopped: response.drag_stopped(),
            cancel_requested,
            position: response.interact_pointer_pos(),
        })
    }

    pub fn set_canvas_origin(&mut self, origin: Pos2) {
        self.canvas_origin = origin;
    }

    /// Translate a pointer sample into drag events, in order
    pub fn process_sample(&mut self, sample: PointerSample) -> Vec<DragEvent> {
        let mut events = Vec::new();

        // egui reports the start once the pointer is past its drag
        // threshold, so the start position is already a stroke sample
        if sample.drag_started {
            if let Some(pos) = sample.position {
                let point = self.to_canvas(pos);
                events.push(DragEvent::Begin(point));
                events.push(DragEvent::Move(point));
                self.last_pointer_pos = Some(pos);
            }
        }

        // Nothing to report for a drag we never saw begin
        if self.last_pointer_pos.is_none() {
            return events;
        }

        if sample.cancel_requested {
            events.push(DragEvent::Cancel);
            self.last_pointer_pos = None;
            return events;
        }

        // Only report actual movement, a held still pointer adds no points
        if sample.dragging && !sample.drag_started {
            if let Some(pos) = sample.position {
                if Some(pos) != self.last_pointer_pos {
                    events.push(DragEvent::Move(self.to_canvas(pos)));
                    self.last_pointer_pos = Some(pos);
                }
            }
        }

        if sample.drag_stopped {
            events.push(DragEvent::End);
            self.last_pointer_pos = None;
        }

        events
    }

    pub fn is_tracking(&self) -> bool {
        self.last_pointer_pos.is_some()
    }

    fn to_canvas(&self, pos: Pos2) -> Point {
        (pos - self.canvas_origin).to_pos2()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn at(x: f32, y: f32) -> Option<Pos2> {
        Some(pos2(x, y))
    }

    #[test]
    fn test_drag_sequence() {
        let mut handler = InputHandler::new();
        handler.set_canvas_origin(pos2(100.0, 50.0));

        let events = handler.process_sample(PointerSample {
            drag_started: true,
            dragging: true,
            position: at(110.0, 60.0),
            ..Default::default()
        });
        assert_eq!(
            events,
            vec![DragEvent::Begin(pos2(10.0, 10.0)), DragEvent::Move(pos2(10.0, 10.0))]
        );

        let events = handler.process_sample(PointerSample {
            dragging: true,
            position: at(120.0, 60.0),
            ..Default::default()
        });
        assert_eq!(events, vec![DragEvent::Move(pos2(20.0, 10.0))]);

        // Held still: no new point
        let events = handler.process_sample(PointerSample {
            dragging: true,
            position: at(120.0, 60.0),
            ..Default::default()
        });
        assert!(events.is_empty());

        let events = handler.process_sample(PointerSample {
            drag_stopped: true,
            position: at(120.0, 60.0),
            ..Default::default()
        });
        assert_eq!(events, vec![DragEvent::End]);
        assert!(!handler.is_tracking());
    }

    #[test]
    fn test_drag_started_and_stopped_in_one_frame() {
        let mut handler = InputHandler::new();
        let events = handler.process_sample(PointerSample {
            drag_started: true,
            dragging: true,
            drag_stopped: true,
            position: at(5.0, 5.0),
            ..Default::default()
        });
        assert_eq!(
            events,
            vec![
                DragEvent::Begin(pos2(5.0, 5.0)),
                DragEvent::Move(pos2(5.0, 5.0)),
                DragEvent::End,
            ]
        );
    }

    #[test]
    fn test_quick_tap_commits_a_dot() {
        let mut handler = InputHandler::new();
        let mut engine = crate::DrawingEngine::new();
        let settings = crate::BrushSettings {
            color: egui::Color32::RED,
            ..Default::default()
        };

        let mut events = handler.process_sample(PointerSample {
            drag_started: true,
            dragging: true,
            position: at(5.0, 5.0),
            ..Default::default()
        });
        events.extend(handler.process_sample(PointerSample {
            drag_stopped: true,
            position: at(5.0, 5.0),
            ..Default::default()
        }));

        let committed: Vec<_> = events
            .into_iter()
            .filter_map(|event| route_event(&mut engine, event, &settings))
            .collect();
        assert_eq!(committed.len(), 1);
        assert_eq!(committed[0].points(), &[pos2(5.0, 5.0)]);
        assert_eq!(committed[0].color(), egui::Color32::RED);
        assert_eq!(engine.render_commands().len(), 1);
    }

    #[test]
    fn test_escape_cancels_drag() {
        let mut handler = InputHandler::new();
        handler.process_sample(PointerSample {
            drag_started: true,
            dragging: true,
            position: at(0.0, 0.0),
            ..Default::default()
        });
        let events = handler.process_sample(PointerSample {
            dragging: true,
            cancel_requested: true,
            position: at(5.0, 5.0),
            ..Default::default()
        });
        assert_eq!(events, vec![DragEvent::Cancel]);

        // The rest of the cancelled drag is ignored
        let events = handler.process_sample(PointerSample {
            drag_stopped: true,
            position: at(5.0, 5.0),
            ..Default::default()
        });
        assert!(events.is_empty());
    }
}
