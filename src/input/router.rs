use crate::config::BrushSettings;
use crate::effect::RandomSource;
use crate::engine::DrawingEngine;
use crate::error::EngineError;
use crate::stroke::StrokeRef;

use super::DragEvent;

/// Apply a drag event to the engine. Returns the stroke committed by
/// [`DragEvent::End`], if any.
///
/// Engine errors are logged and recovered from by dropping back to the idle
/// state, so a confused input stream never leaves a stroke half drawn.
pub fn route_event<R: RandomSource>(
    engine: &mut DrawingEngine<R>,
    event: DragEvent,
    settings: &BrushSettings,
) -> Option<StrokeRef> {
    match event {
        DragEvent::Begin(point) => {
            if let Err(err) = engine.begin_stroke_with(point, settings) {
                recover(engine, &err);
                // Stale drag from a lost release: start over from this one
                if err.is_invalid_state() {
                    if let Err(err) = engine.begin_stroke_with(point, settings) {
                        recover(engine, &err);
                    }
                }
            }
            None
        }
        DragEvent::Move(point) => {
            if let Err(err) = engine.update_stroke(point, settings) {
                recover(engine, &err);
            }
            None
        }
        DragEvent::End => engine.end_stroke().map_err(|err| recover(engine, &err)).ok(),
        DragEvent::Cancel => {
            engine.cancel_stroke();
            None
        }
    }
}

fn recover<R: RandomSource>(engine: &mut DrawingEngine<R>, err: &EngineError) {
    log::warn!("Ignoring drag event: {err}");
    if err.is_invalid_state() {
        engine.cancel_stroke();
    }
}
