use egui::{Color32, Painter, Shape, Stroke as EguiStroke, Vec2};

use crate::stroke::{Point, Stroke, StrokeId};

/// One path to draw: consecutive points joined by straight segments
#[derive(Debug, Clone, PartialEq)]
pub struct RenderCommand {
    pub stroke_id: StrokeId,
    pub points: Vec<Point>,
    pub color: Color32,
    pub width: f32,
}

impl RenderCommand {
    fn from_stroke(stroke: &Stroke) -> Option<Self> {
        if stroke.is_empty() {
            return None;
        }

        Some(Self {
            stroke_id: stroke.id(),
            points: stroke.points().to_vec(),
            color: stroke.color(),
            width: stroke.width(),
        })
    }
}

/// Produce draw commands for `history` in order, then `in_progress` on top.
///
/// Pure: reads its inputs only, so it can run every frame.
pub fn render<'a>(
    history: impl IntoIterator<Item = &'a Stroke>,
    in_progress: Option<&'a Stroke>,
) -> Vec<RenderCommand> {
    history
        .into_iter()
        .chain(in_progress)
        .filter_map(RenderCommand::from_stroke)
        .collect()
}

/// Draw commands with an egui painter. `offset` maps canvas space to screen
/// space.
pub fn paint(painter: &Painter, commands: &[RenderCommand], offset: Vec2) {
    for command in commands {
        match command.points.as_slice() {
            [] => {}
            [dot] => {
                painter.circle_filled(*dot + offset, command.width / 2.0, command.color);
            }
            points => {
                painter.add(Shape::line(
                    points.iter().map(|point| *point + offset).collect(),
                    EguiStroke::new(command.width, command.color),
                ));
            }
        }
    }
}
