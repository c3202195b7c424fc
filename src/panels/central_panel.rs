use crate::PaintApp;
use crate::input::route_event;
use crate::renderer;

pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::drag());
            let canvas_rect = response.rect;

            // Route the canvas drag into the engine
            for event in app.input.process_response(&response) {
                if let Some(stroke) = route_event(&mut app.engine, event, &app.settings) {
                    log::debug!("Committed {}", stroke.id());
                }
            }

            // Render the canvas
            painter.rect_filled(canvas_rect, 0.0, app.canvas_background());
            let commands = app.engine.render_commands();
            renderer::paint(&painter, &commands, canvas_rect.min.to_vec2());

            if app.engine.is_drawing() {
                ctx.request_repaint();
            }
        });
}
