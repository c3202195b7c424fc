use crate::PaintApp;
use crate::components::ToolButton;
use crate::effect::Effect;
use crate::tools::Tool;

fn tool_icon(tool: Tool) -> &'static str {
    match tool {
        Tool::Freehand => "✏",
        Tool::StraightLine => "╱",
        Tool::Rectangle => "▭",
    }
}

fn effect_icon(effect: Effect) -> &'static str {
    match effect {
        Effect::Normal => "●",
        Effect::Rainbow => "🌈",
        Effect::Sprinkles => "✨",
    }
}

pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Tools");
            ui.horizontal(|ui| {
                for tool in Tool::ALL {
                    let button = ToolButton::new(tool_icon(tool), tool.name(), app.settings.tool == tool);
                    if button.show(ui).clicked() {
                        log::info!("Tool selected from UI: {}", tool.name());
                        app.settings.tool = tool;
                    }
                }
            });

            ui.separator();
            ui.heading("Effects");
            ui.horizontal(|ui| {
                for effect in Effect::ALL {
                    let button =
                        ToolButton::new(effect_icon(effect), effect.name(), app.settings.effect == effect);
                    if button.show(ui).clicked() {
                        log::info!("Effect selected from UI: {}", effect.name());
                        app.settings.effect = effect;
                    }
                }
            });
            ui.checkbox(&mut app.settings.eraser, "Eraser");

            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Color:");
                egui::color_picker::color_edit_button_srgba(
                    ui,
                    &mut app.settings.color,
                    egui::color_picker::Alpha::Opaque,
                );
            });
            ui.horizontal(|ui| {
                ui.label("Width:");
                ui.add(egui::Slider::new(
                    &mut app.settings.width,
                    app.config.min_width..=50.0,
                ));
            });

            ui.separator();

            ui.horizontal(|ui| {
                let has_strokes = !app.engine.history().is_empty();
                if ui.add_enabled(has_strokes, egui::Button::new("Undo")).clicked() {
                    app.engine.undo();
                }
                if ui.add_enabled(has_strokes, egui::Button::new("Clear")).clicked() {
                    app.engine.clear_all();
                }
                let filter_label = if app.engine.is_filter_active() {
                    "Unfilter"
                } else {
                    "Filter"
                };
                if ui.button(filter_label).clicked() {
                    app.engine.toggle_filter();
                }
            });
            ui.label(format!("Strokes: {}", app.engine.history().len()));

            ui.separator();

            let mut dark_mode = app.dark_mode;
            if ui.checkbox(&mut dark_mode, "Dark mode").changed() {
                app.set_dark_mode(ctx, dark_mode);
            }
        });
}
