use eframe::egui;

/// Square icon button for the tool and effect pickers
pub struct ToolButton {
    pub icon: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

impl ToolButton {
    pub fn new(icon: &'static str, label: &'static str, selected: bool) -> Self {
        Self {
            icon,
            label,
            selected,
        }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let button_size = egui::vec2(32.0, 32.0);
        let (rect, response) = ui.allocate_exact_size(button_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let visuals = ui.style().interact(&response);
            let bg_color = if self.selected {
                ui.visuals().selection.bg_fill
            } else {
                visuals.weak_bg_fill
            };

            ui.painter().rect_filled(rect, 4.0, bg_color);

            let text_color = if self.selected {
                ui.visuals().selection.stroke.color
            } else {
                visuals.text_color()
            };
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.icon,
                egui::FontId::proportional(20.0),
                text_color,
            );

            if self.selected {
                ui.painter().rect_stroke(rect, 4.0, ui.visuals().selection.stroke);
            }
        }

        response.on_hover_text(self.label)
    }
}
