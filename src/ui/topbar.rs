use egui::{Color32, RichText, Ui};

use crate::app::{TodoApp, View};
use crate::ui::theme;

/// Render the top bar: app title on the left, navigation on the right.
pub fn show_topbar(app: &mut TodoApp, ui: &mut Ui) {
    ui.horizontal(|ui| {
        ui.label(
            RichText::new("Rust Todo")
                .font(theme::font_title())
                .strong()
                .color(theme::TEXT_PRIMARY),
        );

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            match app.view {
                View::Dashboard => {
                    let btn = egui::Button::new(
                        RichText::new(format!("{}  New task", egui_phosphor::regular::PLUS))
                            .color(Color32::WHITE)
                            .size(13.0),
                    )
                    .fill(theme::ACCENT)
                    .rounding(egui::Rounding::same(4.0));
                    if ui.add_sized([130.0, 30.0], btn).clicked() {
                        app.open_new_task_form();
                    }
                }
                View::NewTask => {
                    let btn = egui::Button::new(
                        RichText::new(format!("{}  Back", egui_phosphor::regular::ARROW_LEFT))
                            .size(13.0),
                    )
                    .rounding(egui::Rounding::same(4.0));
                    if ui.add_sized([100.0, 30.0], btn).clicked() {
                        app.view = View::Dashboard;
                    }
                }
            }
        });
    });
}
