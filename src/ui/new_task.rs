use egui::{Color32, RichText, Ui};

use crate::app::{TodoApp, View};
use crate::model::Priority;
use crate::ui::theme;

/// Render the new-task form view.
pub fn show_new_task(app: &mut TodoApp, ui: &mut Ui) {
    ui.add_space(12.0);
    ui.label(
        RichText::new("Add a new task")
            .strong()
            .size(15.0)
            .color(theme::TEXT_PRIMARY),
    );
    ui.add_space(8.0);

    egui::Grid::new("new_task_grid")
        .num_columns(2)
        .striped(false)
        .spacing([12.0, 10.0])
        .show(ui, |ui| {
            ui.label(RichText::new("Description").color(theme::TEXT_SECONDARY));
            ui.add_sized(
                [280.0, 26.0],
                egui::TextEdit::singleline(&mut app.new_task_description)
                    .hint_text("What needs doing?")
                    .text_color(theme::TEXT_PRIMARY),
            );
            ui.end_row();

            ui.label(RichText::new("Priority").color(theme::TEXT_SECONDARY));
            ui.horizontal(|ui| {
                for priority in Priority::ALL {
                    let selected = app.new_task_priority == priority;
                    let text = RichText::new(priority.label())
                        .size(11.5)
                        .color(theme::priority_color(priority));
                    if ui.selectable_label(selected, text).clicked() {
                        app.new_task_priority = priority;
                    }
                }
            });
            ui.end_row();
        });

    ui.add_space(10.0);
    ui.separator();
    ui.add_space(6.0);

    let description_ok = !app.new_task_description.trim().is_empty();
    let has_room = !app.store.is_full();

    ui.horizontal(|ui| {
        let add_btn = egui::Button::new(RichText::new("Add task").color(Color32::WHITE))
            .fill(theme::ACCENT)
            .rounding(egui::Rounding::same(4.0));
        let add_clicked = ui
            .add_enabled_ui(description_ok && has_room, |ui| {
                ui.add_sized([100.0, 28.0], add_btn)
            })
            .inner
            .clicked();
        if add_clicked {
            app.add_entry_from_form();
        }

        if ui
            .add_sized([100.0, 28.0], egui::Button::new("Cancel"))
            .clicked()
        {
            app.reset_form_fields();
            app.view = View::Dashboard;
        }
    });

    if !has_room {
        ui.add_space(6.0);
        ui.label(
            RichText::new(format!(
                "Task limit reached ({} entries). Remove something first.",
                app.store.capacity()
            ))
            .size(11.0)
            .color(theme::PRIORITY_HIGH),
        );
    }
}
