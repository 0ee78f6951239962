use egui::{RichText, Ui};

use crate::model::{EntryFilter, EntryStore};
use crate::ui::theme;

/// Actions that a row in the entry list can request.
///
/// Indices refer to positions in the store as rendered this frame; the caller
/// must apply the action before the store mutates again.
pub enum EntryListAction {
    None,
    ToggleCompleted(usize),
    CyclePriority(usize),
    StartEdit(usize),
    CommitEdit(usize),
    CancelEdit(usize),
    Delete(usize),
}

/// Render the scrollable list of entries matching the active filter.
pub fn show_entry_list(
    store: &mut EntryStore,
    filter: EntryFilter,
    ui: &mut Ui,
) -> EntryListAction {
    let mut action = EntryListAction::None;

    let visible: Vec<usize> = store.iter_filtered(filter).map(|(i, _)| i).collect();

    if visible.is_empty() {
        ui.add_space(40.0);
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("Nothing here yet.")
                    .size(13.0)
                    .color(theme::TEXT_DIM),
            );
        });
        return action;
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for index in visible {
                let Some(entry) = store.get_mut(index) else {
                    continue;
                };

                let frame = egui::Frame {
                    fill: theme::BG_ROW,
                    rounding: egui::Rounding::same(theme::ROW_ROUNDING),
                    inner_margin: egui::Margin::symmetric(8.0, 6.0),
                    outer_margin: egui::Margin::ZERO,
                    stroke: egui::Stroke::NONE,
                    shadow: egui::epaint::Shadow::NONE,
                };

                frame.show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.spacing_mut().item_spacing.x = 8.0;

                        // Priority swatch
                        let (swatch_rect, swatch_resp) = ui.allocate_exact_size(
                            egui::vec2(theme::SWATCH_SIZE, theme::SWATCH_SIZE),
                            egui::Sense::hover(),
                        );
                        ui.painter().rect_filled(
                            swatch_rect,
                            egui::Rounding::same(4.0),
                            theme::priority_color(entry.priority),
                        );
                        swatch_resp.on_hover_text(entry.priority.label());

                        // Completion checkbox
                        let mut completed = entry.completed;
                        if ui
                            .add(egui::Checkbox::without_text(&mut completed))
                            .changed()
                        {
                            action = EntryListAction::ToggleCompleted(index);
                        }

                        // Description, or the edit field while revising
                        if entry.editing {
                            let resp = ui.add(
                                egui::TextEdit::singleline(&mut entry.edit_buffer)
                                    .desired_width(260.0)
                                    .font(egui::TextStyle::Body),
                            );
                            if resp.lost_focus()
                                && ui.input(|i| i.key_pressed(egui::Key::Enter))
                            {
                                action = EntryListAction::CommitEdit(index);
                            } else if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                                action = EntryListAction::CancelEdit(index);
                            } else {
                                resp.request_focus();
                            }
                        } else {
                            let mut text = RichText::new(&entry.description)
                                .font(theme::font_row())
                                .color(theme::TEXT_PRIMARY);
                            if entry.completed {
                                text = text.strikethrough().color(theme::TEXT_DIM);
                            }
                            ui.add(egui::Label::new(text).truncate());
                        }

                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                ui.spacing_mut().item_spacing.x = 4.0;

                                let icon_btn = |icon: &str| {
                                    egui::Button::new(
                                        RichText::new(icon)
                                            .size(14.0)
                                            .color(theme::TEXT_SECONDARY),
                                    )
                                    .frame(false)
                                };

                                if ui
                                    .add(icon_btn(egui_phosphor::regular::TRASH))
                                    .on_hover_text("Delete task")
                                    .clicked()
                                {
                                    action = EntryListAction::Delete(index);
                                }

                                if entry.editing {
                                    if ui
                                        .add(icon_btn(egui_phosphor::regular::X))
                                        .on_hover_text("Discard changes")
                                        .clicked()
                                    {
                                        action = EntryListAction::CancelEdit(index);
                                    }
                                    if ui
                                        .add(icon_btn(egui_phosphor::regular::CHECK))
                                        .on_hover_text("Save description")
                                        .clicked()
                                    {
                                        action = EntryListAction::CommitEdit(index);
                                    }
                                } else {
                                    if ui
                                        .add(icon_btn(egui_phosphor::regular::PENCIL_SIMPLE))
                                        .on_hover_text("Edit description")
                                        .clicked()
                                    {
                                        action = EntryListAction::StartEdit(index);
                                    }
                                    if ui
                                        .add(icon_btn(egui_phosphor::regular::ARROWS_CLOCKWISE))
                                        .on_hover_text("Cycle priority")
                                        .clicked()
                                    {
                                        action = EntryListAction::CyclePriority(index);
                                    }
                                }

                                ui.label(
                                    RichText::new(&entry.date)
                                        .size(10.0)
                                        .color(theme::TEXT_DIM),
                                );
                            },
                        );
                    });
                });

                ui.add_space(2.0);
            }
        });

    action
}
