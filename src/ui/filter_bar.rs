use egui::{RichText, Ui};

use crate::model::EntryFilter;
use crate::ui::theme;

/// Render the six filter categories, right-aligned, with the active one
/// highlighted. Returns true when the selection changed this frame.
pub fn show_filter_bar(current: &mut EntryFilter, ui: &mut Ui) -> bool {
    let mut changed = false;

    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        ui.spacing_mut().item_spacing.x = 4.0;

        // Right-to-left layout places the first widget at the right edge, so
        // iterate reversed to keep the visual order ALL .. HIGH.
        for filter in EntryFilter::ALL.iter().rev() {
            let active = *current == *filter;
            let text = RichText::new(filter.label()).size(11.5).color(if active {
                theme::TEXT_PRIMARY
            } else {
                theme::TEXT_SECONDARY
            });
            let btn = egui::Button::new(text)
                .fill(if active {
                    theme::FILTER_ACTIVE_BG
                } else {
                    egui::Color32::TRANSPARENT
                })
                .rounding(egui::Rounding::same(8.0));
            if ui.add(btn).clicked() && !active {
                *current = *filter;
                changed = true;
            }
        }
    });

    changed
}
