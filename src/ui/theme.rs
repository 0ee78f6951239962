use egui::{Color32, FontId, Rounding, Stroke, Visuals};

use crate::model::Priority;

// ── Palette ──────────────────────────────────────────────────────────────────

pub const BG_DARK: Color32 = Color32::from_rgb(13, 13, 13);
pub const BG_PANEL: Color32 = Color32::from_rgb(22, 22, 26);
pub const BG_ROW: Color32 = Color32::from_rgb(28, 28, 34);
pub const BG_FIELD: Color32 = Color32::from_rgb(18, 18, 22);

pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(46, 46, 54);

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(230, 232, 240);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(155, 160, 178);
pub const TEXT_DIM: Color32 = Color32::from_rgb(100, 105, 120);

pub const ACCENT: Color32 = Color32::from_rgb(92, 110, 220);
pub const FILTER_ACTIVE_BG: Color32 = Color32::from_rgba_premultiplied(255, 255, 255, 50);

pub const PRIORITY_LOW: Color32 = Color32::from_rgb(75, 175, 80);
pub const PRIORITY_MEDIUM: Color32 = Color32::from_rgb(255, 235, 59);
pub const PRIORITY_HIGH: Color32 = Color32::from_rgb(244, 67, 54);

pub fn priority_color(priority: Priority) -> Color32 {
    match priority {
        Priority::Low => PRIORITY_LOW,
        Priority::Medium => PRIORITY_MEDIUM,
        Priority::High => PRIORITY_HIGH,
    }
}

// ── Sizes ────────────────────────────────────────────────────────────────────

pub const SWATCH_SIZE: f32 = 15.0;
pub const ROW_ROUNDING: f32 = 4.0;

// ── Fonts ────────────────────────────────────────────────────────────────────

pub fn font_title() -> FontId {
    FontId::proportional(26.0)
}

pub fn font_row() -> FontId {
    FontId::proportional(13.5)
}

pub fn font_status() -> FontId {
    FontId::proportional(10.5)
}

// ── Apply custom visuals ─────────────────────────────────────────────────────

pub fn apply_theme(ctx: &egui::Context) {
    let mut visuals = Visuals::dark();

    visuals.override_text_color = Some(TEXT_PRIMARY);
    visuals.panel_fill = BG_DARK;
    visuals.window_fill = BG_PANEL;
    visuals.extreme_bg_color = BG_FIELD; // TextEdit bg
    visuals.faint_bg_color = BG_ROW;

    visuals.widgets.noninteractive.bg_fill = BG_PANEL;
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, BORDER_SUBTLE);
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, TEXT_SECONDARY);
    visuals.widgets.noninteractive.rounding = Rounding::same(4.0);

    visuals.widgets.inactive.bg_fill = Color32::from_rgb(36, 36, 44);
    visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, BORDER_SUBTLE);
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.inactive.rounding = Rounding::same(4.0);

    visuals.widgets.hovered.bg_fill = Color32::from_rgb(46, 46, 56);
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, ACCENT);
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.hovered.rounding = Rounding::same(4.0);

    visuals.widgets.active.bg_fill = Color32::from_rgb(54, 54, 66);
    visuals.widgets.active.bg_stroke = Stroke::new(1.0, ACCENT);
    visuals.widgets.active.fg_stroke = Stroke::new(2.0, Color32::WHITE);
    visuals.widgets.active.rounding = Rounding::same(4.0);

    visuals.selection.bg_fill = Color32::from_rgba_premultiplied(92, 110, 220, 60);
    visuals.selection.stroke = Stroke::new(1.0, ACCENT);

    visuals.window_rounding = Rounding::same(8.0);
    visuals.window_stroke = Stroke::new(1.0, BORDER_SUBTLE);
    visuals.striped = false;

    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 5.0);
    ctx.set_style(style);
}
