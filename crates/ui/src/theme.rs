use bevy_egui::{egui, EguiContexts};

/// Primary button green.
pub const BUTTON_GREEN: egui::Color32 = egui::Color32::from_rgb(0x4C, 0xAF, 0x50);
/// Darker green marking the selected tool or building type.
pub const BUTTON_ACTIVE: egui::Color32 = egui::Color32::from_rgb(0x45, 0xA0, 0x49);
/// Destructive action red ("Clear All").
pub const BUTTON_DANGER: egui::Color32 = egui::Color32::from_rgb(0xF4, 0x43, 0x36);
/// Status line colour for rejected placements.
pub const STATUS_WARN: egui::Color32 = egui::Color32::from_rgb(0xC6, 0x28, 0x28);

pub fn apply_town_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::light();

    // Translucent white panel over the sky-blue canvas
    let panel = egui::Color32::from_rgba_unmultiplied(255, 255, 255, 230);
    let hover = egui::Color32::from_rgb(0x66, 0xBB, 0x6A);

    style.visuals.window_fill = panel;
    style.visuals.panel_fill = panel;
    style.visuals.widgets.inactive.bg_fill = BUTTON_GREEN;
    style.visuals.widgets.inactive.weak_bg_fill = BUTTON_GREEN;
    style.visuals.widgets.hovered.bg_fill = hover;
    style.visuals.widgets.hovered.weak_bg_fill = hover;
    style.visuals.widgets.active.bg_fill = BUTTON_ACTIVE;
    style.visuals.widgets.active.weak_bg_fill = BUTTON_ACTIVE;

    style.visuals.selection.bg_fill = BUTTON_ACTIVE;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, BUTTON_ACTIVE);

    let window_rounding = egui::CornerRadius::same(5);
    let widget_rounding = egui::CornerRadius::same(4);

    style.visuals.window_corner_radius = window_rounding;
    style.visuals.widgets.noninteractive.corner_radius = widget_rounding;
    style.visuals.widgets.inactive.corner_radius = widget_rounding;
    style.visuals.widgets.hovered.corner_radius = widget_rounding;
    style.visuals.widgets.active.corner_radius = widget_rounding;

    style.spacing.button_padding = egui::vec2(10.0, 5.0);

    ctx.set_style(style);
}
