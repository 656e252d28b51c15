use bevy_egui::egui;

use scene::error::PlacementError;
use scene::keybindings::{BindableAction, KeyBindings};

use crate::theme::{BUTTON_ACTIVE, BUTTON_GREEN};

// ---------------------------------------------------------------------------
// Buttons
// ---------------------------------------------------------------------------

/// Filled green button; the selected one is darker with a white outline.
pub(crate) fn tool_button(ui: &mut egui::Ui, label: &str, active: bool) -> egui::Response {
    filled_button(ui, label, if active { BUTTON_ACTIVE } else { BUTTON_GREEN }, active)
}

pub(crate) fn filled_button(
    ui: &mut egui::Ui,
    label: &str,
    fill: egui::Color32,
    outlined: bool,
) -> egui::Response {
    let text = egui::RichText::new(label)
        .color(egui::Color32::WHITE)
        .strong();
    let mut button = egui::Button::new(text).fill(fill);
    if outlined {
        button = button.stroke(egui::Stroke::new(2.0, egui::Color32::WHITE));
    }
    ui.add(button)
}

// ---------------------------------------------------------------------------
// Labels
// ---------------------------------------------------------------------------

/// `"Place Road (G)"`
pub(crate) fn with_shortcut(label: &str, bindings: &KeyBindings, action: BindableAction) -> String {
    format!("{} ({})", label, bindings.get(action).display_label())
}

pub(crate) fn format_counts(buildings: usize, roads: usize) -> String {
    let plural = |n: usize, word: &str| {
        if n == 1 {
            format!("{n} {word}")
        } else {
            format!("{n} {word}s")
        }
    };
    format!("{}, {}", plural(buildings, "building"), plural(roads, "road"))
}

pub(crate) fn rotation_hint(bindings: &KeyBindings) -> String {
    format!(
        "{} / {} to rotate",
        bindings.get(BindableAction::RotateClockwise).display_label(),
        bindings
            .get(BindableAction::RotateCounterClockwise)
            .display_label()
    )
}

pub(crate) fn status_text(rejection: Option<PlacementError>) -> Option<String> {
    rejection.map(|err| err.to_string())
}
