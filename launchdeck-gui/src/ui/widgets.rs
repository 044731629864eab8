//! Shared UI widgets used across the pages and dialogs.

use eframe::egui;

use crate::state::OpenMode;

/// Creates a styled button with consistent sizing.
pub fn styled_button(ui: &mut egui::Ui, label: impl Into<egui::WidgetText>) -> egui::Response {
    ui.add_sized(
        super::BUTTON_SIZE,
        egui::Button::new(label).min_size(super::BUTTON_SIZE),
    )
}

/// Three-way launch mode selector. Returns `true` when the mode changed.
pub fn mode_selector(ui: &mut egui::Ui, mode: &mut OpenMode) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        for candidate in OpenMode::ALL {
            if ui
                .selectable_label(*mode == candidate, candidate.label())
                .clicked()
            {
                *mode = candidate;
                changed = true;
            }
        }
    });
    changed
}
