use super::*;
use crate::theme::accent_colors;

/// Accent swatches offered on the appearance tab.
const ACCENT_COLORS: [&str; 8] = [
    "#3b82f6", // Blue
    "#ef4444", // Red
    "#f97316", // Orange
    "#f59e0b", // Amber
    "#10b981", // Emerald
    "#06b6d4", // Cyan
    "#8b5cf6", // Violet
    "#d946ef", // Fuchsia
];

const ZOOM_LEVELS: [u8; 5] = [80, 90, 100, 110, 120];

impl GuiApp {
    pub(crate) fn render_settings_page(&mut self, ui: &mut egui::Ui) {
        ui.heading("Settings");
        ui.horizontal(|ui| {
            for (tab, label) in [
                (SettingsTab::Appearance, "Appearance"),
                (SettingsTab::Presets, "Launch presets"),
            ] {
                if ui.selectable_label(self.settings_tab == tab, label).clicked() {
                    self.settings_tab = tab;
                }
            }
        });
        ui.separator();

        if !self.settings.is_loaded() {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("Settings could not be loaded from the backend.")
                        .color(egui::Color32::LIGHT_RED),
                );
                if ui.button("Retry").clicked() {
                    match self.settings.reload(self.backend.as_ref()) {
                        Ok(()) => self.appearance_dirty = true,
                        Err(err) => log::error!("settings reload failed: {err}"),
                    }
                }
            });
            ui.separator();
        }

        match self.settings_tab {
            SettingsTab::Appearance => self.render_appearance_tab(ui),
            SettingsTab::Presets => self.render_presets_tab(ui),
        }
    }

    fn render_appearance_tab(&mut self, ui: &mut egui::Ui) {
        ui.label(RichText::new("Theme").strong());
        let current_theme = self.settings.settings().theme;
        ui.horizontal(|ui| {
            for (theme, label) in [
                (ThemePreference::Light, "Light"),
                (ThemePreference::Dark, "Dark"),
                (ThemePreference::System, "System"),
            ] {
                if ui.selectable_label(current_theme == theme, label).clicked() {
                    self.settings.set_theme(self.backend.as_ref(), theme);
                    self.appearance_dirty = true;
                }
            }
        });
        ui.add_space(12.0);

        ui.label(RichText::new("Accent color").strong());
        let current_accent = self.settings.settings().accent_color.clone();
        ui.horizontal(|ui| {
            for hex in ACCENT_COLORS {
                let (fill, _) = accent_colors(hex);
                let selected = current_accent.eq_ignore_ascii_case(hex);
                let size = egui::Vec2 { x: 28.0, y: 28.0 };
                let button = egui::Button::new(if selected { "✔" } else { "" })
                    .fill(fill)
                    .rounding(egui::Rounding::same(14.0))
                    .min_size(size);
                if ui.add_sized(size, button).clicked() {
                    self.settings
                        .set_accent_color(self.backend.as_ref(), hex.to_string());
                    self.appearance_dirty = true;
                }
            }
        });
        ui.add_space(12.0);

        ui.label(RichText::new("Zoom").strong());
        let current_zoom = self.settings.settings().zoom_level;
        egui::ComboBox::from_id_source("zoom_level")
            .selected_text(format!("{current_zoom}%"))
            .show_ui(ui, |ui| {
                for zoom in ZOOM_LEVELS {
                    if ui
                        .selectable_label(current_zoom == zoom, format!("{zoom}%"))
                        .clicked()
                    {
                        self.settings.set_zoom_level(self.backend.as_ref(), zoom);
                        self.appearance_dirty = true;
                    }
                }
            });
    }

    fn render_presets_tab(&mut self, ui: &mut egui::Ui) {
        ui.label(
            RichText::new("Presets prefill the launch configuration of new projects.").weak(),
        );
        if styled_button(ui, "New preset").clicked() {
            self.preset_dialog.open_new();
        }
        ui.add_space(8.0);

        let presets: Vec<LaunchPreset> = self.settings.presets().to_vec();
        if presets.is_empty() {
            ui.label("No presets yet.");
            return;
        }

        let mut edit: Option<LaunchPreset> = None;
        let mut delete: Option<LaunchPreset> = None;
        for preset in &presets {
            ui.horizontal(|ui| {
                ui.label(RichText::new(&preset.name).strong());
                ui.label(RichText::new(preset.config.mode_label()).weak());
                if let Some(description) = &preset.description {
                    ui.label(RichText::new(description).weak());
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("Delete").clicked() {
                        delete = Some(preset.clone());
                    }
                    if ui.small_button("Edit").clicked() {
                        edit = Some(preset.clone());
                    }
                });
            });
            ui.separator();
        }

        if let Some(preset) = edit {
            self.preset_dialog.open_edit(&preset);
        }
        if let Some(preset) = delete {
            self.show_confirm(
                "Delete preset",
                &format!("Delete preset \"{}\"?", preset.name),
                "Delete",
                ConfirmAction::DeletePreset(preset.id),
            );
        }
    }

    /// Renders the preset create/edit dialog.
    pub(crate) fn render_preset_dialog(&mut self, ctx: &egui::Context) {
        if !self.preset_dialog.open {
            return;
        }

        let title = if self.preset_dialog.editing.is_some() {
            "Edit preset"
        } else {
            "New preset"
        };
        let mut submit = false;
        let mut cancel = false;

        let mut open = self.preset_dialog.open;
        egui::Window::new(title)
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.set_min_width(360.0);
                ui.horizontal(|ui| {
                    ui.label("Name");
                    ui.text_edit_singleline(&mut self.preset_dialog.name);
                });
                ui.horizontal(|ui| {
                    ui.label("Description");
                    ui.text_edit_singleline(&mut self.preset_dialog.description);
                });
                ui.separator();
                mode_selector(ui, &mut self.preset_dialog.mode);
                match self.preset_dialog.mode {
                    OpenMode::SystemDefault => {
                        ui.label(
                            RichText::new("Projects open with the system file manager.").weak(),
                        );
                    }
                    OpenMode::CustomApp => {
                        ui.horizontal(|ui| {
                            ui.label("Executable");
                            ui.text_edit_singleline(&mut self.preset_dialog.executable);
                        });
                        ui.horizontal(|ui| {
                            ui.label("Arguments");
                            ui.text_edit_singleline(&mut self.preset_dialog.args);
                        });
                    }
                    OpenMode::CustomCommand => {
                        ui.horizontal(|ui| {
                            ui.label("Command");
                            ui.text_edit_singleline(&mut self.preset_dialog.command);
                        });
                        ui.horizontal(|ui| {
                            ui.label("Arguments");
                            ui.text_edit_singleline(&mut self.preset_dialog.args);
                        });
                    }
                }
                ui.separator();
                ui.horizontal(|ui| {
                    if styled_button(ui, "Cancel").clicked() {
                        cancel = true;
                    }
                    if styled_button(ui, "Save").clicked() {
                        submit = true;
                    }
                });
            });
        self.preset_dialog.open = open;

        if cancel {
            self.preset_dialog.open = false;
        }
        if submit {
            if let Some(reason) = self.preset_dialog.validation_error() {
                self.show_info("Preset", reason);
            } else {
                self.settings
                    .upsert_preset(self.backend.as_ref(), self.preset_dialog.to_input());
                self.preset_dialog.open = false;
            }
        }
    }
}
