use super::*;
use crate::file_dialogs::spawn_file_dialog_thread;
use std::sync::mpsc;

/// Deferred row action, applied after the list has been drawn.
enum ProjectAction {
    Launch(Uuid),
    Stop(Uuid),
    Edit(Project),
    Delete(Project),
}

impl GuiApp {
    /// Renders the project list page: toolbar, search and the grid/list body.
    pub(crate) fn render_projects_page(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Projects");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if styled_button(ui, "New project").clicked() {
                    self.project_dialog.open_new();
                }
                ui.add(
                    egui::TextEdit::singleline(&mut self.search_query)
                        .hint_text("Search by name or path")
                        .desired_width(220.0),
                );
                for (mode, label) in [(ViewMode::Grid, "Grid"), (ViewMode::List, "List")] {
                    if ui.selectable_label(self.view_mode == mode, label).clicked() {
                        self.view_mode = mode;
                    }
                }
            });
        });
        ui.label(
            RichText::new(format!(
                "{} projects, {} running",
                self.registry.projects().len(),
                self.registry.running_count()
            ))
            .weak(),
        );
        ui.separator();

        let filtered: Vec<Project> = self
            .registry
            .filtered(&self.search_query)
            .into_iter()
            .cloned()
            .collect();

        if filtered.is_empty() {
            ui.add_space(24.0);
            ui.vertical_centered(|ui| {
                if self.registry.projects().is_empty() {
                    ui.label("No projects yet. Create one to get started.");
                } else {
                    ui.label("No projects match the search.");
                }
            });
            return;
        }

        let mut action: Option<ProjectAction> = None;
        egui::ScrollArea::vertical().show(ui, |ui| match self.view_mode {
            ViewMode::Grid => {
                ui.horizontal_wrapped(|ui| {
                    for project in &filtered {
                        self.project_card(ui, project, &mut action);
                    }
                });
            }
            ViewMode::List => {
                for project in &filtered {
                    self.project_row(ui, project, &mut action);
                    ui.separator();
                }
            }
        });

        match action {
            Some(ProjectAction::Launch(id)) => {
                if self.registry.launch(self.backend.as_ref(), id) {
                    self.show_info("Project", "Project launched.");
                } else {
                    self.show_info("Project", "Failed to launch the project.");
                }
            }
            Some(ProjectAction::Stop(id)) => {
                if !self.registry.stop(self.backend.as_ref(), id) {
                    self.show_info("Project", "Failed to stop the project.");
                }
            }
            Some(ProjectAction::Edit(project)) => self.project_dialog.open_edit(&project),
            Some(ProjectAction::Delete(project)) => self.show_confirm(
                "Delete project",
                &format!("Delete project \"{}\"?", project.name),
                "Delete",
                ConfirmAction::DeleteProject(project.id),
            ),
            None => {}
        }
    }

    fn project_card(
        &self,
        ui: &mut egui::Ui,
        project: &Project,
        action: &mut Option<ProjectAction>,
    ) {
        egui::Frame::group(ui.style())
            .rounding(egui::Rounding::same(6.0))
            .show(ui, |ui| {
                ui.set_width(240.0);
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(&project.name).strong().size(15.0));
                        if self.registry.is_running(project.id) {
                            ui.label(RichText::new("running").color(egui::Color32::GREEN).small());
                        }
                    });
                    ui.label(
                        RichText::new(project.path.to_string_lossy())
                            .weak()
                            .small(),
                    );
                    ui.label(RichText::new(project.open_config.mode_label()).small());
                    if let Some(description) = &project.description {
                        ui.label(description);
                    }
                    self.project_buttons(ui, project, action);
                });
            });
    }

    fn project_row(
        &self,
        ui: &mut egui::Ui,
        project: &Project,
        action: &mut Option<ProjectAction>,
    ) {
        ui.horizontal(|ui| {
            ui.label(RichText::new(&project.name).strong());
            if self.registry.is_running(project.id) {
                ui.label(RichText::new("running").color(egui::Color32::GREEN).small());
            }
            ui.label(RichText::new(project.path.to_string_lossy()).weak());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                self.project_buttons(ui, project, action);
            });
        });
    }

    fn project_buttons(
        &self,
        ui: &mut egui::Ui,
        project: &Project,
        action: &mut Option<ProjectAction>,
    ) {
        ui.horizontal(|ui| {
            if self.registry.is_running(project.id) {
                if self.registry.is_stopping(project.id) {
                    ui.spinner();
                } else if ui.button("Stop").clicked() {
                    *action = Some(ProjectAction::Stop(project.id));
                }
            } else if ui.button("Launch").clicked() {
                *action = Some(ProjectAction::Launch(project.id));
            }
            if ui.button("Edit").clicked() {
                *action = Some(ProjectAction::Edit(project.clone()));
            }
            if ui.button("Delete").clicked() {
                *action = Some(ProjectAction::Delete(project.clone()));
            }
        });
    }

    /// Renders the project create/edit dialog.
    pub(crate) fn render_project_dialog(&mut self, ctx: &egui::Context) {
        if !self.project_dialog.open {
            return;
        }

        let title = if self.project_dialog.editing.is_some() {
            "Edit project"
        } else {
            "New project"
        };
        let mut submit = false;
        let mut cancel = false;
        let mut browse = false;
        let mut chosen_preset: Option<LaunchPreset> = None;
        let presets: Vec<LaunchPreset> = self.settings.presets().to_vec();

        let mut open = self.project_dialog.open;
        egui::Window::new(title)
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.set_min_width(380.0);
                egui::Grid::new("project_form")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        ui.label("Name");
                        ui.text_edit_singleline(&mut self.project_dialog.name);
                        ui.end_row();

                        ui.label("Folder");
                        ui.horizontal(|ui| {
                            ui.text_edit_singleline(&mut self.project_dialog.path);
                            if ui.button("Browse…").clicked() {
                                browse = true;
                            }
                        });
                        ui.end_row();

                        ui.label("Description");
                        ui.text_edit_multiline(&mut self.project_dialog.description);
                        ui.end_row();
                    });

                ui.separator();
                ui.label(RichText::new("Launch configuration").strong());
                mode_selector(ui, &mut self.project_dialog.mode);
                if !presets.is_empty() && self.project_dialog.mode != OpenMode::SystemDefault {
                    egui::ComboBox::from_id_source("project_preset")
                        .selected_text("Load preset…")
                        .show_ui(ui, |ui| {
                            for preset in &presets {
                                if ui.selectable_label(false, &preset.name).clicked() {
                                    chosen_preset = Some(preset.clone());
                                }
                            }
                        });
                }
                match self.project_dialog.mode {
                    OpenMode::SystemDefault => {
                        ui.label(
                            RichText::new("The folder opens with the system file manager.")
                                .weak(),
                        );
                    }
                    OpenMode::CustomApp => {
                        ui.horizontal(|ui| {
                            ui.label("Executable");
                            ui.text_edit_singleline(&mut self.project_dialog.executable);
                        });
                        ui.horizontal(|ui| {
                            ui.label("Arguments");
                            ui.text_edit_singleline(&mut self.project_dialog.args);
                        });
                    }
                    OpenMode::CustomCommand => {
                        ui.horizontal(|ui| {
                            ui.label("Command");
                            ui.text_edit_singleline(&mut self.project_dialog.command);
                        });
                        ui.horizontal(|ui| {
                            ui.label("Arguments");
                            ui.text_edit_singleline(&mut self.project_dialog.args);
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
        self.project_dialog.open = open;

        if let Some(preset) = chosen_preset {
            self.project_dialog.apply_preset(&preset);
        }
        if browse {
            self.open_folder_dialog();
        }
        if cancel {
            self.project_dialog.open = false;
        }
        if submit {
            if let Some(reason) = self.project_dialog.validation_error() {
                self.show_info("Project", reason);
            } else if self
                .registry
                .upsert(self.backend.as_ref(), self.project_dialog.to_input())
            {
                self.project_dialog.open = false;
            } else {
                self.show_info("Project", "Failed to save the project.");
            }
        }
    }

    /// Opens the native folder picker on a worker thread. Refused while a
    /// previous picker is still up.
    pub(crate) fn open_folder_dialog(&mut self) {
        if self.file_dialogs.folder_dialog_rx.is_some() {
            self.show_info("Project", "A folder dialog is already open.");
            return;
        }
        let (tx, rx) = mpsc::channel();
        self.file_dialogs.folder_dialog_rx = Some(rx);
        spawn_file_dialog_thread(move || {
            let folder = rfd::FileDialog::new().pick_folder();
            let _ = tx.send(folder);
        });
    }

    /// Applies a folder picked on the worker thread to the project form.
    pub(crate) fn poll_folder_dialog(&mut self) {
        let result = match &self.file_dialogs.folder_dialog_rx {
            Some(rx) => rx.try_recv().ok(),
            None => None,
        };
        if let Some(selection) = result {
            self.file_dialogs.folder_dialog_rx = None;
            if let Some(path) = selection {
                if self.project_dialog.name.trim().is_empty() {
                    if let Some(name) = path.file_name() {
                        self.project_dialog.name = name.to_string_lossy().into_owned();
                    }
                }
                self.project_dialog.path = path.to_string_lossy().into_owned();
            }
        }
    }
}
