use super::*;
use crate::workspace_selector::SelectorError;

impl GuiApp {
    /// Renders the left sidebar: workspace switcher plus page navigation.
    pub(crate) fn render_sidebar(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("sidebar")
            .resizable(false)
            .default_width(190.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                let active_name = self
                    .selector
                    .active()
                    .map(|w| w.name.clone())
                    .unwrap_or_else(|| "No workspace".to_string());
                let switcher = ui.add_sized(
                    egui::Vec2 {
                        x: ui.available_width(),
                        y: 36.0,
                    },
                    egui::Button::new(
                        RichText::new(format!("{active_name}  ▾")).strong().size(15.0),
                    ),
                );
                if switcher.clicked() {
                    self.workspace_menu.open = !self.workspace_menu.open;
                }
                ui.label(RichText::new("Workspace").weak().small());
                ui.separator();

                let pages = [
                    (Page::Projects, "Projects"),
                    (Page::Dashboard, "Dashboard"),
                    (Page::Settings, "Settings"),
                ];
                for (page, label) in pages {
                    if ui.selectable_label(self.page == page, label).clicked() {
                        self.page = page;
                    }
                }
            });
    }

    /// Renders the workspace switcher popup with the create/rename/delete
    /// affordances.
    pub(crate) fn render_workspace_menu(&mut self, ctx: &egui::Context) {
        if !self.workspace_menu.open {
            return;
        }

        let workspaces: Vec<Workspace> = self.selector.workspaces().to_vec();
        let active_id = self.selector.active().map(|w| w.id);
        let menu_mode = self.workspace_menu.mode.clone();

        // Collected inside the closure, applied after, so the UI pass never
        // mutates the list it is iterating.
        let mut switch_to: Option<Uuid> = None;
        let mut start_rename: Option<Workspace> = None;
        let mut commit_rename: Option<Uuid> = None;
        let mut ask_delete: Option<Workspace> = None;
        let mut commit_create = false;
        let mut cancel_edit = false;

        let mut open = self.workspace_menu.open;
        egui::Window::new("Workspaces")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.set_min_width(320.0);
                for workspace in &workspaces {
                    if menu_mode == WorkspaceMenuMode::Renaming(workspace.id) {
                        ui.horizontal(|ui| {
                            let edit = ui.text_edit_singleline(&mut self.workspace_menu.rename_input);
                            if edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                                commit_rename = Some(workspace.id);
                            }
                            if ui.button("Save").clicked() {
                                commit_rename = Some(workspace.id);
                            }
                            if ui.button("Cancel").clicked() {
                                cancel_edit = true;
                            }
                        });
                        continue;
                    }
                    ui.horizontal(|ui| {
                        let selected = active_id == Some(workspace.id);
                        if ui.selectable_label(selected, &workspace.name).clicked() && !selected {
                            switch_to = Some(workspace.id);
                        }
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.small_button("Delete").clicked() {
                                ask_delete = Some(workspace.clone());
                            }
                            if ui.small_button("Rename").clicked() {
                                start_rename = Some(workspace.clone());
                            }
                        });
                    });
                }
                ui.separator();
                if menu_mode == WorkspaceMenuMode::Creating {
                    ui.horizontal(|ui| {
                        let edit = ui.add(
                            egui::TextEdit::singleline(&mut self.workspace_menu.name_input)
                                .hint_text("Workspace name"),
                        );
                        if edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                            commit_create = true;
                        }
                        if ui.button("Create").clicked() {
                            commit_create = true;
                        }
                        if ui.button("Cancel").clicked() {
                            cancel_edit = true;
                        }
                    });
                } else if styled_button(ui, "New workspace").clicked() {
                    self.workspace_menu.mode = WorkspaceMenuMode::Creating;
                    self.workspace_menu.name_input.clear();
                }
            });
        self.workspace_menu.open = open;

        if cancel_edit {
            self.workspace_menu.mode = WorkspaceMenuMode::Browsing;
        }
        if let Some(workspace) = start_rename {
            self.workspace_menu.rename_input = workspace.name.clone();
            self.workspace_menu.mode = WorkspaceMenuMode::Renaming(workspace.id);
        }
        if let Some(id) = commit_rename {
            let name = self.workspace_menu.rename_input.trim().to_string();
            if name.is_empty() {
                self.show_info("Workspace", "The workspace needs a name.");
            } else {
                match self.selector.rename(self.backend.as_ref(), id, &name) {
                    Ok(()) => self.workspace_menu.mode = WorkspaceMenuMode::Browsing,
                    Err(err) => {
                        log::error!("failed to rename workspace: {err}");
                        self.show_info("Workspace", "Failed to rename the workspace.");
                    }
                }
            }
        }
        if commit_create {
            let name = self.workspace_menu.name_input.trim().to_string();
            if name.is_empty() {
                self.show_info("Workspace", "The workspace needs a name.");
            } else {
                match self
                    .selector
                    .create(self.backend.as_ref(), &mut self.settings, &name)
                {
                    Ok(()) => {
                        self.appearance_dirty = true;
                        self.workspace_menu.close();
                    }
                    Err(err) => {
                        log::error!("failed to create workspace: {err}");
                        self.show_info("Workspace", "Failed to create the workspace.");
                    }
                }
            }
        }
        if let Some(id) = switch_to {
            match self
                .selector
                .switch(self.backend.as_ref(), &mut self.settings, id)
            {
                Ok(()) => {
                    self.appearance_dirty = true;
                    self.workspace_menu.close();
                }
                Err(err) => {
                    log::error!("failed to switch workspace: {err}");
                    self.show_info("Workspace", "Failed to switch workspace.");
                }
            }
        }
        if let Some(workspace) = ask_delete {
            if self.selector.workspaces().len() <= 1 {
                self.show_info("Workspace", "The last workspace cannot be deleted.");
            } else {
                self.show_confirm(
                    "Delete workspace",
                    &format!("Delete workspace \"{}\" and all its projects?", workspace.name),
                    "Delete",
                    ConfirmAction::DeleteWorkspace(workspace.id),
                );
            }
        }
    }

    pub(crate) fn perform_confirm_action(&mut self, action: ConfirmAction) {
        match action {
            ConfirmAction::DeleteWorkspace(id) => {
                match self
                    .selector
                    .delete(self.backend.as_ref(), &mut self.settings, id)
                {
                    Ok(()) => {
                        self.appearance_dirty = true;
                        self.show_info("Workspace", "Workspace deleted.");
                    }
                    Err(SelectorError::LastWorkspace) => {
                        self.show_info("Workspace", "The last workspace cannot be deleted.");
                    }
                    Err(err) => {
                        log::error!("failed to delete workspace: {err}");
                        self.show_info("Workspace", "Failed to delete the workspace.");
                    }
                }
            }
            ConfirmAction::DeleteProject(id) => {
                if self.registry.delete(self.backend.as_ref(), id) {
                    self.show_info("Project", "Project deleted.");
                } else {
                    self.show_info("Project", "Failed to delete the project.");
                }
            }
            ConfirmAction::DeletePreset(id) => {
                self.settings.remove_preset(self.backend.as_ref(), id);
                self.show_info("Preset", "Preset deleted.");
            }
        }
    }

    /// Modal confirmation dialog for destructive operations.
    pub(crate) fn render_confirm_dialog(&mut self, ctx: &egui::Context) {
        if !self.confirm_dialog.open {
            return;
        }

        let screen_rect = ctx.screen_rect();
        egui::Area::new(egui::Id::new("modal_blocker"))
            .order(egui::Order::Middle)
            .fixed_pos(screen_rect.min)
            .show(ctx, |ui| {
                ui.allocate_rect(screen_rect, egui::Sense::click());
                ui.painter()
                    .rect_filled(screen_rect, 0.0, egui::Color32::from_black_alpha(220));
            });

        let center = screen_rect.center();
        egui::Area::new(egui::Id::new("modal_dialog"))
            .order(egui::Order::Foreground)
            .pivot(egui::Align2::CENTER_CENTER)
            .fixed_pos(center)
            .show(ctx, |ui| {
                egui::Frame::window(ui.style())
                    .rounding(egui::Rounding::same(6.0))
                    .show(ui, |ui| {
                        ui.heading(&self.confirm_dialog.title);
                        ui.label(&self.confirm_dialog.message);
                        ui.horizontal(|ui| {
                            if styled_button(ui, "Cancel").clicked() {
                                self.confirm_dialog.open = false;
                                self.confirm_dialog.action = None;
                            }
                            let label = self.confirm_dialog.action_label.clone();
                            if styled_button(ui, label).clicked() {
                                if let Some(action) = self.confirm_dialog.action.take() {
                                    self.perform_confirm_action(action);
                                }
                                self.confirm_dialog.open = false;
                            }
                        });
                    });
            });
    }

    /// Renders toast-style notifications sliding in from the right edge.
    pub(crate) fn render_toasts(&mut self, ctx: &egui::Context) {
        if self.notifications.all().is_empty() {
            return;
        }

        let now = Instant::now();
        let screen_rect = ctx.screen_rect();
        let max_width = 380.0;
        let mut y = screen_rect.min.y + 32.0;
        let x = screen_rect.max.x - 4.0;
        let total = 2.8;
        for (idx, notification) in self.notifications.all().iter().enumerate() {
            let age = now.duration_since(notification.created_at).as_secs_f32();
            if age >= total {
                continue;
            }
            let slide_in = 0.35;
            let slide_out = 0.45;
            let smooth = |t: f32| t * t * (3.0 - 2.0 * t);
            let slide = if age < slide_in {
                smooth((age / slide_in).clamp(0.0, 1.0))
            } else if age > total - slide_out {
                smooth(((total - age) / slide_out).clamp(0.0, 1.0))
            } else {
                1.0
            };
            let offscreen = max_width + 24.0;
            let x_pos = x + (1.0 - slide) * offscreen;
            let fill = egui::Color32::from_rgba_premultiplied(20, 20, 20, 200);
            let stroke = egui::Color32::from_rgba_premultiplied(80, 80, 80, 200);
            let text = egui::Color32::from_rgba_premultiplied(235, 235, 235, 230);

            egui::Area::new(egui::Id::new(("toast", idx)))
                .order(egui::Order::Foreground)
                .interactable(false)
                .pivot(egui::Align2::RIGHT_TOP)
                .fixed_pos(egui::pos2(x_pos, y))
                .show(ctx, |ui| {
                    egui::Frame::popup(ui.style())
                        .fill(fill)
                        .stroke(egui::Stroke::new(1.0, stroke))
                        .rounding(egui::Rounding::same(6.0))
                        .show(ui, |ui| {
                            ui.set_max_width(max_width);
                            ui.add_space(2.0);
                            ui.label(
                                RichText::new(&notification.title)
                                    .color(text)
                                    .strong()
                                    .size(16.0),
                            );
                            ui.label(RichText::new(&notification.message).color(text).size(14.0));
                            ui.add_space(2.0);
                        });
                });
            y += 66.0;
        }
        self.notifications.cleanup_old_notifications(total);
        ctx.request_repaint_after(Duration::from_millis(16));
    }
}
