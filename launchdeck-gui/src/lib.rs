//! Desktop front-end for the launchdeck backend.
//!
//! The window is a thin shell over a handful of state managers: settings
//! with a local appearance cache, the workspace selector, the project
//! registry with its running-state poller and the dashboard stats view.
//! All of them talk to the backend through the [`Backend`] trait, so tests
//! can drive them against an in-memory fake.

use std::time::Duration;

use eframe::egui;
use launchdeck_client::{Backend, SocketBackend, DEFAULT_SOCKET_PATH};

mod file_dialogs;
mod notifications;
pub mod projects;
pub mod settings_store;
mod state;
pub mod stats;
pub mod theme;
mod ui;
mod ui_state;
pub mod workspace_selector;

use file_dialogs::FileDialogManager;
use notifications::NotificationHandler;
use projects::ProjectRegistry;
use settings_store::SettingsStore;
use state::{ChartPeriod, ConfirmAction, Page, SettingsTab, ViewMode};
use stats::StatsView;
use ui_state::{
    ConfirmDialogState, PresetDialogState, ProjectDialogState, WorkspaceMenuState,
};
use workspace_selector::WorkspaceSelector;

pub struct GuiConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
    pub socket_path: String,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            title: "Launchdeck".to_string(),
            width: 1280.0,
            height: 800.0,
            socket_path: DEFAULT_SOCKET_PATH.to_string(),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum GuiError {
    #[error("gui error: {0}")]
    Gui(String),
}

/// Runs the GUI against the backend socket named in the config.
pub fn run_gui(config: GuiConfig) -> Result<(), GuiError> {
    let backend = SocketBackend::new(config.socket_path.clone());
    run_gui_with_backend(config, Box::new(backend))
}

/// Runs the GUI against an arbitrary backend implementation.
pub fn run_gui_with_backend(config: GuiConfig, backend: Box<dyn Backend>) -> Result<(), GuiError> {
    let mut options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([config.width, config.height]),
        ..Default::default()
    };
    // NOTE: Vsync generates hangs and lag on occluded windows.
    options.vsync = false;

    eframe::run_native(
        &config.title,
        options,
        Box::new(move |cc| {
            let system_dark = matches!(
                cc.integration_info.system_theme,
                Some(eframe::Theme::Dark)
            );
            Box::new(GuiApp::new(
                backend,
                system_dark,
                settings_store::default_cache_path(),
            ))
        }),
    )
    .map_err(|err| GuiError::Gui(err.to_string()))
}

struct GuiApp {
    backend: Box<dyn Backend>,

    // Managers
    settings: SettingsStore,
    selector: WorkspaceSelector,
    registry: ProjectRegistry,
    stats: StatsView,
    notifications: NotificationHandler,
    file_dialogs: FileDialogManager,

    // UI state
    page: Page,
    view_mode: ViewMode,
    settings_tab: SettingsTab,
    chart_period: ChartPeriod,
    search_query: String,
    workspace_menu: WorkspaceMenuState,
    project_dialog: ProjectDialogState,
    preset_dialog: PresetDialogState,
    confirm_dialog: ConfirmDialogState,

    /// System dark/light preference, sampled once at startup.
    system_dark: bool,
    /// Set when theme, accent or zoom changed and the visuals need a rebuild.
    appearance_dirty: bool,
}

impl GuiApp {
    fn new(backend: Box<dyn Backend>, system_dark: bool, cache_path: std::path::PathBuf) -> Self {
        let mut settings = SettingsStore::new(cache_path);
        if let Err(err) = settings.reload(backend.as_ref()) {
            log::error!("initial settings load failed: {err}");
        }
        let mut selector = WorkspaceSelector::default();
        if let Err(err) = selector.refresh(backend.as_ref()) {
            log::error!("initial workspace load failed: {err}");
        }
        let mut registry = ProjectRegistry::default();
        registry.reload(backend.as_ref());
        registry.poll_running(backend.as_ref());

        GuiApp {
            backend,
            settings,
            selector,
            registry,
            stats: StatsView::default(),
            notifications: NotificationHandler::new(),
            file_dialogs: FileDialogManager::default(),
            page: Page::Projects,
            view_mode: ViewMode::Grid,
            settings_tab: SettingsTab::Appearance,
            chart_period: ChartPeriod::Week,
            search_query: String::new(),
            workspace_menu: WorkspaceMenuState::default(),
            project_dialog: ProjectDialogState::default(),
            preset_dialog: PresetDialogState::default(),
            confirm_dialog: ConfirmDialogState::default(),
            system_dark,
            appearance_dirty: true,
        }
    }

    fn show_info(&mut self, title: &str, message: &str) {
        self.notifications.show_info(title, message);
    }

    fn show_confirm(&mut self, title: &str, message: &str, action_label: &str, action: ConfirmAction) {
        self.confirm_dialog.open = true;
        self.confirm_dialog.title = title.to_string();
        self.confirm_dialog.message = message.to_string();
        self.confirm_dialog.action_label = action_label.to_string();
        self.confirm_dialog.action = Some(action);
    }
}

impl eframe::App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.style_mut(|style| {
            style.interaction.selectable_labels = false;
        });

        self.poll_folder_dialog();
        self.registry.maybe_poll(self.backend.as_ref());
        self.registry
            .sync_to(self.backend.as_ref(), self.selector.version());

        if self.appearance_dirty {
            theme::apply_appearance(ctx, self.settings.settings(), self.system_dark);
            self.appearance_dirty = false;
        }

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            if self.confirm_dialog.open {
                self.confirm_dialog.open = false;
                self.confirm_dialog.action = None;
            } else if self.project_dialog.open {
                self.project_dialog.open = false;
            } else if self.preset_dialog.open {
                self.preset_dialog.open = false;
            } else if self.workspace_menu.open {
                // Escape backs an inline edit out to browsing before it
                // closes the menu.
                if self.workspace_menu.mode != state::WorkspaceMenuMode::Browsing {
                    self.workspace_menu.mode = state::WorkspaceMenuMode::Browsing;
                } else {
                    self.workspace_menu.close();
                }
            }
        }

        self.render_sidebar(ctx);
        egui::CentralPanel::default().show(ctx, |ui| match self.page {
            Page::Projects => self.render_projects_page(ui),
            Page::Dashboard => self.render_dashboard_page(ui),
            Page::Settings => self.render_settings_page(ui),
        });

        self.render_workspace_menu(ctx);
        self.render_project_dialog(ctx);
        self.render_preset_dialog(ctx);
        self.render_confirm_dialog(ctx);
        self.render_toasts(ctx);

        // Keeps the running-state poll ticking while the window is idle.
        ctx.request_repaint_after(Duration::from_millis(500));
    }
}
