//! State-manager behavior against an in-memory backend fake.

use std::cell::{Cell, RefCell};
use std::path::PathBuf;

use chrono::Utc;
use launchdeck_client::{Backend, BackendError};
use launchdeck_core::{
    ActivityStats, AppSettings, AppSettingsUpdate, LaunchPreset, OpenConfig, Project,
    ProjectInput, ThemePreference, Workspace, WorkspaceInput,
};
use launchdeck_gui::projects::ProjectRegistry;
use launchdeck_gui::settings_store::SettingsStore;
use launchdeck_gui::workspace_selector::{SelectorError, WorkspaceSelector};
use uuid::Uuid;

fn workspace(name: &str) -> Workspace {
    let now = Utc::now();
    Workspace {
        id: Uuid::new_v4(),
        name: name.to_string(),
        description: None,
        database_path: PathBuf::from(format!("/tmp/{name}.db")),
        created_at: now,
        updated_at: now,
    }
}

fn project(name: &str) -> Project {
    let now = Utc::now();
    Project {
        id: Uuid::new_v4(),
        name: name.to_string(),
        path: PathBuf::from(format!("/home/me/{name}")),
        description: None,
        open_config: OpenConfig::SystemDefault,
        created_at: now,
        updated_at: now,
    }
}

/// In-memory backend with per-operation call counters.
#[derive(Default)]
struct MockBackend {
    workspaces: RefCell<Vec<Workspace>>,
    active: Cell<Option<Uuid>>,
    projects: RefCell<Vec<Project>>,
    running: RefCell<Vec<Uuid>>,
    settings: RefCell<AppSettings>,

    get_settings_calls: Cell<usize>,
    update_settings_calls: Cell<usize>,
    delete_workspace_calls: Cell<usize>,
    get_running_calls: Cell<usize>,
    fail_update_settings: Cell<bool>,
    /// Acknowledge stop requests without removing the project from the
    /// running set, as a backend does while the process is still exiting.
    slow_stop: Cell<bool>,
}

impl MockBackend {
    fn with_workspaces(names: &[&str]) -> Self {
        let backend = MockBackend::default();
        for name in names {
            backend.workspaces.borrow_mut().push(workspace(name));
        }
        let first = backend.workspaces.borrow().first().map(|w| w.id);
        backend.active.set(first);
        backend
    }
}

impl Backend for MockBackend {
    fn list_workspaces(&self) -> Result<Vec<Workspace>, BackendError> {
        Ok(self.workspaces.borrow().clone())
    }

    fn get_active_workspace(&self) -> Result<Option<Workspace>, BackendError> {
        let active = self.active.get();
        Ok(self
            .workspaces
            .borrow()
            .iter()
            .find(|w| Some(w.id) == active)
            .cloned())
    }

    fn create_workspace(&self, payload: WorkspaceInput) -> Result<Workspace, BackendError> {
        let created = workspace(&payload.name);
        self.workspaces.borrow_mut().push(created.clone());
        Ok(created)
    }

    fn set_active_workspace(&self, workspace_id: Uuid) -> Result<Workspace, BackendError> {
        let found = self
            .workspaces
            .borrow()
            .iter()
            .find(|w| w.id == workspace_id)
            .cloned()
            .ok_or_else(|| BackendError::Backend("no such workspace".to_string()))?;
        self.active.set(Some(workspace_id));
        Ok(found)
    }

    fn rename_workspace(
        &self,
        workspace_id: Uuid,
        new_name: String,
    ) -> Result<Workspace, BackendError> {
        let mut workspaces = self.workspaces.borrow_mut();
        let slot = workspaces
            .iter_mut()
            .find(|w| w.id == workspace_id)
            .ok_or_else(|| BackendError::Backend("no such workspace".to_string()))?;
        slot.name = new_name;
        Ok(slot.clone())
    }

    fn delete_workspace(&self, workspace_id: Uuid) -> Result<(), BackendError> {
        self.delete_workspace_calls
            .set(self.delete_workspace_calls.get() + 1);
        self.workspaces.borrow_mut().retain(|w| w.id != workspace_id);
        if self.active.get() == Some(workspace_id) {
            self.active
                .set(self.workspaces.borrow().first().map(|w| w.id));
        }
        Ok(())
    }

    fn list_projects(&self, _workspace_id: Option<Uuid>) -> Result<Vec<Project>, BackendError> {
        Ok(self.projects.borrow().clone())
    }

    fn upsert_project(
        &self,
        _workspace_id: Option<Uuid>,
        payload: ProjectInput,
    ) -> Result<Project, BackendError> {
        let now = Utc::now();
        let mut projects = self.projects.borrow_mut();
        match payload.id {
            Some(id) => {
                let slot = projects
                    .iter_mut()
                    .find(|p| p.id == id)
                    .ok_or_else(|| BackendError::Backend("no such project".to_string()))?;
                slot.name = payload.name;
                slot.path = payload.path;
                slot.description = payload.description;
                slot.open_config = payload.open_config;
                slot.updated_at = now;
                Ok(slot.clone())
            }
            None => {
                let created = Project {
                    id: Uuid::new_v4(),
                    name: payload.name,
                    path: payload.path,
                    description: payload.description,
                    open_config: payload.open_config,
                    created_at: now,
                    updated_at: now,
                };
                projects.push(created.clone());
                Ok(created)
            }
        }
    }

    fn delete_project(
        &self,
        _workspace_id: Option<Uuid>,
        project_id: Uuid,
    ) -> Result<Uuid, BackendError> {
        self.projects.borrow_mut().retain(|p| p.id != project_id);
        Ok(project_id)
    }

    fn launch_project(
        &self,
        _workspace_id: Option<Uuid>,
        project_id: Uuid,
    ) -> Result<(), BackendError> {
        self.running.borrow_mut().push(project_id);
        Ok(())
    }

    fn stop_project(&self, project_id: Uuid) -> Result<(), BackendError> {
        if !self.slow_stop.get() {
            self.running.borrow_mut().retain(|id| *id != project_id);
        }
        Ok(())
    }

    fn get_running_projects(&self) -> Result<Vec<Uuid>, BackendError> {
        self.get_running_calls.set(self.get_running_calls.get() + 1);
        Ok(self.running.borrow().clone())
    }

    fn get_activity_stats(
        &self,
        _workspace_id: Option<Uuid>,
    ) -> Result<ActivityStats, BackendError> {
        Ok(ActivityStats {
            weekly_activity: Vec::new(),
            monthly_activity: Vec::new(),
            yearly_activity: Vec::new(),
            project_counts: Vec::new(),
            total_launches: 0,
            total_projects: self.projects.borrow().len() as i64,
            average_daily_launches: 0.0,
        })
    }

    fn get_settings(&self) -> Result<AppSettings, BackendError> {
        self.get_settings_calls.set(self.get_settings_calls.get() + 1);
        Ok(self.settings.borrow().clone())
    }

    fn update_settings(&self, payload: AppSettingsUpdate) -> Result<AppSettings, BackendError> {
        self.update_settings_calls
            .set(self.update_settings_calls.get() + 1);
        if self.fail_update_settings.get() {
            return Err(BackendError::Backend("write failed".to_string()));
        }
        let stored = AppSettings {
            theme: payload.theme,
            accent_color: payload.accent_color,
            zoom_level: payload.zoom_level,
            font_family: payload.font_family,
            font_size: payload.font_size,
            launch_presets: payload
                .launch_presets
                .into_iter()
                .map(|preset| LaunchPreset {
                    id: preset.id.unwrap_or_else(Uuid::new_v4),
                    name: preset.name,
                    description: preset.description,
                    config: preset.config,
                })
                .collect(),
        };
        *self.settings.borrow_mut() = stored.clone();
        Ok(stored)
    }
}

fn store(dir: &tempfile::TempDir) -> SettingsStore {
    SettingsStore::new(dir.path().join("appearance.toml"))
}

#[test]
fn last_workspace_delete_is_refused_without_backend_call() {
    let backend = MockBackend::with_workspaces(&["Default"]);
    let dir = tempfile::tempdir().unwrap();
    let mut settings = store(&dir);
    let mut selector = WorkspaceSelector::default();
    selector.refresh(&backend).unwrap();

    let only = selector.workspaces()[0].id;
    let result = selector.delete(&backend, &mut settings, only);
    assert!(matches!(result, Err(SelectorError::LastWorkspace)));
    assert_eq!(backend.delete_workspace_calls.get(), 0);
    assert_eq!(selector.workspaces().len(), 1);
}

#[test]
fn switch_reloads_settings_once_and_bumps_version_once() {
    let backend = MockBackend::with_workspaces(&["Home", "Work"]);
    let dir = tempfile::tempdir().unwrap();
    let mut settings = store(&dir);
    let mut selector = WorkspaceSelector::default();
    selector.refresh(&backend).unwrap();

    let target = selector.workspaces()[1].id;
    let version_before = selector.version();
    backend.get_settings_calls.set(0);

    selector.switch(&backend, &mut settings, target).unwrap();

    assert_eq!(selector.version(), version_before + 1);
    assert_eq!(backend.get_settings_calls.get(), 1);
    assert_eq!(selector.active().map(|w| w.id), Some(target));
}

#[test]
fn rename_keeps_order_and_version() {
    let backend = MockBackend::with_workspaces(&["Home", "Work"]);
    let mut selector = WorkspaceSelector::default();
    selector.refresh(&backend).unwrap();

    let first = selector.workspaces()[0].id;
    let version_before = selector.version();
    selector.rename(&backend, first, "Renamed").unwrap();

    assert_eq!(selector.workspaces()[0].id, first);
    assert_eq!(selector.workspaces()[0].name, "Renamed");
    assert_eq!(selector.version(), version_before);
}

#[test]
fn deleting_active_workspace_switches_context() {
    let backend = MockBackend::with_workspaces(&["Home", "Work"]);
    let dir = tempfile::tempdir().unwrap();
    let mut settings = store(&dir);
    let mut selector = WorkspaceSelector::default();
    selector.refresh(&backend).unwrap();

    let active = selector.active().map(|w| w.id).unwrap();
    let version_before = selector.version();
    backend.get_settings_calls.set(0);

    selector.delete(&backend, &mut settings, active).unwrap();

    assert_eq!(selector.workspaces().len(), 1);
    assert_ne!(selector.active().map(|w| w.id), Some(active));
    assert_eq!(selector.version(), version_before + 1);
    assert_eq!(backend.get_settings_calls.get(), 1);
}

#[test]
fn deleting_inactive_workspace_keeps_context() {
    let backend = MockBackend::with_workspaces(&["Home", "Work"]);
    let dir = tempfile::tempdir().unwrap();
    let mut settings = store(&dir);
    let mut selector = WorkspaceSelector::default();
    selector.refresh(&backend).unwrap();

    let inactive = selector.workspaces()[1].id;
    let version_before = selector.version();

    selector.delete(&backend, &mut settings, inactive).unwrap();

    assert_eq!(selector.workspaces().len(), 1);
    assert_eq!(selector.version(), version_before);
}

#[test]
fn create_switches_to_the_new_workspace() {
    let backend = MockBackend::with_workspaces(&["Home"]);
    let dir = tempfile::tempdir().unwrap();
    let mut settings = store(&dir);
    let mut selector = WorkspaceSelector::default();
    selector.refresh(&backend).unwrap();

    selector.create(&backend, &mut settings, "Work").unwrap();

    assert_eq!(selector.workspaces().len(), 2);
    assert_eq!(
        selector.active().map(|w| w.name.clone()),
        Some("Work".to_string())
    );
}

#[test]
fn launch_polls_running_state_immediately() {
    let backend = MockBackend::with_workspaces(&["Home"]);
    let p = project("notes");
    backend.projects.borrow_mut().push(p.clone());

    let mut registry = ProjectRegistry::default();
    registry.reload(&backend);
    registry.poll_running(&backend);
    assert!(!registry.is_running(p.id));

    let polls_before = backend.get_running_calls.get();
    assert!(registry.launch(&backend, p.id));

    // The running flag flips on the forced poll, not on the next interval.
    assert!(registry.is_running(p.id));
    assert_eq!(backend.get_running_calls.get(), polls_before + 1);
}

#[test]
fn maybe_poll_respects_the_interval() {
    let backend = MockBackend::with_workspaces(&["Home"]);
    let mut registry = ProjectRegistry::default();

    registry.maybe_poll(&backend);
    let polls = backend.get_running_calls.get();
    registry.maybe_poll(&backend);
    registry.maybe_poll(&backend);
    assert_eq!(backend.get_running_calls.get(), polls);
}

#[test]
fn upsert_and_delete_resynchronize_the_list() {
    let backend = MockBackend::with_workspaces(&["Home"]);
    let mut registry = ProjectRegistry::default();

    let input = ProjectInput {
        id: None,
        name: "notes".to_string(),
        path: PathBuf::from("/home/me/notes"),
        description: None,
        open_config: OpenConfig::SystemDefault,
    };
    assert!(registry.upsert(&backend, input));
    assert_eq!(registry.projects().len(), 1);

    let id = registry.projects()[0].id;
    assert!(registry.delete(&backend, id));
    assert!(registry.projects().is_empty());
}

#[test]
fn stop_clears_running_flag() {
    let backend = MockBackend::with_workspaces(&["Home"]);
    let p = project("notes");
    backend.projects.borrow_mut().push(p.clone());
    backend.running.borrow_mut().push(p.id);

    let mut registry = ProjectRegistry::default();
    registry.reload(&backend);
    registry.poll_running(&backend);
    assert!(registry.is_running(p.id));

    assert!(registry.stop(&backend, p.id));
    assert!(!registry.is_running(p.id));
    assert!(!registry.is_stopping(p.id));
}

#[test]
fn stop_stays_pending_until_a_poll_confirms_it() {
    let backend = MockBackend::with_workspaces(&["Home"]);
    let p = project("notes");
    backend.projects.borrow_mut().push(p.clone());
    backend.running.borrow_mut().push(p.id);
    backend.slow_stop.set(true);

    let mut registry = ProjectRegistry::default();
    registry.reload(&backend);
    registry.poll_running(&backend);

    // The stop is acked but the backend still reports the project running.
    assert!(registry.stop(&backend, p.id));
    assert!(registry.is_stopping(p.id));
    assert!(registry.is_running(p.id));
    // A second stop for the same project is ignored while one is pending.
    assert!(!registry.stop(&backend, p.id));

    // Once the process is gone the next poll clears the pending flag.
    backend.running.borrow_mut().clear();
    registry.poll_running(&backend);
    assert!(!registry.is_stopping(p.id));
    assert!(!registry.is_running(p.id));
}

#[test]
fn failed_settings_write_falls_back_to_backend_copy() {
    let backend = MockBackend::with_workspaces(&["Home"]);
    let dir = tempfile::tempdir().unwrap();
    let mut settings = store(&dir);
    settings.reload(&backend).unwrap();
    assert_eq!(settings.settings().theme, ThemePreference::Light);

    backend.fail_update_settings.set(true);
    settings.set_theme(&backend, ThemePreference::Dark);

    // The optimistic edit is rolled back by re-fetching the stored copy.
    assert_eq!(settings.settings().theme, ThemePreference::Light);
    assert_eq!(backend.update_settings_calls.get(), 1);
}

#[test]
fn appearance_cache_survives_a_restart() {
    let backend = MockBackend::with_workspaces(&["Home"]);
    backend.settings.borrow_mut().theme = ThemePreference::Dark;
    backend.settings.borrow_mut().accent_color = "#ef4444".to_string();
    backend.settings.borrow_mut().zoom_level = 110;

    let dir = tempfile::tempdir().unwrap();
    let mut settings = store(&dir);
    settings.reload(&backend).unwrap();

    // A fresh store reads the cached appearance before any backend call.
    let restarted = store(&dir);
    assert!(!restarted.is_loaded());
    assert_eq!(restarted.settings().theme, ThemePreference::Dark);
    assert_eq!(restarted.settings().accent_color, "#ef4444");
    assert_eq!(restarted.settings().zoom_level, 110);
}

#[test]
fn preset_upsert_assigns_ids_and_replaces_in_place() {
    let backend = MockBackend::with_workspaces(&["Home"]);
    let dir = tempfile::tempdir().unwrap();
    let mut settings = store(&dir);
    settings.reload(&backend).unwrap();

    settings.upsert_preset(
        &backend,
        launchdeck_core::LaunchPresetInput {
            id: None,
            name: "VS Code".to_string(),
            description: None,
            config: OpenConfig::SystemDefault,
        },
    );
    assert_eq!(settings.presets().len(), 1);
    let id = settings.presets()[0].id;

    settings.upsert_preset(
        &backend,
        launchdeck_core::LaunchPresetInput {
            id: Some(id),
            name: "VS Code (new window)".to_string(),
            description: None,
            config: OpenConfig::SystemDefault,
        },
    );
    assert_eq!(settings.presets().len(), 1);
    assert_eq!(settings.presets()[0].name, "VS Code (new window)");

    settings.remove_preset(&backend, id);
    assert!(settings.presets().is_empty());
}
