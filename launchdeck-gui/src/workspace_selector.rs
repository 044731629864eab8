//! Workspace list, active-workspace tracking and the workspace version
//! counter other views use to notice a context change.

use launchdeck_client::{Backend, BackendError};
use launchdeck_core::{Workspace, WorkspaceInput};
use thiserror::Error;
use uuid::Uuid;

use crate::settings_store::SettingsStore;

#[derive(Debug, Error)]
pub enum SelectorError {
    /// The last remaining workspace is never deleted.
    #[error("the last workspace cannot be deleted")]
    LastWorkspace,
    #[error(transparent)]
    Backend(#[from] BackendError),
}

#[derive(Default)]
pub struct WorkspaceSelector {
    workspaces: Vec<Workspace>,
    active: Option<Workspace>,
    /// Bumped once per workspace-context change. Views holding
    /// workspace-scoped data compare against it to know when to reload.
    version: u64,
}

impl WorkspaceSelector {
    pub fn workspaces(&self) -> &[Workspace] {
        &self.workspaces
    }

    pub fn active(&self) -> Option<&Workspace> {
        self.active.as_ref()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn refresh(&mut self, backend: &dyn Backend) -> Result<(), BackendError> {
        self.workspaces = backend.list_workspaces()?;
        self.active = backend.get_active_workspace()?;
        Ok(())
    }

    /// Creates a workspace and immediately switches to it.
    pub fn create(
        &mut self,
        backend: &dyn Backend,
        settings: &mut SettingsStore,
        name: &str,
    ) -> Result<(), SelectorError> {
        let workspace = backend.create_workspace(WorkspaceInput {
            name: name.trim().to_string(),
            description: None,
            database_path: None,
        })?;
        let id = workspace.id;
        self.workspaces.push(workspace);
        self.switch(backend, settings, id)
    }

    /// Makes `workspace_id` the active workspace, then reloads settings once
    /// and bumps the version counter once.
    pub fn switch(
        &mut self,
        backend: &dyn Backend,
        settings: &mut SettingsStore,
        workspace_id: Uuid,
    ) -> Result<(), SelectorError> {
        let workspace = backend.set_active_workspace(workspace_id)?;
        self.active = Some(workspace);
        if let Err(err) = settings.reload(backend) {
            log::warn!("settings reload after workspace switch failed: {err}");
        }
        self.version += 1;
        Ok(())
    }

    /// Renames in place. The list keeps its order and no context change is
    /// signalled, so project and stats views stay untouched.
    pub fn rename(
        &mut self,
        backend: &dyn Backend,
        workspace_id: Uuid,
        new_name: &str,
    ) -> Result<(), BackendError> {
        let updated = backend.rename_workspace(workspace_id, new_name.trim().to_string())?;
        if let Some(slot) = self.workspaces.iter_mut().find(|w| w.id == workspace_id) {
            *slot = updated.clone();
        }
        if self.active.as_ref().map(|w| w.id) == Some(workspace_id) {
            self.active = Some(updated);
        }
        Ok(())
    }

    /// Deletes a workspace. The guard against deleting the last workspace
    /// fires before any backend call is made.
    pub fn delete(
        &mut self,
        backend: &dyn Backend,
        settings: &mut SettingsStore,
        workspace_id: Uuid,
    ) -> Result<(), SelectorError> {
        if self.workspaces.len() <= 1 {
            return Err(SelectorError::LastWorkspace);
        }
        let was_active = self.active.as_ref().map(|w| w.id) == Some(workspace_id);
        backend.delete_workspace(workspace_id)?;
        self.refresh(backend)?;
        if was_active {
            // The backend promoted another workspace; treat it like a switch.
            if let Err(err) = settings.reload(backend) {
                log::warn!("settings reload after workspace delete failed: {err}");
            }
            self.version += 1;
        }
        Ok(())
    }
}
