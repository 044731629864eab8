use launchdeck_core::model::{
    ActivityStats, AppSettings, AppSettingsUpdate, Project, ProjectInput, Workspace,
    WorkspaceInput,
};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("failed to connect to backend at {path}. Is it running?")]
    Connect {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("backend i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("backend returned an empty response")]
    EmptyResponse,
    #[error("malformed backend response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("backend error: {0}")]
    Backend(String),
    #[error("unexpected response to {0}")]
    Unexpected(&'static str),
}

/// The backend operation surface the GUI depends on. `SocketBackend` is the
/// production implementation; tests substitute an in-memory one.
///
/// A `workspace_id` of `None` means "the backend's active workspace".
pub trait Backend {
    fn list_workspaces(&self) -> Result<Vec<Workspace>, BackendError>;
    fn get_active_workspace(&self) -> Result<Option<Workspace>, BackendError>;
    fn create_workspace(&self, payload: WorkspaceInput) -> Result<Workspace, BackendError>;
    fn set_active_workspace(&self, workspace_id: Uuid) -> Result<Workspace, BackendError>;
    fn rename_workspace(
        &self,
        workspace_id: Uuid,
        new_name: String,
    ) -> Result<Workspace, BackendError>;
    fn delete_workspace(&self, workspace_id: Uuid) -> Result<(), BackendError>;

    fn list_projects(&self, workspace_id: Option<Uuid>) -> Result<Vec<Project>, BackendError>;
    fn upsert_project(
        &self,
        workspace_id: Option<Uuid>,
        payload: ProjectInput,
    ) -> Result<Project, BackendError>;
    fn delete_project(
        &self,
        workspace_id: Option<Uuid>,
        project_id: Uuid,
    ) -> Result<Uuid, BackendError>;
    fn launch_project(
        &self,
        workspace_id: Option<Uuid>,
        project_id: Uuid,
    ) -> Result<(), BackendError>;
    fn stop_project(&self, project_id: Uuid) -> Result<(), BackendError>;
    fn get_running_projects(&self) -> Result<Vec<Uuid>, BackendError>;

    fn get_activity_stats(&self, workspace_id: Option<Uuid>)
        -> Result<ActivityStats, BackendError>;

    fn get_settings(&self) -> Result<AppSettings, BackendError>;
    fn update_settings(&self, payload: AppSettingsUpdate) -> Result<AppSettings, BackendError>;
}
