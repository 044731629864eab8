use launchdeck_core::model::{
    ActivityStats, AppSettings, AppSettingsUpdate, Project, ProjectInput, Workspace,
    WorkspaceInput,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_SOCKET_PATH: &str = "/tmp/launchdeck-backend.sock";

/// One request per connection, one JSON object per line. Variant names are
/// the backend operation names; field keys are camelCase on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum BackendRequest {
    ListWorkspaces,
    GetActiveWorkspace,
    CreateWorkspace {
        payload: WorkspaceInput,
    },
    SetActiveWorkspace {
        workspace_id: Uuid,
    },
    RenameWorkspace {
        workspace_id: Uuid,
        new_name: String,
    },
    DeleteWorkspace {
        workspace_id: Uuid,
    },
    ListProjects {
        workspace_id: Option<Uuid>,
    },
    UpsertProject {
        workspace_id: Option<Uuid>,
        payload: ProjectInput,
    },
    DeleteProject {
        workspace_id: Option<Uuid>,
        project_id: Uuid,
    },
    LaunchProject {
        workspace_id: Option<Uuid>,
        project_id: Uuid,
    },
    StopProject {
        project_id: Uuid,
    },
    GetRunningProjects,
    GetActivityStats {
        workspace_id: Option<Uuid>,
    },
    GetSettings,
    UpdateSettings {
        payload: AppSettingsUpdate,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum BackendResponse {
    Ok,
    Error {
        message: String,
    },
    Workspaces {
        workspaces: Vec<Workspace>,
    },
    ActiveWorkspace {
        workspace: Option<Workspace>,
    },
    Workspace {
        workspace: Workspace,
    },
    Projects {
        projects: Vec<Project>,
    },
    Project {
        project: Project,
    },
    DeletedProject {
        project_id: Uuid,
    },
    RunningProjects {
        project_ids: Vec<Uuid>,
    },
    ActivityStats {
        stats: ActivityStats,
    },
    Settings {
        settings: AppSettings,
    },
}
