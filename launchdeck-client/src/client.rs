use std::io::{BufRead, BufReader, Write};
use std::os::unix::net::UnixStream;

use launchdeck_core::model::{
    ActivityStats, AppSettings, AppSettingsUpdate, Project, ProjectInput, Workspace,
    WorkspaceInput,
};
use uuid::Uuid;

use crate::backend::{Backend, BackendError};
use crate::protocol::{BackendRequest, BackendResponse, DEFAULT_SOCKET_PATH};

pub fn send_request(request: &BackendRequest) -> Result<BackendResponse, BackendError> {
    send_request_to(DEFAULT_SOCKET_PATH, request)
}

pub fn send_request_to(
    path: &str,
    request: &BackendRequest,
) -> Result<BackendResponse, BackendError> {
    let mut stream = UnixStream::connect(path).map_err(|source| BackendError::Connect {
        path: path.to_string(),
        source,
    })?;
    let payload = serde_json::to_string(request)?;
    log::trace!("-> {path}: {payload}");
    stream.write_all(format!("{payload}\n").as_bytes())?;

    let mut reader = BufReader::new(stream);
    let mut line = String::new();
    reader.read_line(&mut line)?;
    if line.trim().is_empty() {
        return Err(BackendError::EmptyResponse);
    }
    Ok(serde_json::from_str::<BackendResponse>(line.trim())?)
}

/// Blocking JSON-line client over the backend's Unix socket.
pub struct SocketBackend {
    socket_path: String,
}

impl SocketBackend {
    pub fn new(socket_path: impl Into<String>) -> Self {
        Self {
            socket_path: socket_path.into(),
        }
    }

    pub fn socket_path(&self) -> &str {
        &self.socket_path
    }

    fn send(&self, request: &BackendRequest) -> Result<BackendResponse, BackendError> {
        match send_request_to(&self.socket_path, request)? {
            BackendResponse::Error { message } => Err(BackendError::Backend(message)),
            response => Ok(response),
        }
    }
}

impl Default for SocketBackend {
    fn default() -> Self {
        Self::new(DEFAULT_SOCKET_PATH)
    }
}

impl Backend for SocketBackend {
    fn list_workspaces(&self) -> Result<Vec<Workspace>, BackendError> {
        match self.send(&BackendRequest::ListWorkspaces)? {
            BackendResponse::Workspaces { workspaces } => Ok(workspaces),
            _ => Err(BackendError::Unexpected("list_workspaces")),
        }
    }

    fn get_active_workspace(&self) -> Result<Option<Workspace>, BackendError> {
        match self.send(&BackendRequest::GetActiveWorkspace)? {
            BackendResponse::ActiveWorkspace { workspace } => Ok(workspace),
            _ => Err(BackendError::Unexpected("get_active_workspace")),
        }
    }

    fn create_workspace(&self, payload: WorkspaceInput) -> Result<Workspace, BackendError> {
        match self.send(&BackendRequest::CreateWorkspace { payload })? {
            BackendResponse::Workspace { workspace } => Ok(workspace),
            _ => Err(BackendError::Unexpected("create_workspace")),
        }
    }

    fn set_active_workspace(&self, workspace_id: Uuid) -> Result<Workspace, BackendError> {
        match self.send(&BackendRequest::SetActiveWorkspace { workspace_id })? {
            BackendResponse::Workspace { workspace } => Ok(workspace),
            _ => Err(BackendError::Unexpected("set_active_workspace")),
        }
    }

    fn rename_workspace(
        &self,
        workspace_id: Uuid,
        new_name: String,
    ) -> Result<Workspace, BackendError> {
        match self.send(&BackendRequest::RenameWorkspace {
            workspace_id,
            new_name,
        })? {
            BackendResponse::Workspace { workspace } => Ok(workspace),
            _ => Err(BackendError::Unexpected("rename_workspace")),
        }
    }

    fn delete_workspace(&self, workspace_id: Uuid) -> Result<(), BackendError> {
        match self.send(&BackendRequest::DeleteWorkspace { workspace_id })? {
            BackendResponse::Ok => Ok(()),
            _ => Err(BackendError::Unexpected("delete_workspace")),
        }
    }

    fn list_projects(&self, workspace_id: Option<Uuid>) -> Result<Vec<Project>, BackendError> {
        match self.send(&BackendRequest::ListProjects { workspace_id })? {
            BackendResponse::Projects { projects } => Ok(projects),
            _ => Err(BackendError::Unexpected("list_projects")),
        }
    }

    fn upsert_project(
        &self,
        workspace_id: Option<Uuid>,
        payload: ProjectInput,
    ) -> Result<Project, BackendError> {
        match self.send(&BackendRequest::UpsertProject {
            workspace_id,
            payload,
        })? {
            BackendResponse::Project { project } => Ok(project),
            _ => Err(BackendError::Unexpected("upsert_project")),
        }
    }

    fn delete_project(
        &self,
        workspace_id: Option<Uuid>,
        project_id: Uuid,
    ) -> Result<Uuid, BackendError> {
        match self.send(&BackendRequest::DeleteProject {
            workspace_id,
            project_id,
        })? {
            BackendResponse::DeletedProject { project_id } => Ok(project_id),
            _ => Err(BackendError::Unexpected("delete_project")),
        }
    }

    fn launch_project(
        &self,
        workspace_id: Option<Uuid>,
        project_id: Uuid,
    ) -> Result<(), BackendError> {
        match self.send(&BackendRequest::LaunchProject {
            workspace_id,
            project_id,
        })? {
            BackendResponse::Ok => Ok(()),
            _ => Err(BackendError::Unexpected("launch_project")),
        }
    }

    fn stop_project(&self, project_id: Uuid) -> Result<(), BackendError> {
        match self.send(&BackendRequest::StopProject { project_id })? {
            BackendResponse::Ok => Ok(()),
            _ => Err(BackendError::Unexpected("stop_project")),
        }
    }

    fn get_running_projects(&self) -> Result<Vec<Uuid>, BackendError> {
        match self.send(&BackendRequest::GetRunningProjects)? {
            BackendResponse::RunningProjects { project_ids } => Ok(project_ids),
            _ => Err(BackendError::Unexpected("get_running_projects")),
        }
    }

    fn get_activity_stats(
        &self,
        workspace_id: Option<Uuid>,
    ) -> Result<ActivityStats, BackendError> {
        match self.send(&BackendRequest::GetActivityStats { workspace_id })? {
            BackendResponse::ActivityStats { stats } => Ok(stats),
            _ => Err(BackendError::Unexpected("get_activity_stats")),
        }
    }

    fn get_settings(&self) -> Result<AppSettings, BackendError> {
        match self.send(&BackendRequest::GetSettings)? {
            BackendResponse::Settings { settings } => Ok(settings),
            _ => Err(BackendError::Unexpected("get_settings")),
        }
    }

    fn update_settings(&self, payload: AppSettingsUpdate) -> Result<AppSettings, BackendError> {
        match self.send(&BackendRequest::UpdateSettings { payload })? {
            BackendResponse::Settings { settings } => Ok(settings),
            _ => Err(BackendError::Unexpected("update_settings")),
        }
    }
}
