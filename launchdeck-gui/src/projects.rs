//! Project list for the active workspace plus the running-state poller.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use launchdeck_client::Backend;
use launchdeck_core::search::filter_projects;
use launchdeck_core::{Project, ProjectInput};
use uuid::Uuid;

/// How often the running-projects set is refreshed in the background.
pub const RUNNING_POLL_INTERVAL: Duration = Duration::from_secs(2);

#[derive(Default)]
pub struct ProjectRegistry {
    projects: Vec<Project>,
    running: HashSet<Uuid>,
    /// Projects with an outstanding stop request; a second stop for the same
    /// project is ignored until the first one settles.
    stopping: HashSet<Uuid>,
    last_poll: Option<Instant>,
    seen_version: u64,
}

impl ProjectRegistry {
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn filtered<'a>(&'a self, query: &str) -> Vec<&'a Project> {
        filter_projects(&self.projects, query)
    }

    pub fn is_running(&self, project_id: Uuid) -> bool {
        self.running.contains(&project_id)
    }

    pub fn is_stopping(&self, project_id: Uuid) -> bool {
        self.stopping.contains(&project_id)
    }

    pub fn running_count(&self) -> usize {
        self.running.len()
    }

    /// Fetches the project list of the active workspace. On failure the
    /// previous list is kept and the error only logged.
    pub fn reload(&mut self, backend: &dyn Backend) {
        match backend.list_projects(None) {
            Ok(projects) => self.projects = projects,
            Err(err) => log::error!("failed to load projects: {err}"),
        }
    }

    /// Reloads if the workspace context moved past the last sync.
    pub fn sync_to(&mut self, backend: &dyn Backend, version: u64) {
        if self.seen_version == version {
            return;
        }
        self.seen_version = version;
        self.reload(backend);
        self.poll_running(backend);
    }

    /// Creates or updates a project, then resynchronizes with the backend.
    /// Returns whether the write went through, so the dialog knows whether
    /// to close.
    pub fn upsert(&mut self, backend: &dyn Backend, input: ProjectInput) -> bool {
        match backend.upsert_project(None, input) {
            Ok(project) => {
                match self.projects.iter_mut().find(|p| p.id == project.id) {
                    Some(slot) => *slot = project,
                    None => self.projects.push(project),
                }
                self.reload(backend);
                true
            }
            Err(err) => {
                log::error!("failed to save project: {err}");
                false
            }
        }
    }

    pub fn delete(&mut self, backend: &dyn Backend, project_id: Uuid) -> bool {
        match backend.delete_project(None, project_id) {
            Ok(deleted) => {
                self.projects.retain(|p| p.id != deleted);
                self.reload(backend);
                true
            }
            Err(err) => {
                log::error!("failed to delete project: {err}");
                false
            }
        }
    }

    /// Launches a project and forces an immediate running-state poll instead
    /// of waiting out the poll interval.
    pub fn launch(&mut self, backend: &dyn Backend, project_id: Uuid) -> bool {
        match backend.launch_project(None, project_id) {
            Ok(()) => {
                self.poll_running(backend);
                true
            }
            Err(err) => {
                log::error!("failed to launch project: {err}");
                false
            }
        }
    }

    pub fn stop(&mut self, backend: &dyn Backend, project_id: Uuid) -> bool {
        if !self.stopping.insert(project_id) {
            return false;
        }
        match backend.stop_project(project_id) {
            Ok(()) => {
                // The backend acks the stop before the process is gone, so
                // the id stays in `stopping` until a poll stops reporting it.
                self.poll_running(backend);
                true
            }
            Err(err) => {
                log::error!("failed to stop project: {err}");
                self.stopping.remove(&project_id);
                false
            }
        }
    }

    /// Polls the running set when the interval has elapsed.
    pub fn maybe_poll(&mut self, backend: &dyn Backend) {
        let due = match self.last_poll {
            Some(at) => at.elapsed() >= RUNNING_POLL_INTERVAL,
            None => true,
        };
        if due {
            self.poll_running(backend);
        }
    }

    pub fn poll_running(&mut self, backend: &dyn Backend) {
        match backend.get_running_projects() {
            Ok(ids) => {
                self.running = ids.into_iter().collect();
                let running = &self.running;
                self.stopping.retain(|id| running.contains(id));
            }
            // Keep the last known set; a transient backend error should not
            // flip every project to "stopped".
            Err(err) => log::warn!("running-projects poll failed: {err}"),
        }
        self.last_poll = Some(Instant::now());
    }
}
