pub mod args;
pub mod color;
pub mod model;
pub mod search;

pub use model::{
    ActivityPoint, ActivityStats, AppSettings, AppSettingsUpdate, LaunchPreset,
    LaunchPresetInput, OpenConfig, Project, ProjectCount, ProjectInput, ThemePreference,
    Workspace, WorkspaceInput,
};
