//! Transient state for the dialogs and overlays of the GUI.

use std::path::PathBuf;

use launchdeck_core::args::{join_args, split_args};
use launchdeck_core::{
    LaunchPreset, LaunchPresetInput, OpenConfig, Project, ProjectInput,
};
use uuid::Uuid;

use crate::state::{ConfirmAction, OpenMode, WorkspaceMenuMode};

/// Form state of the project create/edit dialog.
pub(crate) struct ProjectDialogState {
    pub open: bool,
    /// `Some` when editing an existing project.
    pub editing: Option<Uuid>,
    pub name: String,
    pub path: String,
    pub description: String,
    pub mode: OpenMode,
    pub executable: String,
    pub command: String,
    pub args: String,
}

impl Default for ProjectDialogState {
    fn default() -> Self {
        ProjectDialogState {
            open: false,
            editing: None,
            name: String::new(),
            path: String::new(),
            description: String::new(),
            mode: OpenMode::SystemDefault,
            executable: String::new(),
            command: String::new(),
            args: String::new(),
        }
    }
}

impl ProjectDialogState {
    pub fn open_new(&mut self) {
        *self = ProjectDialogState::default();
        self.open = true;
    }

    pub fn open_edit(&mut self, project: &Project) {
        *self = ProjectDialogState::default();
        self.open = true;
        self.editing = Some(project.id);
        self.name = project.name.clone();
        self.path = project.path.to_string_lossy().into_owned();
        self.description = project.description.clone().unwrap_or_default();
        self.load_config(&project.open_config);
    }

    /// Copies a preset's launch configuration into the form fields. This is
    /// a one-time copy; later edits to the preset do not affect the project.
    pub fn apply_preset(&mut self, preset: &LaunchPreset) {
        self.load_config(&preset.config);
    }

    fn load_config(&mut self, config: &OpenConfig) {
        match config {
            OpenConfig::SystemDefault => {
                self.mode = OpenMode::SystemDefault;
            }
            OpenConfig::CustomApp { executable, args } => {
                self.mode = OpenMode::CustomApp;
                self.executable = executable.to_string_lossy().into_owned();
                self.args = join_args(args);
            }
            OpenConfig::CustomCommand { command, args } => {
                self.mode = OpenMode::CustomCommand;
                self.command = command.clone();
                self.args = join_args(args);
            }
        }
    }

    pub fn open_config(&self) -> OpenConfig {
        match self.mode {
            OpenMode::SystemDefault => OpenConfig::SystemDefault,
            OpenMode::CustomApp => OpenConfig::CustomApp {
                executable: PathBuf::from(self.executable.trim()),
                args: split_args(&self.args),
            },
            OpenMode::CustomCommand => OpenConfig::CustomCommand {
                command: self.command.trim().to_string(),
                args: split_args(&self.args),
            },
        }
    }

    pub fn to_input(&self) -> ProjectInput {
        let description = self.description.trim();
        ProjectInput {
            id: self.editing,
            name: self.name.trim().to_string(),
            path: PathBuf::from(self.path.trim()),
            description: (!description.is_empty()).then(|| description.to_string()),
            open_config: self.open_config(),
        }
    }

    /// Human-readable reason the form cannot be submitted yet.
    pub fn validation_error(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() {
            return Some("The project needs a name.");
        }
        if self.path.trim().is_empty() {
            return Some("The project needs a folder path.");
        }
        match self.mode {
            OpenMode::SystemDefault => None,
            OpenMode::CustomApp if self.executable.trim().is_empty() => {
                Some("Custom application mode needs an executable.")
            }
            OpenMode::CustomCommand if self.command.trim().is_empty() => {
                Some("Custom command mode needs a command.")
            }
            _ => None,
        }
    }
}

/// Form state of the launch preset create/edit dialog.
pub(crate) struct PresetDialogState {
    pub open: bool,
    pub editing: Option<Uuid>,
    pub name: String,
    pub description: String,
    pub mode: OpenMode,
    pub executable: String,
    pub command: String,
    pub args: String,
}

impl Default for PresetDialogState {
    fn default() -> Self {
        PresetDialogState {
            open: false,
            editing: None,
            name: String::new(),
            description: String::new(),
            mode: OpenMode::SystemDefault,
            executable: String::new(),
            command: String::new(),
            args: String::new(),
        }
    }
}

impl PresetDialogState {
    pub fn open_new(&mut self) {
        *self = PresetDialogState::default();
        self.open = true;
    }

    pub fn open_edit(&mut self, preset: &LaunchPreset) {
        *self = PresetDialogState::default();
        self.open = true;
        self.editing = Some(preset.id);
        self.name = preset.name.clone();
        self.description = preset.description.clone().unwrap_or_default();
        match &preset.config {
            OpenConfig::SystemDefault => {
                self.mode = OpenMode::SystemDefault;
            }
            OpenConfig::CustomApp { executable, args } => {
                self.mode = OpenMode::CustomApp;
                self.executable = executable.to_string_lossy().into_owned();
                self.args = join_args(args);
            }
            OpenConfig::CustomCommand { command, args } => {
                self.mode = OpenMode::CustomCommand;
                self.command = command.clone();
                self.args = join_args(args);
            }
        }
    }

    pub fn open_config(&self) -> OpenConfig {
        match self.mode {
            OpenMode::SystemDefault => OpenConfig::SystemDefault,
            OpenMode::CustomApp => OpenConfig::CustomApp {
                executable: PathBuf::from(self.executable.trim()),
                args: split_args(&self.args),
            },
            OpenMode::CustomCommand => OpenConfig::CustomCommand {
                command: self.command.trim().to_string(),
                args: split_args(&self.args),
            },
        }
    }

    pub fn to_input(&self) -> LaunchPresetInput {
        let description = self.description.trim();
        LaunchPresetInput {
            id: self.editing,
            name: self.name.trim().to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            config: self.open_config(),
        }
    }

    pub fn validation_error(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() {
            return Some("The preset needs a name.");
        }
        match self.mode {
            OpenMode::SystemDefault => None,
            OpenMode::CustomApp if self.executable.trim().is_empty() => {
                Some("Custom application mode needs an executable.")
            }
            OpenMode::CustomCommand if self.command.trim().is_empty() => {
                Some("Custom command mode needs a command.")
            }
            _ => None,
        }
    }
}

/// State of the modal confirmation dialog.
#[derive(Default)]
pub(crate) struct ConfirmDialogState {
    pub open: bool,
    pub title: String,
    pub message: String,
    pub action_label: String,
    pub action: Option<ConfirmAction>,
}

/// State of the workspace switcher popup.
pub(crate) struct WorkspaceMenuState {
    pub open: bool,
    pub mode: WorkspaceMenuMode,
    pub name_input: String,
    pub rename_input: String,
}

impl Default for WorkspaceMenuState {
    fn default() -> Self {
        WorkspaceMenuState {
            open: false,
            mode: WorkspaceMenuMode::Browsing,
            name_input: String::new(),
            rename_input: String::new(),
        }
    }
}

impl WorkspaceMenuState {
    pub fn close(&mut self) {
        self.open = false;
        self.mode = WorkspaceMenuMode::Browsing;
        self.name_input.clear();
        self.rename_input.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_form_builds_variant_for_each_mode() {
        let mut dialog = ProjectDialogState::default();
        dialog.name = "Notes".into();
        dialog.path = "/home/me/notes".into();

        dialog.mode = OpenMode::SystemDefault;
        assert!(matches!(dialog.open_config(), OpenConfig::SystemDefault));

        dialog.mode = OpenMode::CustomApp;
        dialog.executable = "/usr/bin/code".into();
        dialog.args = "--new-window .".into();
        match dialog.open_config() {
            OpenConfig::CustomApp { executable, args } => {
                assert_eq!(executable, PathBuf::from("/usr/bin/code"));
                assert_eq!(args, vec!["--new-window", "."]);
            }
            other => panic!("unexpected config: {other:?}"),
        }

        dialog.mode = OpenMode::CustomCommand;
        dialog.command = "make".into();
        dialog.args = "run  --release".into();
        match dialog.open_config() {
            OpenConfig::CustomCommand { command, args } => {
                assert_eq!(command, "make");
                assert_eq!(args, vec!["run", "--release"]);
            }
            other => panic!("unexpected config: {other:?}"),
        }
    }

    #[test]
    fn project_form_validates_mode_specific_fields() {
        let mut dialog = ProjectDialogState::default();
        assert!(dialog.validation_error().is_some());
        dialog.name = "Notes".into();
        dialog.path = "/tmp/notes".into();
        assert!(dialog.validation_error().is_none());

        dialog.mode = OpenMode::CustomApp;
        assert!(dialog.validation_error().is_some());
        dialog.executable = "/usr/bin/code".into();
        assert!(dialog.validation_error().is_none());
    }

    #[test]
    fn applying_preset_copies_config_into_fields() {
        let preset = LaunchPreset {
            id: Uuid::new_v4(),
            name: "VS Code".into(),
            description: None,
            config: OpenConfig::CustomApp {
                executable: PathBuf::from("/usr/bin/code"),
                args: vec!["--reuse-window".into()],
            },
        };
        let mut dialog = ProjectDialogState::default();
        dialog.open_new();
        dialog.apply_preset(&preset);
        assert_eq!(dialog.mode, OpenMode::CustomApp);
        assert_eq!(dialog.executable, "/usr/bin/code");
        assert_eq!(dialog.args, "--reuse-window");
    }
}
