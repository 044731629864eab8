use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub database_path: PathBuf,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceInput {
    pub name: String,
    pub description: Option<String>,
    pub database_path: Option<PathBuf>,
}

/// How a project is opened when launched. The `mode` tag is the wire
/// discriminant; `system_default` carries no further fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum OpenConfig {
    SystemDefault,
    CustomApp {
        executable: PathBuf,
        #[serde(default)]
        args: Vec<String>,
    },
    CustomCommand {
        command: String,
        #[serde(default)]
        args: Vec<String>,
    },
}

impl Default for OpenConfig {
    fn default() -> Self {
        Self::SystemDefault
    }
}

impl OpenConfig {
    pub fn mode_label(&self) -> &'static str {
        match self {
            Self::SystemDefault => "System default",
            Self::CustomApp { .. } => "Custom app",
            Self::CustomCommand { .. } => "Custom command",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub path: PathBuf,
    pub description: Option<String>,
    pub open_config: OpenConfig,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Upsert payload: a missing `id` means create.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInput {
    pub id: Option<Uuid>,
    pub name: String,
    pub path: PathBuf,
    pub description: Option<String>,
    #[serde(default)]
    pub open_config: OpenConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemePreference {
    Light,
    Dark,
    System,
}

impl Default for ThemePreference {
    fn default() -> Self {
        Self::Light
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchPreset {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub config: OpenConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchPresetInput {
    pub id: Option<Uuid>,
    pub name: String,
    pub description: Option<String>,
    pub config: OpenConfig,
}

fn default_accent_color() -> String {
    "#3b82f6".to_string()
}

fn default_zoom_level() -> u8 {
    100
}

fn default_font_size() -> u8 {
    16
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    #[serde(default)]
    pub theme: ThemePreference,
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
    #[serde(default = "default_zoom_level")]
    pub zoom_level: u8,
    #[serde(default)]
    pub font_family: Option<String>,
    #[serde(default = "default_font_size")]
    pub font_size: u8,
    #[serde(default)]
    pub launch_presets: Vec<LaunchPreset>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: ThemePreference::Light,
            accent_color: default_accent_color(),
            zoom_level: default_zoom_level(),
            font_family: None,
            font_size: default_font_size(),
            launch_presets: Vec::new(),
        }
    }
}

/// Full-settings write payload; the backend echoes the stored settings back.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettingsUpdate {
    pub theme: ThemePreference,
    pub accent_color: String,
    pub zoom_level: u8,
    pub font_family: Option<String>,
    #[serde(default = "default_font_size")]
    pub font_size: u8,
    #[serde(default)]
    pub launch_presets: Vec<LaunchPresetInput>,
}

impl From<&AppSettings> for AppSettingsUpdate {
    fn from(settings: &AppSettings) -> Self {
        Self {
            theme: settings.theme,
            accent_color: settings.accent_color.clone(),
            zoom_level: settings.zoom_level,
            font_family: settings.font_family.clone(),
            font_size: settings.font_size,
            launch_presets: settings
                .launch_presets
                .iter()
                .map(|preset| LaunchPresetInput {
                    id: Some(preset.id),
                    name: preset.name.clone(),
                    description: preset.description.clone(),
                    config: preset.config.clone(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityPoint {
    /// Day bucket as `YYYY-MM-DD`.
    pub date: String,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCount {
    pub name: String,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityStats {
    pub weekly_activity: Vec<ActivityPoint>,
    pub monthly_activity: Vec<ActivityPoint>,
    pub yearly_activity: Vec<ActivityPoint>,
    pub project_counts: Vec<ProjectCount>,
    pub total_launches: i64,
    pub total_projects: i64,
    pub average_daily_launches: f64,
}
