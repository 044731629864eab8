//! Application settings with a local appearance cache.
//!
//! The backend owns the settings; the store keeps a small TOML cache of the
//! appearance fields so a restart paints the window with the last known
//! theme before the first round-trip completes.

use std::fs;
use std::path::PathBuf;

use launchdeck_client::{Backend, BackendError};
use launchdeck_core::{
    AppSettings, AppSettingsUpdate, LaunchPreset, LaunchPresetInput, ThemePreference,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Appearance fields mirrored to disk.
#[derive(Debug, Serialize, Deserialize)]
struct AppearanceCache {
    theme: ThemePreference,
    accent_color: String,
    zoom_level: u8,
}

impl From<&AppSettings> for AppearanceCache {
    fn from(settings: &AppSettings) -> Self {
        AppearanceCache {
            theme: settings.theme,
            accent_color: settings.accent_color.clone(),
            zoom_level: settings.zoom_level,
        }
    }
}

pub struct SettingsStore {
    settings: AppSettings,
    cache_path: PathBuf,
    /// Whether the last backend fetch succeeded.
    loaded: bool,
}

impl SettingsStore {
    /// Builds the store from the cache file, falling back to defaults when
    /// the cache is missing or unreadable.
    pub fn new(cache_path: PathBuf) -> Self {
        let mut settings = AppSettings::default();
        match fs::read_to_string(&cache_path) {
            Ok(raw) => match toml::from_str::<AppearanceCache>(&raw) {
                Ok(cache) => {
                    settings.theme = cache.theme;
                    settings.accent_color = cache.accent_color;
                    settings.zoom_level = cache.zoom_level;
                }
                Err(err) => {
                    log::warn!("ignoring malformed appearance cache: {err}");
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => {
                log::warn!("failed to read appearance cache: {err}");
            }
        }
        SettingsStore {
            settings,
            cache_path,
            loaded: false,
        }
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn presets(&self) -> &[LaunchPreset] {
        &self.settings.launch_presets
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Replaces the in-memory settings with the backend's copy.
    pub fn reload(&mut self, backend: &dyn Backend) -> Result<(), BackendError> {
        match backend.get_settings() {
            Ok(settings) => {
                self.settings = settings;
                self.loaded = true;
                self.write_cache();
                Ok(())
            }
            Err(err) => {
                self.loaded = false;
                Err(err)
            }
        }
    }

    pub fn set_theme(&mut self, backend: &dyn Backend, theme: ThemePreference) {
        if self.settings.theme == theme {
            return;
        }
        self.settings.theme = theme;
        self.persist(backend);
    }

    pub fn set_accent_color(&mut self, backend: &dyn Backend, accent_color: String) {
        if self.settings.accent_color == accent_color {
            return;
        }
        self.settings.accent_color = accent_color;
        self.persist(backend);
    }

    pub fn set_zoom_level(&mut self, backend: &dyn Backend, zoom_level: u8) {
        if self.settings.zoom_level == zoom_level {
            return;
        }
        self.settings.zoom_level = zoom_level;
        self.persist(backend);
    }

    /// Adds or replaces a preset. A payload without an id creates one.
    pub fn upsert_preset(&mut self, backend: &dyn Backend, input: LaunchPresetInput) {
        let preset = LaunchPreset {
            id: input.id.unwrap_or_else(Uuid::new_v4),
            name: input.name,
            description: input.description,
            config: input.config,
        };
        let presets = &mut self.settings.launch_presets;
        match presets.iter_mut().find(|existing| existing.id == preset.id) {
            Some(existing) => *existing = preset,
            None => presets.push(preset),
        }
        self.persist(backend);
    }

    pub fn remove_preset(&mut self, backend: &dyn Backend, preset_id: Uuid) {
        self.settings.launch_presets.retain(|preset| preset.id != preset_id);
        self.persist(backend);
    }

    /// Pushes the full settings to the backend. On failure the local edit is
    /// rolled back by re-fetching the backend's copy.
    fn persist(&mut self, backend: &dyn Backend) {
        self.write_cache();
        match backend.update_settings(AppSettingsUpdate::from(&self.settings)) {
            Ok(stored) => {
                self.settings = stored;
                self.loaded = true;
                self.write_cache();
            }
            Err(err) => {
                log::error!("failed to persist settings: {err}");
                if let Err(err) = self.reload(backend) {
                    log::warn!("failed to re-fetch settings after write error: {err}");
                }
            }
        }
    }

    fn write_cache(&self) {
        if let Some(parent) = self.cache_path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                log::warn!("failed to create cache directory: {err}");
                return;
            }
        }
        let cache = AppearanceCache::from(&self.settings);
        match toml::to_string_pretty(&cache) {
            Ok(raw) => {
                if let Err(err) = fs::write(&self.cache_path, raw) {
                    log::warn!("failed to write appearance cache: {err}");
                }
            }
            Err(err) => log::warn!("failed to encode appearance cache: {err}"),
        }
    }
}

/// Default location of the appearance cache, under the platform config dir.
pub fn default_cache_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("launchdeck")
        .join("appearance.toml")
}
