use eframe::egui;
use eframe::egui::RichText;
use std::time::{Duration, Instant};

use launchdeck_core::{LaunchPreset, Project, ThemePreference, Workspace};
use uuid::Uuid;

use crate::state::*;
use crate::GuiApp;

mod dashboard;
mod projects;
mod settings;
mod widgets;
mod workspaces;

pub(crate) use widgets::{mode_selector, styled_button};

pub(crate) const BUTTON_SIZE: egui::Vec2 = egui::Vec2 { x: 110.0, y: 28.0 };
