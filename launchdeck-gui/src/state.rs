use uuid::Uuid;

/// Top-level pages reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Page {
    Projects,
    Dashboard,
    Settings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SettingsTab {
    Appearance,
    Presets,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ViewMode {
    Grid,
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ChartPeriod {
    Week,
    Month,
}

impl ChartPeriod {
    pub(crate) fn days(self) -> usize {
        match self {
            ChartPeriod::Week => 7,
            ChartPeriod::Month => 30,
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            ChartPeriod::Week => "Week",
            ChartPeriod::Month => "Month",
        }
    }
}

/// Launch mode selected in the project and preset forms. Mirrors the
/// variants of [`launchdeck_core::OpenConfig`] without their payloads so
/// the form can switch modes while keeping the field contents around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OpenMode {
    SystemDefault,
    CustomApp,
    CustomCommand,
}

impl OpenMode {
    pub(crate) const ALL: [OpenMode; 3] = [
        OpenMode::SystemDefault,
        OpenMode::CustomApp,
        OpenMode::CustomCommand,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            OpenMode::SystemDefault => "System default",
            OpenMode::CustomApp => "Custom application",
            OpenMode::CustomCommand => "Custom command",
        }
    }
}

/// Action armed in the confirmation dialog, executed on "Confirm".
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ConfirmAction {
    DeleteProject(Uuid),
    DeletePreset(Uuid),
    DeleteWorkspace(Uuid),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum WorkspaceMenuMode {
    Browsing,
    Creating,
    Renaming(Uuid),
}
