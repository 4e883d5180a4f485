// Dashboard mode registry
use serde::Serialize;

/// Mode that shows the assistant onboarding hint on first entry
pub const ASSIST_MODE_ID: &str = "mc-assist";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardMode {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

// The first entry is the default mode
static MODES: [DashboardMode; 3] = [
    DashboardMode {
        id: "standard",
        label: "Standard",
        description: "Overview of health metrics, trends and listeners",
        icon: "layout-dashboard",
    },
    DashboardMode {
        id: ASSIST_MODE_ID,
        label: "MC Assist",
        description: "Chat-first workspace with the dashboard assistant",
        icon: "bot",
    },
    DashboardMode {
        id: "touring",
        label: "Touring",
        description: "Geographic listener data and tour planning",
        icon: "map",
    },
];

pub fn list_modes() -> &'static [DashboardMode] {
    &MODES
}

pub fn default_mode() -> &'static DashboardMode {
    &MODES[0]
}

pub fn find_mode(id: &str) -> Option<&'static DashboardMode> {
    MODES.iter().find(|m| m.id == id)
}

/// Registry lookup that falls back to the default mode for unknown ids
pub fn resolve_mode(id: &str) -> &'static DashboardMode {
    find_mode(id).unwrap_or_else(|| {
        tracing::warn!("Unknown dashboard mode '{}', using '{}'", id, default_mode().id);
        default_mode()
    })
}

impl DashboardMode {
    pub fn is_assist(&self) -> bool {
        self.id == ASSIST_MODE_ID
    }
}
