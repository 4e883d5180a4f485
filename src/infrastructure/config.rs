use crate::domain::layout::{DefaultLayouts, LayoutMap};
use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub server: ServerSettings,
    pub storage: StorageSettings,
    #[serde(default)]
    pub artists: ArtistSettings,
    pub log: LogSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageSettings {
    pub layouts_path: String,
    pub default_layouts_path: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ArtistSettings {
    /// Upstream artist API; the bundled sample data is used when unset
    pub base_url: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    pub level: String,
}

impl ServerSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    load_dashboard_config_from("config/dashboard")
}

/// Defaults, then the optional config file, then `DASHBOARD__*` environment variables
pub fn load_dashboard_config_from(name: &str) -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8080)?
        .set_default("storage.layouts_path", "data/layouts.json")?
        .set_default("storage.default_layouts_path", "config/layouts.toml")?
        .set_default("log.level", "info")?
        .add_source(config::File::with_name(name).required(false))
        .add_source(
            config::Environment::with_prefix("DASHBOARD")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

/// Default layouts from a TOML file keyed by mode, or the built-in set if the file is absent
pub fn load_default_layouts(path: impl AsRef<Path>) -> anyhow::Result<DefaultLayouts> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::debug!("No default layouts at {}, using built-in", path.display());
        return Ok(DefaultLayouts::builtin());
    }

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read default layouts from {}", path.display()))?;
    let mut layouts: LayoutMap = toml::from_str(&text)
        .with_context(|| format!("Invalid default layouts in {}", path.display()))?;

    for (mode, layout) in &mut layouts {
        if let Some(widget_id) = layout.duplicate_id() {
            anyhow::bail!("Default layout '{}' repeats widget id '{}'", mode, widget_id);
        }
        layout.clamp_sizes();
    }

    Ok(DefaultLayouts::new(layouts))
}
