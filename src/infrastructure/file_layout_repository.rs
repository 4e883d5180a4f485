// JSON file implementation of the layout repository
use crate::application::error::PersistenceError;
use crate::application::layout_repository::LayoutRepository;
use crate::domain::layout::LayoutMap;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Stores every mode's layout in a single JSON document
#[derive(Debug, Clone)]
pub struct FileLayoutRepository {
    path: PathBuf,
}

impl FileLayoutRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn encode(layouts: &LayoutMap) -> Result<String, PersistenceError> {
        let mut text = serde_json::to_string_pretty(layouts)?;
        text.push('\n');
        Ok(text)
    }

    async fn write(&self, text: &str) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        // Readers only ever see a complete document
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, text).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl LayoutRepository for FileLayoutRepository {
    async fn load(&self) -> LayoutMap {
        let text = match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No saved layouts at {}", self.path.display());
                return LayoutMap::new();
            }
            Err(e) => {
                tracing::warn!("Failed to read layouts from {}: {}", self.path.display(), e);
                return LayoutMap::new();
            }
        };

        match serde_json::from_str::<LayoutMap>(&text) {
            Ok(layouts) => {
                tracing::debug!("Loaded {} saved layouts", layouts.len());
                layouts
            }
            Err(e) => {
                tracing::warn!(
                    "Ignoring malformed layouts in {}: {}",
                    self.path.display(),
                    e
                );
                LayoutMap::new()
            }
        }
    }

    async fn save(&self, layouts: &LayoutMap) -> Result<(), PersistenceError> {
        let text = Self::encode(layouts)?;
        self.write(&text).await
    }

    async fn clear_mode(&self, mode_id: &str) -> Result<(), PersistenceError> {
        let mut layouts = self.load().await;
        if layouts.remove(mode_id).is_some() {
            self.save(&layouts).await?;
        }
        Ok(())
    }

    async fn clear_all(&self) -> Result<(), PersistenceError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
