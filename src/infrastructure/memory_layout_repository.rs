// In-memory layout repository test double
use crate::application::error::PersistenceError;
use crate::application::layout_repository::LayoutRepository;
use crate::domain::layout::LayoutMap;
use async_trait::async_trait;
use tokio::sync::Mutex;

#[derive(Debug, Default)]
pub struct MemoryLayoutRepository {
    stored: Mutex<Option<String>>,
    fail_saves: bool,
}

impl MemoryLayoutRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository whose saves always fail
    pub fn failing() -> Self {
        Self {
            stored: Mutex::new(None),
            fail_saves: true,
        }
    }

    /// Raw stored document, if any
    pub async fn stored(&self) -> Option<String> {
        self.stored.lock().await.clone()
    }
}

#[async_trait]
impl LayoutRepository for MemoryLayoutRepository {
    async fn load(&self) -> LayoutMap {
        let stored = self.stored.lock().await;
        stored
            .as_deref()
            .and_then(|text| serde_json::from_str(text).ok())
            .unwrap_or_default()
    }

    async fn save(&self, layouts: &LayoutMap) -> Result<(), PersistenceError> {
        if self.fail_saves {
            return Err(PersistenceError::Io(std::io::Error::other(
                "layout storage is read-only",
            )));
        }
        *self.stored.lock().await = Some(serde_json::to_string(layouts)?);
        Ok(())
    }

    async fn clear_mode(&self, mode_id: &str) -> Result<(), PersistenceError> {
        let mut layouts = self.load().await;
        if layouts.remove(mode_id).is_some() {
            self.save(&layouts).await?;
        }
        Ok(())
    }

    async fn clear_all(&self) -> Result<(), PersistenceError> {
        *self.stored.lock().await = None;
        Ok(())
    }
}
