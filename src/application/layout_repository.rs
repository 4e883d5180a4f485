// Repository trait for persisted layouts plus the write-through handle
use crate::application::error::PersistenceError;
use crate::domain::layout::LayoutMap;
use async_trait::async_trait;
use tokio::sync::mpsc;

#[async_trait]
pub trait LayoutRepository: Send + Sync {
    /// Load every persisted layout; missing or malformed storage yields an empty map
    async fn load(&self) -> LayoutMap;

    /// Replace the persisted mapping with the full given mapping
    async fn save(&self, layouts: &LayoutMap) -> Result<(), PersistenceError>;

    /// Delete one mode's entry
    async fn clear_mode(&self, mode_id: &str) -> Result<(), PersistenceError>;

    /// Delete the stored mapping outright
    async fn clear_all(&self) -> Result<(), PersistenceError>;
}

/// Non-blocking sender of layout snapshots to the persistence worker
#[derive(Debug, Clone, Default)]
pub struct PersistenceHandle {
    tx: Option<mpsc::UnboundedSender<LayoutMap>>,
}

impl PersistenceHandle {
    pub fn new(tx: mpsc::UnboundedSender<LayoutMap>) -> Self {
        Self { tx: Some(tx) }
    }

    /// Handle that drops every snapshot (in-memory only sessions)
    pub fn detached() -> Self {
        Self { tx: None }
    }

    pub fn persist(&self, layouts: LayoutMap) {
        let Some(tx) = &self.tx else {
            return;
        };
        if tx.send(layouts).is_err() {
            tracing::warn!("Layout persistence worker has stopped; change not saved");
        }
    }
}
