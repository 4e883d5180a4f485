// Background writer that saves layout snapshots off the request path
use crate::application::layout_repository::{LayoutRepository, PersistenceHandle};
use crate::domain::layout::LayoutMap;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

/// Outcome of the most recent save, published for health reporting
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PersistenceStatus {
    Idle,
    Saved { at: DateTime<Utc> },
    Failed { at: DateTime<Utc>, error: String },
}

pub struct PersistenceWorker {
    pub handle: PersistenceHandle,
    pub status: watch::Receiver<PersistenceStatus>,
    pub task: JoinHandle<()>,
}

/// Start the writer task. It exits once every handle has been dropped and
/// the queue is drained.
pub fn spawn_persistence_worker(repository: Arc<dyn LayoutRepository>) -> PersistenceWorker {
    let (tx, mut rx) = mpsc::unbounded_channel::<LayoutMap>();
    let (status_tx, status_rx) = watch::channel(PersistenceStatus::Idle);

    let task = tokio::spawn(async move {
        while let Some(mut layouts) = rx.recv().await {
            // Snapshots are full mappings, so only the newest queued one matters
            while let Ok(newer) = rx.try_recv() {
                layouts = newer;
            }

            let status = match repository.save(&layouts).await {
                Ok(()) => {
                    tracing::debug!("Saved {} customized layouts", layouts.len());
                    PersistenceStatus::Saved { at: Utc::now() }
                }
                Err(e) => {
                    tracing::error!("Failed to save layouts: {}", e);
                    PersistenceStatus::Failed {
                        at: Utc::now(),
                        error: e.to_string(),
                    }
                }
            };
            let _ = status_tx.send(status);
        }
        tracing::debug!("Layout persistence worker stopped");
    });

    PersistenceWorker {
        handle: PersistenceHandle::new(tx),
        status: status_rx,
        task,
    }
}
