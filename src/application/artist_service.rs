// Artist service - selected artist profile with cached, refreshable stats
use crate::application::artist_repository::ArtistRepository;
use crate::application::error::ArtistError;
use crate::domain::artist::{ArtistProfile, ArtistStats};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Clone, Serialize)]
pub struct ArtistOverview {
    pub profile: ArtistProfile,
    pub stats: ArtistStats,
}

#[derive(Clone)]
pub struct ArtistService {
    repository: Arc<dyn ArtistRepository>,
    stats: Arc<RwLock<HashMap<String, ArtistStats>>>,
}

impl ArtistService {
    pub fn new(repository: Arc<dyn ArtistRepository>) -> Self {
        Self {
            repository,
            stats: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Profile plus cached stats, fetching stats on first use
    pub async fn overview(&self, artist_id: &str) -> Result<ArtistOverview, ArtistError> {
        let profile = self.repository.fetch_profile(artist_id).await?;
        let cached = self.stats.read().await.get(artist_id).cloned();
        let stats = match cached {
            Some(stats) => stats,
            None => self.refresh(artist_id).await?,
        };
        Ok(ArtistOverview { profile, stats })
    }

    /// Fetch fresh stats and replace the cached copy; the last write wins
    pub async fn refresh(&self, artist_id: &str) -> Result<ArtistStats, ArtistError> {
        let stats = self.repository.fetch_stats(artist_id).await?;
        tracing::debug!(
            "Refreshed stats for {}: {} monthly listeners",
            artist_id,
            stats.monthly_listeners
        );
        self.stats
            .write()
            .await
            .insert(artist_id.to_string(), stats.clone());
        Ok(stats)
    }
}
