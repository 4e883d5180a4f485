// Artist repository backed by an upstream HTTP API
use crate::application::artist_repository::ArtistRepository;
use crate::application::error::ArtistError;
use crate::domain::artist::{ArtistProfile, ArtistStats};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

#[derive(Debug, Clone)]
pub struct HttpArtistRepository {
    base_url: String,
    client: reqwest::Client,
}

impl HttpArtistRepository {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn artist_url(&self, artist_id: &str, suffix: &str) -> String {
        format!(
            "{}/artists/{}{}",
            self.base_url,
            urlencoding::encode(artist_id),
            suffix
        )
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        artist_id: &str,
    ) -> Result<T, ArtistError> {
        tracing::debug!("Fetching {}", url);
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ArtistError::Upstream(e.to_string()))?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(ArtistError::NotFound(artist_id.to_string())),
            status if !status.is_success() => {
                let body = response.text().await.unwrap_or_default();
                Err(ArtistError::Upstream(format!("status {}: {}", status, body)))
            }
            _ => response
                .json::<T>()
                .await
                .map_err(|e| ArtistError::Upstream(format!("invalid response: {}", e))),
        }
    }
}

#[async_trait]
impl ArtistRepository for HttpArtistRepository {
    async fn fetch_profile(&self, artist_id: &str) -> Result<ArtistProfile, ArtistError> {
        let url = self.artist_url(artist_id, "");
        self.get_json(&url, artist_id).await
    }

    async fn fetch_stats(&self, artist_id: &str) -> Result<ArtistStats, ArtistError> {
        let url = self.artist_url(artist_id, "/stats");
        self.get_json(&url, artist_id).await
    }
}
