// Repository trait for externally supplied artist data
use crate::application::error::ArtistError;
use crate::domain::artist::{ArtistProfile, ArtistStats};
use async_trait::async_trait;

#[async_trait]
pub trait ArtistRepository: Send + Sync {
    async fn fetch_profile(&self, artist_id: &str) -> Result<ArtistProfile, ArtistError>;

    async fn fetch_stats(&self, artist_id: &str) -> Result<ArtistStats, ArtistError>;
}
