// Bundled sample artist data, used when no upstream artist API is configured
use crate::application::artist_repository::ArtistRepository;
use crate::application::error::ArtistError;
use crate::domain::artist::{ArtistProfile, ArtistStats, CountryListeners};
use async_trait::async_trait;
use chrono::Utc;

pub const SAMPLE_ARTIST_ID: &str = "luna-vale";

#[derive(Debug, Clone, Default)]
pub struct SampleArtistRepository;

impl SampleArtistRepository {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ArtistRepository for SampleArtistRepository {
    async fn fetch_profile(&self, artist_id: &str) -> Result<ArtistProfile, ArtistError> {
        if artist_id != SAMPLE_ARTIST_ID {
            return Err(ArtistError::NotFound(artist_id.to_string()));
        }
        Ok(ArtistProfile {
            id: SAMPLE_ARTIST_ID.to_string(),
            name: "Luna Vale".to_string(),
            genre: Some("Indie Pop".to_string()),
            image_url: None,
        })
    }

    async fn fetch_stats(&self, artist_id: &str) -> Result<ArtistStats, ArtistError> {
        if artist_id != SAMPLE_ARTIST_ID {
            return Err(ArtistError::NotFound(artist_id.to_string()));
        }
        let top_countries = [("US", 412_000), ("DE", 188_500), ("BR", 143_200)]
            .into_iter()
            .map(|(country, listeners)| CountryListeners {
                country: country.to_string(),
                listeners,
            })
            .collect();

        Ok(ArtistStats {
            artist_id: SAMPLE_ARTIST_ID.to_string(),
            monthly_listeners: 1_254_000,
            followers: 318_400,
            total_streams: 96_700_000,
            top_countries,
            refreshed_at: Utc::now(),
        })
    }
}
