// Artist profile and statistics
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryListeners {
    pub country: String,
    pub listeners: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistStats {
    pub artist_id: String,
    pub monthly_listeners: u64,
    pub followers: u64,
    pub total_streams: u64,
    #[serde(default)]
    pub top_countries: Vec<CountryListeners>,
    pub refreshed_at: DateTime<Utc>,
}
