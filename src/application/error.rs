// Errors surfaced by the application services
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("widget type '{widget_type}' is already on the '{mode}' dashboard")]
    Duplicate { mode: String, widget_type: String },

    #[error("widget '{widget_id}' not found on the '{mode}' dashboard")]
    NotFound { mode: String, widget_id: String },

    #[error("widget id '{widget_id}' appears more than once")]
    DuplicateId { widget_id: String },
}

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("layout storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("layout serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChatError {
    #[error("chat message text is empty")]
    EmptyMessage,
}

#[derive(Debug, Error)]
pub enum ArtistError {
    #[error("artist '{0}' not found")]
    NotFound(String),

    #[error("artist service request failed: {0}")]
    Upstream(String),
}
