// Presentation layer - HTTP surface over the dashboard services
pub mod app_state;
pub mod handlers;
pub mod router;
