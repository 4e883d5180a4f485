// Application state for HTTP handlers
use crate::application::artist_service::ArtistService;
use crate::application::chat_service::ChatService;
use crate::application::dashboard_service::DashboardService;
use crate::infrastructure::persistence_worker::PersistenceStatus;
use tokio::sync::watch;

pub struct AppState {
    pub dashboard_service: DashboardService,
    pub chat_service: ChatService,
    pub artist_service: ArtistService,
    pub persistence_status: watch::Receiver<PersistenceStatus>,
}
