// Route table
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::*;
use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(dashboard))
        .route("/healthz", get(health_check))
        .route("/modes", get(list_dashboard_modes))
        .route("/mode", get(current_mode).put(set_mode))
        .route("/mode/hint/dismiss", post(dismiss_hint))
        .route("/widgets", get(list_widget_types))
        .route("/layouts", delete(reset_all_layouts))
        .route(
            "/layouts/:mode",
            get(get_layout).put(replace_layout).delete(reset_layout),
        )
        .route("/layouts/:mode/widgets", post(add_widget))
        .route("/layouts/:mode/widgets/:id", delete(remove_widget))
        .route("/layouts/:mode/widgets/:id/position", patch(move_widget))
        .route("/layouts/:mode/widgets/:id/size", patch(resize_widget))
        .route("/layouts/:mode/cleanup", post(cleanup_duplicates))
        .route("/export/layouts", get(export_layouts))
        .route("/chat/messages", get(list_chat_messages).post(post_chat_message))
        .route("/artists/:id", get(artist_overview))
        .route("/artists/:id/refresh", post(refresh_artist_stats))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
