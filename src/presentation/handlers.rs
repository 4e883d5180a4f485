// HTTP request handlers
use crate::application::error::{ArtistError, ChatError, LayoutError};
use crate::domain::chat::Sender;
use crate::domain::mode::list_modes;
use crate::domain::schema::DashboardLayoutRecord;
use crate::domain::widget::{widget_catalog, WidgetPlacement};
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::presentation::app_state::AppState;
use axum::{
    body::Body,
    extract::{Path, Query, State},
    http::{HeaderMap, Response, StatusCode},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct SetModeRequest {
    pub mode: String,
}

#[derive(Deserialize)]
pub struct AddWidgetRequest {
    pub widget_type: String,
}

#[derive(Deserialize)]
pub struct MoveWidgetRequest {
    pub x: u32,
    pub y: u32,
}

#[derive(Deserialize)]
pub struct ResizeWidgetRequest {
    pub w: u32,
    pub h: u32,
}

#[derive(Deserialize)]
pub struct ChatMessageRequest {
    #[serde(default = "default_sender")]
    pub sender: Sender,
    pub text: String,
}

fn default_sender() -> Sender {
    Sender::User
}

#[derive(Deserialize)]
pub struct ExportQuery {
    pub user_id: i64,
}

#[derive(Serialize)]
struct CleanupResponse {
    removed: usize,
}

pub type ApiResponse = Response<Body>;

fn error_body(status: StatusCode, message: String) -> (StatusCode, serde_json::Value) {
    (status, json!({ "error": message }))
}

async fn error_response(status: StatusCode, message: String, compress: bool) -> ApiResponse {
    let (status, body) = error_body(status, message);
    json_response(status, &body, compress).await
}

async fn layout_error_response(err: LayoutError, compress: bool) -> ApiResponse {
    let status = match err {
        LayoutError::Duplicate { .. } => StatusCode::CONFLICT,
        LayoutError::NotFound { .. } => StatusCode::NOT_FOUND,
        LayoutError::DuplicateId { .. } => StatusCode::UNPROCESSABLE_ENTITY,
    };
    error_response(status, err.to_string(), compress).await
}

/// Health check endpoint, including the outcome of the last layout save
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let persistence = state.persistence_status.borrow().clone();
    Json(json!({ "status": "ok", "persistence": persistence }))
}

/// Dashboard view for the active mode
pub async fn dashboard(headers: HeaderMap, State(state): State<Arc<AppState>>) -> ApiResponse {
    let view = state.dashboard_service.view().await;
    json_response(StatusCode::OK, &view, accepts_brotli(&headers)).await
}

pub async fn list_dashboard_modes(headers: HeaderMap) -> ApiResponse {
    json_response(StatusCode::OK, &list_modes(), accepts_brotli(&headers)).await
}

pub async fn list_widget_types(headers: HeaderMap) -> ApiResponse {
    json_response(StatusCode::OK, &widget_catalog(), accepts_brotli(&headers)).await
}

pub async fn current_mode(headers: HeaderMap, State(state): State<Arc<AppState>>) -> ApiResponse {
    let view = state.dashboard_service.view().await;
    let body = json!({ "mode": view.mode, "show_hint": view.show_hint });
    json_response(StatusCode::OK, &body, accepts_brotli(&headers)).await
}

pub async fn set_mode(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Json(request): Json<SetModeRequest>,
) -> ApiResponse {
    let view = state.dashboard_service.set_mode(&request.mode).await;
    json_response(StatusCode::OK, &view, accepts_brotli(&headers)).await
}

pub async fn dismiss_hint(headers: HeaderMap, State(state): State<Arc<AppState>>) -> ApiResponse {
    let view = state.dashboard_service.dismiss_hint().await;
    json_response(StatusCode::OK, &view, accepts_brotli(&headers)).await
}

pub async fn get_layout(
    Path(mode): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> ApiResponse {
    let layout = state.dashboard_service.get_layout(Some(&mode)).await;
    json_response(StatusCode::OK, &layout, accepts_brotli(&headers)).await
}

/// Layout change from the client grid (drag or resize of several widgets)
pub async fn replace_layout(
    Path(mode): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Json(placements): Json<Vec<WidgetPlacement>>,
) -> ApiResponse {
    let compress = accepts_brotli(&headers);
    match state
        .dashboard_service
        .replace_layout(Some(&mode), placements)
        .await
    {
        Ok(layout) => json_response(StatusCode::OK, &layout, compress).await,
        Err(e) => layout_error_response(e, compress).await,
    }
}

pub async fn reset_layout(
    Path(mode): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> ApiResponse {
    let layout = state.dashboard_service.reset_mode(Some(&mode)).await;
    json_response(StatusCode::OK, &layout, accepts_brotli(&headers)).await
}

pub async fn reset_all_layouts(State(state): State<Arc<AppState>>) -> StatusCode {
    state.dashboard_service.reset_all().await;
    StatusCode::NO_CONTENT
}

pub async fn add_widget(
    Path(mode): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Json(request): Json<AddWidgetRequest>,
) -> ApiResponse {
    let compress = accepts_brotli(&headers);
    match state
        .dashboard_service
        .add_widget(Some(&mode), &request.widget_type)
        .await
    {
        Ok(placement) => json_response(StatusCode::CREATED, &placement, compress).await,
        Err(e) => layout_error_response(e, compress).await,
    }
}

pub async fn move_widget(
    Path((mode, widget_id)): Path<(String, String)>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Json(request): Json<MoveWidgetRequest>,
) -> ApiResponse {
    let compress = accepts_brotli(&headers);
    match state
        .dashboard_service
        .move_widget(Some(&mode), &widget_id, request.x, request.y)
        .await
    {
        Ok(placement) => json_response(StatusCode::OK, &placement, compress).await,
        Err(e) => layout_error_response(e, compress).await,
    }
}

pub async fn resize_widget(
    Path((mode, widget_id)): Path<(String, String)>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Json(request): Json<ResizeWidgetRequest>,
) -> ApiResponse {
    let compress = accepts_brotli(&headers);
    match state
        .dashboard_service
        .resize_widget(Some(&mode), &widget_id, request.w, request.h)
        .await
    {
        Ok(placement) => json_response(StatusCode::OK, &placement, compress).await,
        Err(e) => layout_error_response(e, compress).await,
    }
}

pub async fn remove_widget(
    Path((mode, widget_id)): Path<(String, String)>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> ApiResponse {
    let compress = accepts_brotli(&headers);
    match state
        .dashboard_service
        .remove_widget(Some(&mode), &widget_id)
        .await
    {
        Ok(placement) => json_response(StatusCode::OK, &placement, compress).await,
        Err(e) => layout_error_response(e, compress).await,
    }
}

pub async fn cleanup_duplicates(
    Path(mode): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> ApiResponse {
    let removed = state.dashboard_service.cleanup_duplicates(Some(&mode)).await;
    json_response(
        StatusCode::OK,
        &CleanupResponse { removed },
        accepts_brotli(&headers),
    )
    .await
}

/// Customized layouts in the backend `dashboard_layouts` record shape
pub async fn export_layouts(
    Query(query): Query<ExportQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> ApiResponse {
    let compress = accepts_brotli(&headers);
    let layouts = state.dashboard_service.snapshot().await;
    match DashboardLayoutRecord::from_layouts(query.user_id, &layouts) {
        Ok(record) => json_response(StatusCode::OK, &record, compress).await,
        Err(e) => {
            tracing::error!("Failed to export layouts: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string(), compress).await
        }
    }
}

pub async fn list_chat_messages(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> ApiResponse {
    let messages = state.chat_service.messages().await;
    json_response(StatusCode::OK, &messages, accepts_brotli(&headers)).await
}

pub async fn post_chat_message(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatMessageRequest>,
) -> ApiResponse {
    let compress = accepts_brotli(&headers);
    match state
        .chat_service
        .append(request.sender, &request.text)
        .await
    {
        Ok(message) => json_response(StatusCode::CREATED, &message, compress).await,
        Err(e @ ChatError::EmptyMessage) => {
            error_response(StatusCode::UNPROCESSABLE_ENTITY, e.to_string(), compress).await
        }
    }
}

async fn artist_error_response(err: ArtistError, compress: bool) -> ApiResponse {
    let status = match err {
        ArtistError::NotFound(_) => StatusCode::NOT_FOUND,
        ArtistError::Upstream(_) => {
            tracing::warn!("Artist lookup failed: {}", err);
            StatusCode::BAD_GATEWAY
        }
    };
    error_response(status, err.to_string(), compress).await
}

pub async fn artist_overview(
    Path(artist_id): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> ApiResponse {
    let compress = accepts_brotli(&headers);
    match state.artist_service.overview(&artist_id).await {
        Ok(overview) => json_response(StatusCode::OK, &overview, compress).await,
        Err(e) => artist_error_response(e, compress).await,
    }
}

pub async fn refresh_artist_stats(
    Path(artist_id): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> ApiResponse {
    let compress = accepts_brotli(&headers);
    match state.artist_service.refresh(&artist_id).await {
        Ok(stats) => json_response(StatusCode::OK, &stats, compress).await,
        Err(e) => artist_error_response(e, compress).await,
    }
}

pub async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    let (status, body) = error_body(StatusCode::NOT_FOUND, "page not found".to_string());
    (status, Json(body))
}
