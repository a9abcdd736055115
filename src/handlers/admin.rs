use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{info, warn};

use super::LinkRequest;
use crate::error::{Error, Result};
use crate::site_config::ConfigUpdate;
use crate::state::AppState;
use crate::ticket::{AdminSnapshot, TicketUpdate};

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// POST /api/login: gates the staff screen only; no session is issued.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<Value>> {
    let username = body.username.unwrap_or_default();
    let password = body.password.unwrap_or_default();
    if !state.auth.verify(&username, &password) {
        warn!(username = %username.trim(), "rejected login");
        return Err(Error::InvalidCredentials);
    }
    info!(username = %username.trim(), "staff login");
    Ok(Json(json!({"success": true, "message": "Đăng nhập thành công!"})))
}

/// GET /api/admin/data
pub async fn data(State(state): State<AppState>) -> Json<AdminSnapshot> {
    Json(state.tickets.list_all(&state.labels).await)
}

#[derive(Deserialize)]
pub struct ManageLabelRequest {
    pub action: Option<String>,
    pub label: Option<String>,
}

/// POST /api/admin/manage_label: `action` is `add` or `delete`.
pub async fn manage_label(
    State(state): State<AppState>,
    Json(body): Json<ManageLabelRequest>,
) -> Result<Json<Value>> {
    let label = body.label.as_deref().unwrap_or_default();
    let labels = match body.action.as_deref() {
        Some("add") => state.labels.add(label).await?,
        Some("delete") => state.labels.delete(label).await?,
        other => return Err(Error::UnknownAction(other.unwrap_or_default().to_string())),
    };
    Ok(Json(json!({"success": true, "labels": labels})))
}

#[derive(Deserialize)]
pub struct UpdateTicketRequest {
    pub image_link: Option<String>,
    #[serde(flatten)]
    pub update: TicketUpdate,
}

/// POST /api/admin/update_ticket
pub async fn update_ticket(
    State(state): State<AppState>,
    Json(body): Json<UpdateTicketRequest>,
) -> Result<Json<Value>> {
    let link = body.image_link.as_deref().unwrap_or_default();
    state.tickets.update(link, body.update).await?;
    Ok(Json(json!({"success": true})))
}

/// POST /api/admin/delete_ticket
pub async fn delete_ticket(
    State(state): State<AppState>,
    Json(body): Json<LinkRequest>,
) -> Result<Json<Value>> {
    state.tickets.delete(body.link()).await?;
    Ok(Json(json!({"success": true, "message": "Đã xóa thành công!"})))
}

/// POST /api/admin/update_config
pub async fn update_config(
    State(state): State<AppState>,
    Json(body): Json<ConfigUpdate>,
) -> Result<Json<Value>> {
    state.site_config.update(body).await?;
    Ok(Json(json!({"success": true, "message": "Đã cập nhật giao diện!"})))
}
