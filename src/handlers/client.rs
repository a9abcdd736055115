use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use super::LinkRequest;
use crate::error::Result;
use crate::state::AppState;
use crate::ticket::{NewTicket, OwnUpdate};

/// POST /api/submit: a customer registers a shoot by its photo link.
pub async fn submit(
    State(state): State<AppState>,
    Json(body): Json<NewTicket>,
) -> Result<Json<Value>> {
    state.tickets.submit(body).await?;
    Ok(Json(json!({"success": true, "message": "Đã gửi thông tin!"})))
}

/// POST /api/check: status lookup by photo link. Internal labels are masked.
pub async fn check(
    State(state): State<AppState>,
    Json(body): Json<LinkRequest>,
) -> Result<Json<Value>> {
    let ticket = state.tickets.check(body.link()).await?;
    Ok(Json(json!({"success": true, "data": ticket})))
}

#[derive(Deserialize)]
pub struct UpdateClientRequest {
    pub image_link: Option<String>,
    #[serde(flatten)]
    pub update: OwnUpdate,
}

/// POST /api/update_client: the customer corrects their name or note.
pub async fn update_client(
    State(state): State<AppState>,
    Json(body): Json<UpdateClientRequest>,
) -> Result<Json<Value>> {
    let link = body.image_link.as_deref().unwrap_or_default();
    state.tickets.update_own(link, body.update).await?;
    Ok(Json(json!({"success": true, "message": "Đã cập nhật thông tin!"})))
}
