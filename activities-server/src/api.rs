use std::collections::BTreeMap;
use std::sync::Arc;

use activities_core::models::Activity;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::ApiResult;
use crate::AppState;

#[derive(Deserialize)]
pub struct ParticipantQuery {
    pub email: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub async fn list_activities(
    State(state): State<Arc<AppState>>,
) -> Json<BTreeMap<String, Activity>> {
    Json(state.registry.snapshot())
}

pub async fn sign_up(
    State(state): State<Arc<AppState>>,
    Path(activity): Path<String>,
    Query(query): Query<ParticipantQuery>,
) -> ApiResult<Json<MessageResponse>> {
    state.registry.sign_up(&activity, &query.email)?;

    Ok(Json(MessageResponse {
        message: format!("Signed up {} for {}", query.email, activity),
    }))
}

pub async fn unregister(
    State(state): State<Arc<AppState>>,
    Path(activity): Path<String>,
    Query(query): Query<ParticipantQuery>,
) -> ApiResult<Json<MessageResponse>> {
    state.registry.unregister(&activity, &query.email)?;

    Ok(Json(MessageResponse {
        message: format!("Removed {} from {}", query.email, activity),
    }))
}

pub async fn health() -> &'static str {
    "OK"
}
