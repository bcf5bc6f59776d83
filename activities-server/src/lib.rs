pub mod api;
pub mod errors;

use std::sync::Arc;

use activities_core::registry::ActivityRegistry;
use axum::{
    response::Redirect,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<ActivityRegistry>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            registry: Arc::new(ActivityRegistry::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// The API router. The binary mounts the static frontend on top of this;
/// tests drive it as-is.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/static/index.html") }))
        .route("/activities", get(api::list_activities))
        .route("/activities/:activity/signup", post(api::sign_up))
        .route("/activities/:activity/unregister", post(api::unregister))
        .route("/health", get(api::health))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
