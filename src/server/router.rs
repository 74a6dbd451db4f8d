//! Router assembly
//!
//! Mounts, in order:
//! - GET /health, GET /healthz
//! - the CRUD routes of every registered resource
//! - custom routes supplied to the builder
//! - a JSON 404 fallback for everything else
//!
//! The whole router is wrapped in a `TraceLayer` so every request produces a
//! tracing span.

use crate::core::error::BizError;
use crate::server::entity_registry::EntityRegistry;
use crate::server::host::AppState;
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use tower_http::trace::TraceLayer;

/// Build the complete application router
pub fn build_router(state: AppState, custom_routes: Vec<Router>) -> Router {
    let registry = EntityRegistry::with_resources(state);
    tracing::debug!(resources = ?registry.entity_types(), "mounting resource routes");

    let app = custom_routes
        .into_iter()
        .fold(health_routes().merge(registry.build_routes()), Router::merge);

    app.fallback(not_found).layer(TraceLayer::new_for_http())
}

fn health_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "biztime"
    }))
}

async fn not_found() -> BizError {
    BizError::not_found("Not Found")
}
