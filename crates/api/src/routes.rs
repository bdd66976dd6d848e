use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

/// List management API. Mounted under `/api` by the server.
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/list", get(handlers::get_lists))
        .route("/paginated-list", get(handlers::get_paginated_list))
        .route("/add", post(handlers::add_domain))
        .route("/remove", post(handlers::remove_domain))
        .route("/download", get(handlers::download_list))
        .route("/upload", post(handlers::upload_list))
        .with_state(state)
}
