pub mod root;

use axum::{
    routing::{get, post},
    Router,
};

use crate::advisor::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root::root_handler))
        .route("/api/suggest-master", post(handlers::handle_suggest_master))
        .route(
            "/api/suggest-bachelor",
            post(handlers::handle_suggest_bachelor),
        )
        .with_state(state)
}
