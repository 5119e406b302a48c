pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod services;
pub mod state;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// All routes, without the tracing and CORS layers `main` adds.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/chat/sessions", post(handlers::chat::create_session))
        .route(
            "/api/chat/sessions/:id",
            get(handlers::chat::get_session).delete(handlers::chat::delete_session),
        )
        .route(
            "/api/chat/sessions/:id/messages",
            post(handlers::chat::send_message),
        )
        .route(
            "/api/chat/sessions/:id/suggestions",
            post(handlers::chat::click_suggestion),
        )
        .route(
            "/api/chat/sessions/:id/actions",
            post(handlers::chat::click_action),
        )
        .route(
            "/api/chat/sessions/:id/clear",
            post(handlers::chat::clear_conversation),
        )
        .route("/api/admin/rooms", get(handlers::admin::list_rooms))
        .route(
            "/api/admin/rooms/:id/availability",
            post(handlers::admin::set_room_availability),
        )
        .with_state(state)
}
