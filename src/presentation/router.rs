use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::middleware;
use axum::routing::{delete, get, post};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::FileLoader;
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::config::ServerSettings;
use crate::presentation::handlers::{
    chat_history_handler, create_chat_handler, current_user_handler, delete_chat_handler,
    delete_file_handler, health_handler, list_chats_handler, list_files_handler,
    register_handler, send_message_handler, upload_file_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<F>(state: AppState<F>, server: &ServerSettings) -> Router
where
    F: FileLoader + 'static,
{
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let body_limit = server.max_upload_mb.saturating_mul(1024 * 1024);

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/users", post(register_handler::<F>))
        .route("/api/user", get(current_user_handler::<F>))
        .route("/api/files/upload", post(upload_file_handler::<F>))
        .route("/api/files", get(list_files_handler::<F>))
        .route("/api/files/{id}", delete(delete_file_handler::<F>))
        .route(
            "/api/chats",
            post(create_chat_handler::<F>).get(list_chats_handler::<F>),
        )
        .route("/api/chats/{id}", delete(delete_chat_handler::<F>))
        .route("/api/chat", post(send_message_handler::<F>))
        .route(
            "/api/chat/{chat_id}/history",
            get(chat_history_handler::<F>),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors_layer(&server.cors_origins))
        .with_state(state)
}

/// Any origin when none (or `*`) is configured, otherwise exactly the listed ones.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        return base.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    base.allow_origin(AllowOrigin::list(allowed))
}
