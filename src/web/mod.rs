// Web server — Axum-based upload and check API.
//
// Clients upload one test document and one reference document, then call
// GET /check to compare whatever currently sits in the two slots. All
// routes serve JSON.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::DefaultBodyLimit;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::extract::traits::TextExtractor;
use crate::extract::DocumentExtractor;
use crate::storage::DocumentStore;

pub mod handlers;

/// Largest accepted request body. PDFs are routinely bigger than axum's
/// 2 MB default.
pub const MAX_UPLOAD_BYTES: usize = 32 * 1024 * 1024;

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<DocumentStore>,
    pub extractor: Arc<dyn TextExtractor>,
}

impl AppState {
    pub fn new(store: DocumentStore, extractor: Arc<dyn TextExtractor>) -> Self {
        Self {
            store: Arc::new(store),
            extractor,
        }
    }
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(store: DocumentStore, port: u16, bind: &str) -> Result<()> {
    let state = AppState::new(store, Arc::new(DocumentExtractor::default()));
    let app = build_router(state);

    let addr = format!("{bind}:{port}");
    info!("plagcheck API listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/upload/reference",
            post(handlers::upload::upload_reference),
        )
        .route("/upload/test", post(handlers::upload::upload_test))
        .route("/documents", get(handlers::documents::list_documents))
        .route("/check", get(handlers::check::check_similarity))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness probe — always returns 200 OK.
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({ "status": "ok" })),
    )
}

/// `{"message": ...}` response, used by the upload routes.
pub fn api_message(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "message": message }))).into_response()
}

/// `{"error": ..., "message": ...}` response, used by the check route.
pub fn api_error(status: StatusCode, error: &str, message: &str) -> Response {
    (
        status,
        axum::Json(serde_json::json!({ "error": error, "message": message })),
    )
        .into_response()
}
