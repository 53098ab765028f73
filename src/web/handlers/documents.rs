// GET /documents — what's currently in the test and reference slots.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::web::AppState;

pub async fn list_documents(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store.snapshot().await)
}
