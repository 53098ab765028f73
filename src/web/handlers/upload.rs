// Upload handlers — POST /upload/reference and POST /upload/test.
//
// Expects a multipart form with a `file` field. The upload replaces
// whatever document the slot held before.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{error, warn};

use crate::models::DocumentRole;
use crate::storage::UploadError;
use crate::web::{api_message, AppState};

/// POST /upload/reference — store the reference document.
pub async fn upload_reference(State(state): State<AppState>, multipart: Multipart) -> Response {
    handle_upload(&state, DocumentRole::Reference, multipart).await
}

/// POST /upload/test — store the document being checked.
pub async fn upload_test(State(state): State<AppState>, multipart: Multipart) -> Response {
    handle_upload(&state, DocumentRole::Test, multipart).await
}

async fn handle_upload(state: &AppState, role: DocumentRole, mut multipart: Multipart) -> Response {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => return api_message(StatusCode::BAD_REQUEST, "No file part"),
            Err(e) => {
                warn!(error = %e, %role, "Malformed multipart upload");
                return api_message(StatusCode::BAD_REQUEST, "Malformed upload");
            }
        };

        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = match field.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(error = %e, %role, "Failed to read upload body");
                return api_message(StatusCode::BAD_REQUEST, "Malformed upload");
            }
        };

        return match state.store.upload(role, &filename, &bytes).await {
            Ok(doc) => (
                StatusCode::OK,
                Json(serde_json::json!({
                    "message": "File uploaded successfully",
                    "filename": doc.filename,
                })),
            )
                .into_response(),
            Err(UploadError::NoSelectedFile) => {
                api_message(StatusCode::BAD_REQUEST, "No selected file")
            }
            Err(UploadError::InvalidType(_)) => {
                api_message(StatusCode::BAD_REQUEST, "Invalid file type")
            }
            Err(UploadError::InvalidFilename(_)) => {
                api_message(StatusCode::BAD_REQUEST, "Invalid file name")
            }
            Err(e @ UploadError::Io(_)) => {
                error!(error = %e, %role, "Failed to store upload");
                api_message(StatusCode::INTERNAL_SERVER_ERROR, "Failed to store file")
            }
        };
    }
}
