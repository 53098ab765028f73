// GET /check — compare the stored test document against the reference.
//
// Both slot read locks are held until the comparison finishes, so an upload
// arriving mid-check waits instead of swapping a file out from under the
// extractor. Extraction runs on the blocking pool.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{error, info};

use crate::compare::check_documents;
use crate::error::CompareError;
use crate::models::DocumentRole;
use crate::web::{api_error, AppState};

pub async fn check_similarity(State(state): State<AppState>) -> Response {
    let test_slot = state.store.slot(DocumentRole::Test).read().await;
    let reference_slot = state.store.slot(DocumentRole::Reference).read().await;

    let (Some(test), Some(reference)) = (test_slot.as_ref(), reference_slot.as_ref()) else {
        return api_error(
            StatusCode::BAD_REQUEST,
            "Missing files",
            "Please upload both test and reference files",
        );
    };

    let extractor = state.extractor.clone();
    let test_path = test.path.clone();
    let reference_path = reference.path.clone();
    let outcome = tokio::task::spawn_blocking(move || {
        check_documents(extractor.as_ref(), &test_path, &reference_path)
    })
    .await;

    match outcome {
        Ok(Ok(analysis)) => {
            let comparison = analysis.comparison;
            info!(
                test_file = %test.filename,
                reference_file = %reference.filename,
                similarity = comparison.similarity,
                level = %comparison.level,
                "Similarity check completed"
            );
            Json(serde_json::json!({
                "similarity": comparison.similarity,
                "percentage": comparison.percentage(),
                "label": comparison.level,
                "test_file": test.filename,
                "reference_file": reference.filename,
            }))
            .into_response()
        }
        Ok(Err(e @ CompareError::Extraction { .. })) => {
            api_error(StatusCode::BAD_REQUEST, "Extraction failed", &e.to_string())
        }
        Ok(Err(e)) => {
            error!(error = %e, "Comparison failed");
            api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Processing error",
                &e.to_string(),
            )
        }
        Err(e) => {
            error!(error = %e, "Comparison task panicked");
            api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Processing error",
                "Comparison task failed",
            )
        }
    }
}
