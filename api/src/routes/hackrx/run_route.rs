//! POST /hackrx/run: answers questions about a document.

use std::sync::Arc;

use axum::{Json, body::Bytes, extract::State, http::HeaderMap};
use contextor::DocumentQuery;
use tracing::{info, instrument, warn};

use crate::{
    core::app_state::AppState,
    error_handler::{AppError, AppResult},
    routes::hackrx::{run_request::RunRequest, run_response::RunResponse},
};

/// Handler: POST /hackrx/run
///
/// Auth is checked before the body is looked at.
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:5000/hackrx/run \
///   -H "Authorization: Bearer $HACKRX_BEARER_TOKEN" \
///   -H 'content-type: application/json' \
///   -d '{"documents":"https://example.com/policy.pdf","questions":["What is the grace period?"]}'
/// ```
#[instrument(name = "hackrx_run", skip_all)]
pub async fn run<Q>(
    State(state): State<Arc<AppState<Q>>>,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<Json<RunResponse>>
where
    Q: DocumentQuery + 'static,
{
    if !state.auth.is_authorized(&headers) {
        warn!("rejected request: bad or missing authorization");
        return Err(AppError::Unauthorized);
    }

    let req = RunRequest::parse(&body).inspect_err(|err| {
        warn!(reason = %err, "rejected request: invalid payload");
    })?;

    info!(
        documents = %req.documents,
        questions = req.questions.len(),
        "running document query"
    );

    let answers = state
        .query
        .query_document(&req.documents, &req.questions)
        .await
        .map_err(|err| AppError::Internal(err.to_string()))?;

    Ok(Json(RunResponse { answers }))
}
