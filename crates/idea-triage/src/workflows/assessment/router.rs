use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::StepForm;
use super::repository::{SessionId, SessionStore};
use super::service::{AssessmentService, AssessmentServiceError};

/// Router builder exposing the presentation contract over HTTP.
pub fn assessment_router<S>(service: Arc<AssessmentService<S>>) -> Router
where
    S: SessionStore + 'static,
{
    Router::new()
        .route(
            "/api/v1/assessments/:session_id",
            get(current_handler::<S>),
        )
        .route(
            "/api/v1/assessments/:session_id/advance",
            post(advance_handler::<S>),
        )
        .route(
            "/api/v1/assessments/:session_id/restart",
            post(restart_handler::<S>),
        )
        .with_state(service)
}

pub(crate) async fn current_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: SessionStore + 'static,
{
    let session = SessionId(session_id);
    match service.current(&session) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => internal_error(error),
    }
}

pub(crate) async fn advance_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
    Path(session_id): Path<String>,
    axum::Json(form): axum::Json<StepForm>,
) -> Response
where
    S: SessionStore + 'static,
{
    let session = SessionId(session_id);
    match service.advance(&session, form) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(AssessmentServiceError::Validation(warning)) => {
            let payload = json!({
                "warning": warning.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn restart_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: SessionStore + 'static,
{
    let session = SessionId(session_id);
    match service.restart(&session) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => internal_error(error),
    }
}

fn internal_error(error: AssessmentServiceError) -> Response {
    let payload = json!({
        "error": error.to_string(),
    });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
