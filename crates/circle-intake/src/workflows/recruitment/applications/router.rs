use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use crate::workflows::forms::ValidationErrors;
use crate::workflows::forwarding::SubmissionSink;
use crate::workflows::recruitment::circles::{circle_profiles, find_circle};

use super::domain::{ApplicationOptions, ApplicationSubmission};
use super::service::{ApplicationServiceError, RecruitmentService};

/// Router builder exposing the application form and circle content endpoints.
pub fn application_router<S>(service: Arc<RecruitmentService<S>>) -> Router
where
    S: SubmissionSink + 'static,
{
    Router::new()
        .route("/api/v1/applications", post(submit_handler::<S>))
        .route("/api/v1/applications/validate", post(validate_handler::<S>))
        .route("/api/v1/applications/options", get(options_handler))
        .route("/api/v1/circles", get(circles_handler))
        .route("/api/v1/circles/:slug", get(circle_handler))
        .with_state(service)
}

pub(crate) fn invalid_response(errors: &ValidationErrors) -> Response {
    let payload = json!({
        "error": errors.to_string(),
        "errors": errors,
    });
    (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
}

pub(crate) async fn submit_handler<S>(
    State(service): State<Arc<RecruitmentService<S>>>,
    Json(submission): Json<ApplicationSubmission>,
) -> Response
where
    S: SubmissionSink + 'static,
{
    match service.submit(submission) {
        Ok(receipt) => (StatusCode::ACCEPTED, Json(receipt)).into_response(),
        Err(ApplicationServiceError::Invalid(errors)) => invalid_response(&errors),
        Err(ApplicationServiceError::Sink(error)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::BAD_GATEWAY, Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn validate_handler<S>(
    State(service): State<Arc<RecruitmentService<S>>>,
    Json(submission): Json<ApplicationSubmission>,
) -> Response
where
    S: SubmissionSink + 'static,
{
    match service.validate(&submission) {
        Ok(normalized) => {
            let payload = json!({
                "valid": true,
                "circles": normalized.circle_labels(),
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(errors) => invalid_response(&errors),
    }
}

pub(crate) async fn options_handler() -> Json<ApplicationOptions> {
    Json(ApplicationOptions::current())
}

pub(crate) async fn circles_handler() -> Response {
    (StatusCode::OK, Json(circle_profiles())).into_response()
}

pub(crate) async fn circle_handler(Path(slug): Path<String>) -> Response {
    match find_circle(&slug) {
        Some(profile) => (StatusCode::OK, Json(profile)).into_response(),
        None => {
            let payload = json!({ "error": format!("no circle named '{slug}'") });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}
