use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use crate::workflows::forms::FormValues;
use crate::workflows::forwarding::SubmissionSink;
use crate::workflows::recruitment::applications::router::invalid_response;

use super::service::{EventService, RegistrationError};

pub fn event_router<S>(service: Arc<EventService<S>>) -> Router
where
    S: SubmissionSink + 'static,
{
    Router::new()
        .route("/api/v1/events", get(list_handler::<S>))
        .route("/api/v1/events/:slug", get(event_handler::<S>))
        .route(
            "/api/v1/events/:slug/registrations",
            post(register_handler::<S>),
        )
        .with_state(service)
}

async fn list_handler<S>(State(service): State<Arc<EventService<S>>>) -> Response
where
    S: SubmissionSink + 'static,
{
    (StatusCode::OK, Json(service.list(service.today()))).into_response()
}

async fn event_handler<S>(
    State(service): State<Arc<EventService<S>>>,
    Path(slug): Path<String>,
) -> Response
where
    S: SubmissionSink + 'static,
{
    match service.get(&slug, service.today()) {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(err) => error_response(err),
    }
}

async fn register_handler<S>(
    State(service): State<Arc<EventService<S>>>,
    Path(slug): Path<String>,
    Json(values): Json<FormValues>,
) -> Response
where
    S: SubmissionSink + 'static,
{
    match service.register(&slug, &values) {
        Ok(receipt) => (StatusCode::ACCEPTED, Json(receipt)).into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: RegistrationError) -> Response {
    let status = match &err {
        RegistrationError::Invalid(errors) => return invalid_response(errors),
        RegistrationError::UnknownEvent(_) => StatusCode::NOT_FOUND,
        RegistrationError::Closed(_) => StatusCode::CONFLICT,
        RegistrationError::Sink(_) => StatusCode::BAD_GATEWAY,
        RegistrationError::Encoding(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(json!({ "error": err.to_string() }))).into_response()
}
