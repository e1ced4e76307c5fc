use std::sync::Arc;

use chrono::{Local, NaiveDate, Utc};
use tracing::{info, warn};

use crate::workflows::forms::{FormValues, ValidationErrors};
use crate::workflows::forwarding::{
    next_receipt_id, FormKind, ForwardedSubmission, SinkError, SubmissionReceipt, SubmissionSink,
};

use super::catalog::{event_views, find_event, EventView};
use super::registration::validate_registration;

/// Event content plus registration intake.
pub struct EventService<S> {
    sink: Arc<S>,
    pinned_today: Option<NaiveDate>,
}

impl<S> EventService<S>
where
    S: SubmissionSink + 'static,
{
    pub fn new(sink: Arc<S>) -> Self {
        Self {
            sink,
            pinned_today: None,
        }
    }

    /// Resolves countdowns and registration windows against `today` instead of the clock.
    pub fn pinned_to(mut self, today: NaiveDate) -> Self {
        self.pinned_today = Some(today);
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.pinned_today.unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn list(&self, today: NaiveDate) -> Vec<EventView> {
        event_views(today)
    }

    pub fn get(&self, slug: &str, today: NaiveDate) -> Result<EventView, RegistrationError> {
        find_event(slug)
            .and_then(|event| event.view(today))
            .ok_or_else(|| RegistrationError::UnknownEvent(slug.to_string()))
    }

    pub fn register(
        &self,
        slug: &str,
        values: &FormValues,
    ) -> Result<SubmissionReceipt, RegistrationError> {
        self.register_on(slug, values, self.today())
    }

    /// Same as [`EventService::register`], resolved against an explicit date.
    pub fn register_on(
        &self,
        slug: &str,
        values: &FormValues,
        today: NaiveDate,
    ) -> Result<SubmissionReceipt, RegistrationError> {
        let event =
            find_event(slug).ok_or_else(|| RegistrationError::UnknownEvent(slug.to_string()))?;
        if !event.accepts_registrations(today) {
            return Err(RegistrationError::Closed(event.slug.to_string()));
        }

        let registration = validate_registration(event.slug, values)?;
        let receipt_id = next_receipt_id(FormKind::EventRegistration);
        let received_at = Utc::now();

        let forwarded = ForwardedSubmission {
            receipt_id: receipt_id.clone(),
            form: FormKind::EventRegistration,
            received_at,
            payload: serde_json::to_value(&registration)?,
        };

        if let Err(err) = self.sink.forward(forwarded) {
            warn!(receipt_id = %receipt_id.0, error = %err, "registration could not be forwarded");
            return Err(err.into());
        }

        info!(receipt_id = %receipt_id.0, event = event.slug, "registration accepted");

        Ok(SubmissionReceipt {
            receipt_id,
            form: FormKind::EventRegistration,
            received_at,
            summary: format!("{} registered for {}", registration.full_name, event.title),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    #[error("no event named '{0}'")]
    UnknownEvent(String),
    #[error("registration for '{0}' is closed")]
    Closed(String),
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
    #[error(transparent)]
    Sink(#[from] SinkError),
    #[error("failed to encode registration: {0}")]
    Encoding(#[from] serde_json::Error),
}
