use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use crate::workflows::forms::ValidationErrors;
use crate::workflows::forwarding::{
    next_receipt_id, FormKind, ForwardedSubmission, SinkError, SubmissionReceipt, SubmissionSink,
};

use super::domain::{ApplicationSubmission, NormalizedSubmission};
use super::validator::{ApplicationValidator, CatalogError};

/// Service composing the validator with the outbound submission sink.
pub struct RecruitmentService<S> {
    validator: Arc<ApplicationValidator>,
    sink: Arc<S>,
}

impl<S> RecruitmentService<S>
where
    S: SubmissionSink + 'static,
{
    /// Fails when the static field tables are inconsistent.
    pub fn new(sink: Arc<S>) -> Result<Self, CatalogError> {
        let validator = ApplicationValidator::new()?;
        Ok(Self::with_validator(Arc::new(validator), sink))
    }

    pub fn with_validator(validator: Arc<ApplicationValidator>, sink: Arc<S>) -> Self {
        Self { validator, sink }
    }

    pub fn validator(&self) -> &ApplicationValidator {
        &self.validator
    }

    /// Validation only, for "validate as you type" clients.
    pub fn validate(
        &self,
        submission: &ApplicationSubmission,
    ) -> Result<NormalizedSubmission, ValidationErrors> {
        self.validator.validate(submission)
    }

    /// Validate, stamp a receipt, and hand the normalized form to the sink.
    pub fn submit(
        &self,
        submission: ApplicationSubmission,
    ) -> Result<SubmissionReceipt, ApplicationServiceError> {
        let normalized = self.validator.validate(&submission)?;
        let receipt_id = next_receipt_id(FormKind::Application);
        let received_at = Utc::now();
        let circles = normalized.circle_labels().join(" + ");

        let forwarded = ForwardedSubmission {
            receipt_id: receipt_id.clone(),
            form: FormKind::Application,
            received_at,
            payload: serde_json::to_value(&normalized)?,
        };

        if let Err(err) = self.sink.forward(forwarded) {
            warn!(receipt_id = %receipt_id.0, error = %err, "application could not be forwarded");
            return Err(err.into());
        }

        info!(receipt_id = %receipt_id.0, %circles, "application accepted");

        Ok(SubmissionReceipt {
            receipt_id,
            form: FormKind::Application,
            received_at,
            summary: format!(
                "application from {} received for {}",
                normalized.full_name(),
                circles
            ),
        })
    }
}

/// Error raised by the recruitment service.
#[derive(Debug, thiserror::Error)]
pub enum ApplicationServiceError {
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
    #[error(transparent)]
    Sink(#[from] SinkError),
    #[error("failed to encode submission: {0}")]
    Encoding(#[from] serde_json::Error),
}
