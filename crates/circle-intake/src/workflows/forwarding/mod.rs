//! Hand-off of validated forms to the spreadsheet collaborator.

mod webhook;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

pub use webhook::{WebhookError, WebhookSink};

/// Receipt number handed back to the applicant, e.g. `apl-000042`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReceiptId(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormKind {
    Application,
    EventRegistration,
}

impl FormKind {
    pub const fn label(self) -> &'static str {
        match self {
            FormKind::Application => "application",
            FormKind::EventRegistration => "event_registration",
        }
    }

    const fn receipt_prefix(self) -> &'static str {
        match self {
            FormKind::Application => "apl",
            FormKind::EventRegistration => "reg",
        }
    }
}

static RECEIPT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

pub(crate) fn next_receipt_id(form: FormKind) -> ReceiptId {
    let id = RECEIPT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ReceiptId(format!("{}-{id:06}", form.receipt_prefix()))
}

/// A validated form on its way to the spreadsheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForwardedSubmission {
    pub receipt_id: ReceiptId,
    pub form: FormKind,
    pub received_at: DateTime<Utc>,
    pub payload: Value,
}

impl ForwardedSubmission {
    /// Flat JSON row for the sheet: the form fields plus receipt metadata columns.
    pub fn sheet_row(&self) -> Value {
        let mut row = match &self.payload {
            Value::Object(fields) => fields.clone(),
            other => {
                let mut fields = serde_json::Map::new();
                fields.insert("payload".to_string(), other.clone());
                fields
            }
        };
        row.insert(
            "receiptId".to_string(),
            Value::String(self.receipt_id.0.clone()),
        );
        row.insert(
            "form".to_string(),
            Value::String(self.form.label().to_string()),
        );
        row.insert(
            "submittedAt".to_string(),
            Value::String(self.received_at.to_rfc3339()),
        );
        Value::Object(row)
    }
}

/// What the applicant gets back once the form is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionReceipt {
    pub receipt_id: ReceiptId,
    pub form: FormKind,
    pub received_at: DateTime<Utc>,
    pub summary: String,
}

/// Outbound hook receiving every accepted form (spreadsheet webhook, log line, ...).
pub trait SubmissionSink: Send + Sync {
    fn forward(&self, submission: ForwardedSubmission) -> Result<(), SinkError>;
}

impl<S: SubmissionSink + ?Sized> SubmissionSink for Arc<S> {
    fn forward(&self, submission: ForwardedSubmission) -> Result<(), SinkError> {
        (**self).forward(submission)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("submission sink unavailable: {0}")]
    Unavailable(String),
    #[error("submission transport failed: {0}")]
    Transport(String),
}

/// Logs the receipt of each accepted form and drops the payload. Fallback when no webhook is
/// configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    fn forward(&self, submission: ForwardedSubmission) -> Result<(), SinkError> {
        info!(
            receipt_id = %submission.receipt_id.0,
            form = submission.form.label(),
            "submission accepted (no webhook configured)"
        );
        Ok(())
    }
}

/// Keeps accepted forms in memory for tests and the CLI demo.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    forwarded: Arc<Mutex<Vec<ForwardedSubmission>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn forwarded(&self) -> Vec<ForwardedSubmission> {
        self.forwarded
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl SubmissionSink for RecordingSink {
    fn forward(&self, submission: ForwardedSubmission) -> Result<(), SinkError> {
        let mut guard = self
            .forwarded
            .lock()
            .map_err(|_| SinkError::Unavailable("recording sink lock poisoned".to_string()))?;
        info!(
            receipt_id = %submission.receipt_id.0,
            form = submission.form.label(),
            "recorded submission"
        );
        guard.push(submission);
        Ok(())
    }
}
