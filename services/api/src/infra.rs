use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use circle_intake::workflows::forwarding::{
    ForwardedSubmission, LogSink, SinkError, SubmissionSink, WebhookError, WebhookSink,
};
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Sink picked at startup: the spreadsheet webhook when a URL is configured, otherwise a
/// log line per accepted form.
pub(crate) enum ConfiguredSink {
    Webhook(WebhookSink),
    Logged(LogSink),
}

impl ConfiguredSink {
    pub(crate) fn from_url(url: Option<&str>, timeout: Duration) -> Result<Self, WebhookError> {
        match url {
            Some(url) => Ok(Self::Webhook(WebhookSink::new(url, timeout)?)),
            None => Ok(Self::Logged(LogSink)),
        }
    }

    pub(crate) fn describe(&self) -> &str {
        match self {
            ConfiguredSink::Webhook(sink) => sink.url(),
            ConfiguredSink::Logged(_) => "log only",
        }
    }
}

impl SubmissionSink for ConfiguredSink {
    fn forward(&self, submission: ForwardedSubmission) -> Result<(), SinkError> {
        match self {
            ConfiguredSink::Webhook(sink) => sink.forward(submission),
            ConfiguredSink::Logged(sink) => sink.forward(submission),
        }
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
