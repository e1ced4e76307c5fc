//! Spreadsheet webhook delivery.
//!
//! [`WebhookSink`] posts each accepted form as a flat JSON row. Delivery runs on the current
//! tokio runtime and never holds up the HTTP response; failed attempts are retried with
//! backoff (1 s, 2 s, 4 s) and the final outcome is logged.

use std::time::Duration;

use serde_json::Value;
use tracing::{error, info, warn};

use super::{ForwardedSubmission, SinkError, SubmissionSink};

const RETRY_DELAYS: [Duration; 3] = [
    Duration::from_secs(1),
    Duration::from_secs(2),
    Duration::from_secs(4),
];

#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("webhook returned HTTP {0}")]
    HttpStatus(u16),
}

#[derive(Debug, Clone)]
pub struct WebhookSink {
    client: reqwest::Client,
    url: String,
    retry_delays: Vec<Duration>,
}

impl WebhookSink {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, WebhookError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
            retry_delays: RETRY_DELAYS.to_vec(),
        })
    }

    /// Replaces the default backoff schedule.
    pub fn with_retry_delays(mut self, delays: Vec<Duration>) -> Self {
        self.retry_delays = delays;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Posts one row, retrying on failure. Returns the last error once retries run out.
    pub async fn deliver(&self, row: &Value) -> Result<(), WebhookError> {
        for (attempt, delay) in self.retry_delays.iter().enumerate() {
            match self.try_send(row).await {
                Ok(()) => return Ok(()),
                Err(err) => {
                    warn!(
                        attempt = attempt + 1,
                        url = %self.url,
                        error = %err,
                        "webhook delivery attempt failed, retrying"
                    );
                    tokio::time::sleep(*delay).await;
                }
            }
        }

        self.try_send(row).await
    }

    async fn try_send(&self, row: &Value) -> Result<(), WebhookError> {
        let response = self.client.post(&self.url).json(row).send().await?;
        if !response.status().is_success() {
            return Err(WebhookError::HttpStatus(response.status().as_u16()));
        }
        Ok(())
    }
}

impl SubmissionSink for WebhookSink {
    fn forward(&self, submission: ForwardedSubmission) -> Result<(), SinkError> {
        let runtime = tokio::runtime::Handle::try_current().map_err(|_| {
            SinkError::Unavailable("no async runtime available for webhook delivery".to_string())
        })?;

        let sink = self.clone();
        runtime.spawn(async move {
            let receipt_id = submission.receipt_id.0.clone();
            match sink.deliver(&submission.sheet_row()).await {
                Ok(()) => info!(%receipt_id, form = submission.form.label(), "submission delivered"),
                Err(err) => error!(
                    %receipt_id,
                    url = %sink.url,
                    error = %err,
                    "webhook delivery failed after all retries"
                ),
            }
        });

        Ok(())
    }
}
