use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::workflows::forms::{FieldKind, FieldSpec, Presence};
use crate::workflows::forwarding::{ForwardedSubmission, RecordingSink, SinkError, SubmissionSink};
use crate::workflows::recruitment::applications::catalog::field_catalog;
use crate::workflows::recruitment::applications::domain::{
    ApplicationSubmission, NonTechnicalCircle, TechnicalCircle, Track,
};
use crate::workflows::recruitment::applications::requirements::RequirementRule;
use crate::workflows::recruitment::applications::{ApplicationValidator, RecruitmentService};

pub(super) fn validator() -> ApplicationValidator {
    ApplicationValidator::new().expect("static tables are consistent")
}

/// Free text of exactly `min` characters, never ending on whitespace.
pub(super) fn answer(min: usize) -> String {
    "Practiced".chars().cycle().take(min.max(1)).collect()
}

fn motivational_fields() -> impl Iterator<Item = &'static FieldSpec> {
    field_catalog()
        .iter()
        .filter(|entry| entry.kind == FieldKind::LongText && entry.presence == Presence::Required)
}

/// Every base field filled with an acceptable value, no selectors.
pub(super) fn base_submission() -> ApplicationSubmission {
    let mut submission = ApplicationSubmission::new()
        .with_field("fullName", "Mariam Adel")
        .with_field("email", "mariam.adel@example.com")
        .with_field("phoneNumber", "01012345678")
        .with_field("university", "Cairo University")
        .with_field("faculty", "Computers and Artificial Intelligence")
        .with_field("academicYear", "Third Year")
        .with_field("facebookLink", "https://facebook.com/mariam.adel")
        .with_field("linkedInLink", "https://www.linkedin.com/in/mariam-adel")
        .with_field("gitHubLink", "https://github.com/mariam-adel")
        .with_field("hoursPerWeek", "12");

    for entry in motivational_fields() {
        let min = entry.bounds.map(|bounds| bounds.min).unwrap_or(1);
        submission = submission.with_field(entry.name, answer(min));
    }
    submission
}

/// Fills every field `fields` names with the shortest accepted answer.
pub(super) fn answer_circle(
    mut submission: ApplicationSubmission,
    fields: &[&'static str],
) -> ApplicationSubmission {
    for &field in fields {
        let value = match RequirementRule::for_field(field) {
            RequirementRule::MinLength(min) => answer(min),
            RequirementRule::Rating => "4".to_string(),
        };
        submission = submission.with_field(field, value);
    }
    submission
}

pub(super) fn technical_submission(circle: TechnicalCircle) -> ApplicationSubmission {
    let submission = base_submission()
        .with_track(Track::TechnicalOnly)
        .with_technical_circle(circle);
    answer_circle(submission, circle.required_fields())
}

pub(super) fn non_technical_submission(circle: NonTechnicalCircle) -> ApplicationSubmission {
    let submission = base_submission()
        .with_track(Track::NonTechnicalOnly)
        .with_non_technical_circle(circle);
    answer_circle(submission, circle.required_fields())
}

pub(super) fn both_submission(
    technical: TechnicalCircle,
    non_technical: NonTechnicalCircle,
) -> ApplicationSubmission {
    let submission = base_submission()
        .with_track(Track::Both)
        .with_technical_circle(technical)
        .with_non_technical_circle(non_technical);
    let submission = answer_circle(submission, technical.required_fields());
    answer_circle(submission, non_technical.required_fields())
}

pub(super) fn recording_service() -> (Arc<RecruitmentService<RecordingSink>>, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::new());
    let service = RecruitmentService::new(sink.clone()).expect("static tables are consistent");
    (Arc::new(service), sink)
}

/// Sink whose spreadsheet endpoint is down.
#[derive(Default)]
pub(super) struct FailingSink {
    attempts: Mutex<usize>,
}

impl FailingSink {
    pub(super) fn attempts(&self) -> usize {
        self.attempts.lock().map(|guard| *guard).unwrap_or_default()
    }
}

impl SubmissionSink for FailingSink {
    fn forward(&self, _submission: ForwardedSubmission) -> Result<(), SinkError> {
        if let Ok(mut guard) = self.attempts.lock() {
            *guard += 1;
        }
        Err(SinkError::Unavailable("sheet endpoint offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
