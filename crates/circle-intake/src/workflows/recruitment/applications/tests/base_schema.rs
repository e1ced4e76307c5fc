use super::common::*;
use crate::workflows::forms::FieldErrorKind;
use crate::workflows::recruitment::applications::domain::{
    AcademicYear, ApplicationSubmission, TechnicalCircle, Track,
};

#[test]
fn complete_technical_application_is_accepted() {
    let normalized = validator()
        .validate(&technical_submission(TechnicalCircle::Backend))
        .expect("submission is valid");

    assert_eq!(normalized.track, Track::TechnicalOnly);
    assert_eq!(normalized.technical_circle, Some(TechnicalCircle::Backend));
    assert_eq!(normalized.non_technical_circle, None);
    assert_eq!(normalized.academic_year, Some(AcademicYear::Third));
    assert_eq!(normalized.full_name(), "Mariam Adel");
    assert_eq!(normalized.value("backendSqlRating"), Some("4"));
}

#[test]
fn empty_submission_reports_every_required_base_field_in_catalog_order() {
    let errors = validator()
        .validate(&ApplicationSubmission::new())
        .expect_err("empty submission is rejected");

    // Nine identity and link fields, thirteen motivational answers, and the track.
    assert_eq!(errors.len(), 23);
    assert!(errors
        .iter()
        .all(|error| error.kind == FieldErrorKind::Required));

    let paths: Vec<_> = errors.iter().map(|error| error.field_path.as_str()).collect();
    assert_eq!(paths.first(), Some(&"fullName"));
    assert_eq!(paths.last(), Some(&"track"));
    assert!(!paths.contains(&"academicYear"));
    assert!(!paths.contains(&"technicalCircle"));
}

#[test]
fn shape_violations_are_reported_per_field() {
    let submission = technical_submission(TechnicalCircle::Frontend)
        .with_field("email", "mariam@")
        .with_field("phoneNumber", "0101234567")
        .with_field("facebookLink", "facebook.com/mariam")
        .with_field("hoursPerWeek", "12.5")
        .with_field("academicYear", "Fifth Year");

    let errors = validator().validate(&submission).expect_err("invalid");

    assert_eq!(errors.len(), 5);
    assert!(errors.contains("email", FieldErrorKind::InvalidFormat));
    assert!(errors.contains("phoneNumber", FieldErrorKind::InvalidFormat));
    assert!(errors.contains("facebookLink", FieldErrorKind::InvalidFormat));
    assert!(errors.contains("hoursPerWeek", FieldErrorKind::InvalidFormat));
    assert!(errors.contains("academicYear", FieldErrorKind::InvalidChoice));
}

#[test]
fn lengths_are_measured_on_trimmed_text() {
    let submission = technical_submission(TechnicalCircle::Frontend)
        .with_field("fullName", "  Mo  ")
        .with_field("strengths", "x".repeat(401))
        .with_field("faculty", "   ");

    let errors = validator().validate(&submission).expect_err("invalid");

    assert_eq!(errors.len(), 3);
    assert!(errors.contains("fullName", FieldErrorKind::TooShort));
    assert!(errors.contains("strengths", FieldErrorKind::TooLong));
    assert!(errors.contains("faculty", FieldErrorKind::Required));
}

#[test]
fn phone_accepts_the_country_prefix() {
    let submission =
        technical_submission(TechnicalCircle::Frontend).with_field("phoneNumber", "+201512345678");
    assert!(validator().validate(&submission).is_ok());

    let submission =
        technical_submission(TechnicalCircle::Frontend).with_field("phoneNumber", "01312345678");
    let errors = validator().validate(&submission).expect_err("013 is not a mobile prefix");
    assert!(errors.contains("phoneNumber", FieldErrorKind::InvalidFormat));
}

#[test]
fn unknown_selector_values_are_invalid_choices() {
    let mut submission = base_submission();
    submission.track = Some("Everything".to_string());
    submission.technical_circle = Some("Blockchain".to_string());

    let errors = validator().validate(&submission).expect_err("invalid");

    assert_eq!(errors.len(), 2);
    assert!(errors.contains("track", FieldErrorKind::InvalidChoice));
    assert!(errors.contains("technicalCircle", FieldErrorKind::InvalidChoice));
}

#[test]
fn academic_year_may_be_left_out() {
    let mut submission = technical_submission(TechnicalCircle::Flutter);
    submission.fields.clear("academicYear");

    let normalized = validator().validate(&submission).expect("still valid");
    assert_eq!(normalized.academic_year, None);
}

#[test]
fn normalized_submission_serializes_trimmed_values_once() {
    let submission = technical_submission(TechnicalCircle::Backend)
        .with_field("phoneNumber", " 01012345678 ")
        .with_field("university", "  Cairo University ");

    let normalized = validator().validate(&submission).expect("submission is valid");
    assert_eq!(normalized.value("phoneNumber"), Some("01012345678"));
    assert_eq!(normalized.value("university"), Some("Cairo University"));

    let json = serde_json::to_string(&normalized).expect("serializes");
    assert_eq!(json.matches("\"academicYear\"").count(), 1);

    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["academicYear"], "Third Year");
    assert_eq!(value["phoneNumber"], "01012345678");
    assert_eq!(value["track"], "Technical Only");
}
