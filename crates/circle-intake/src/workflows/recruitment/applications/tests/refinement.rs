use super::common::*;
use crate::workflows::forms::FieldErrorKind;
use crate::workflows::recruitment::applications::domain::{
    ApplicationSubmission, NonTechnicalCircle, Selectable, TechnicalCircle, Track,
};
use crate::workflows::recruitment::applications::requirements::{
    min_length_override, requirement_groups, RequirementRule, MIN_LENGTH_OVERRIDES,
};

#[test]
fn technical_track_without_circle_is_a_missing_selector() {
    let submission = base_submission().with_track(Track::TechnicalOnly);

    let errors = validator().validate(&submission).expect_err("invalid");

    assert_eq!(errors.len(), 1);
    assert!(errors.contains("technicalCircle", FieldErrorKind::MissingSelector));
}

#[test]
fn missing_selector_is_reported_whatever_else_is_wrong() {
    let submission = base_submission()
        .with_track(Track::TechnicalOnly)
        .with_field("email", "")
        .with_field("hoursPerWeek", "many");

    let errors = validator().validate(&submission).expect_err("invalid");

    assert!(errors.contains("technicalCircle", FieldErrorKind::MissingSelector));
    assert!(errors.contains("email", FieldErrorKind::Required));
    assert!(errors.contains("hoursPerWeek", FieldErrorKind::InvalidFormat));
}

#[test]
fn both_track_needs_both_selectors() {
    let submission = base_submission().with_track(Track::Both);

    let errors = validator().validate(&submission).expect_err("invalid");

    let paths: Vec<_> = errors.iter().map(|error| error.field_path.as_str()).collect();
    assert_eq!(paths, vec!["technicalCircle", "nonTechnicalCircle"]);
    assert_eq!(errors.count("technicalCircle", FieldErrorKind::MissingSelector), 1);
}

#[test]
fn unknown_circle_is_not_also_a_missing_selector() {
    let mut submission = base_submission().with_track(Track::NonTechnicalOnly);
    submission.non_technical_circle = Some("Marketing".to_string());

    let errors = validator().validate(&submission).expect_err("invalid");

    assert_eq!(errors.len(), 1);
    assert!(errors.contains("nonTechnicalCircle", FieldErrorKind::InvalidChoice));
}

#[test]
fn frontend_with_no_answers_reports_five_required_fields() {
    let submission = base_submission()
        .with_track(Track::TechnicalOnly)
        .with_technical_circle(TechnicalCircle::Frontend)
        .with_field("frontendHtml", "");

    let errors = validator().validate(&submission).expect_err("invalid");

    let paths: Vec<_> = errors.iter().map(|error| error.field_path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "frontendHtml",
            "frontendHeadingTag",
            "frontendCssColor",
            "frontendJsVars",
            "frontendReactComponents",
        ]
    );
    assert!(errors
        .iter()
        .all(|error| error.kind == FieldErrorKind::Required));
    assert!(errors.as_slice()[0].message.contains("Frontend circle"));
}

#[test]
fn frontend_scenario_also_carries_base_errors() {
    let mut submission = base_submission()
        .with_track(Track::TechnicalOnly)
        .with_technical_circle(TechnicalCircle::Frontend);
    submission.fields.clear("fullName");
    submission.fields.clear("email");

    let errors = validator().validate(&submission).expect_err("invalid");

    assert_eq!(errors.len(), 7);
    assert_eq!(errors.as_slice()[0].field_path, "fullName");
    assert_eq!(errors.as_slice()[1].field_path, "email");
    assert_eq!(errors.as_slice()[2].field_path, "frontendHtml");
}

#[test]
fn cs_keyword_outside_the_rating_scale_is_an_invalid_choice() {
    let submission =
        technical_submission(TechnicalCircle::ComputerScience).with_field("csKeyword", "banana");

    let errors = validator().validate(&submission).expect_err("invalid");

    assert_eq!(errors.len(), 1);
    assert!(errors.contains("csKeyword", FieldErrorKind::InvalidChoice));
}

#[test]
fn hr_punctuality_of_six_is_an_invalid_choice() {
    let submission = non_technical_submission(NonTechnicalCircle::HumanResources)
        .with_field("hrPunctualityCommitment", "6");

    let errors = validator().validate(&submission).expect_err("invalid");

    assert_eq!(errors.len(), 1);
    assert!(errors.contains("hrPunctualityCommitment", FieldErrorKind::InvalidChoice));
}

#[test]
fn ratings_accept_exactly_one_through_five() {
    for value in ["1", "2", "3", "4", "5"] {
        let submission = non_technical_submission(NonTechnicalCircle::HumanResources)
            .with_field("hrTeamworkRating", value);
        assert!(validator().validate(&submission).is_ok(), "{value} rejected");
    }

    for value in ["0", "6", "4.5", " 3", "five"] {
        let submission = non_technical_submission(NonTechnicalCircle::HumanResources)
            .with_field("hrTeamworkRating", value);
        let errors = validator().validate(&submission).expect_err("invalid rating");
        assert!(
            errors.contains("hrTeamworkRating", FieldErrorKind::InvalidChoice),
            "{value} accepted"
        );
    }
}

#[test]
fn every_blank_circle_field_is_exactly_one_required_error() {
    for group in requirement_groups() {
        for &field in group.fields {
            let mut submission = circle_submission_for(field);
            submission.fields.clear(field);

            let errors = validator().validate(&submission).expect_err("blank answer");
            assert_eq!(errors.len(), 1, "{} / {field}: {errors:?}", group.circle);
            assert_eq!(errors.count(field, FieldErrorKind::Required), 1, "{field}");
        }
    }
}

#[test]
fn every_rating_field_accepts_only_one_through_five() {
    let ratings: Vec<&str> = requirement_groups()
        .iter()
        .flat_map(|group| group.fields.iter().copied())
        .filter(|field| matches!(RequirementRule::for_field(field), RequirementRule::Rating))
        .collect();
    assert!(!ratings.is_empty());

    for field in ratings {
        for value in ["1", "2", "3", "4", "5"] {
            let submission = circle_submission_for(field).with_field(field, value);
            assert!(validator().validate(&submission).is_ok(), "{field}={value} rejected");
        }
        for value in ["0", "6", "x"] {
            let submission = circle_submission_for(field).with_field(field, value);
            let errors = validator().validate(&submission).expect_err("invalid rating");
            assert_eq!(errors.len(), 1, "{field}={value}");
            assert!(errors.contains(field, FieldErrorKind::InvalidChoice), "{field}={value}");
        }
    }
}

#[test]
fn every_override_rejects_an_answer_one_character_short() {
    for &(field, min) in MIN_LENGTH_OVERRIDES {
        if min < 2 {
            continue;
        }
        let submission = circle_submission_for(field).with_field(field, answer(min - 1));
        let errors = validator().validate(&submission).expect_err("answer too short");
        assert_eq!(errors.len(), 1, "{field}");
        assert!(errors.contains(field, FieldErrorKind::TooShort), "{field}");
    }
}

#[test]
fn single_character_communication_way_is_enough() {
    assert_eq!(min_length_override("pmCommunicationWay"), Some(1));
    let submission = non_technical_submission(NonTechnicalCircle::ProjectManagement)
        .with_field("pmCommunicationWay", "E");
    assert!(validator().validate(&submission).is_ok());
}

#[test]
fn unselected_circle_fields_are_ignored() {
    let submission = technical_submission(TechnicalCircle::UiUx)
        .with_field("hrPunctualityCommitment", "9")
        .with_field("backendRestApi", "short");

    assert!(validator().validate(&submission).is_ok());
}

#[test]
fn selected_circle_is_checked_even_when_the_track_excludes_it() {
    let submission = technical_submission(TechnicalCircle::UiUx)
        .with_non_technical_circle(NonTechnicalCircle::ResearchDevelopment);

    let errors = validator().validate(&submission).expect_err("invalid");

    assert_eq!(errors.len(), NonTechnicalCircle::ResearchDevelopment.required_fields().len());
    assert!(errors.contains("rdResearchTopic", FieldErrorKind::Required));
}

#[test]
fn both_track_with_complete_answers_has_no_errors() {
    for technical in TechnicalCircle::ALL {
        for non_technical in NonTechnicalCircle::ALL {
            let submission = both_submission(*technical, *non_technical);
            let normalized = validator().validate(&submission).unwrap_or_else(|errors| {
                panic!(
                    "{} + {} rejected: {:?}",
                    technical.label(),
                    non_technical.label(),
                    errors
                )
            });
            assert_eq!(
                normalized.circle_labels(),
                vec![technical.label(), non_technical.label()]
            );
        }
    }
}

#[test]
fn technical_errors_precede_non_technical_errors() {
    let submission = base_submission()
        .with_track(Track::Both)
        .with_technical_circle(TechnicalCircle::Flutter)
        .with_non_technical_circle(NonTechnicalCircle::EventOrganizing);

    let errors = validator().validate(&submission).expect_err("invalid");

    let first_non_technical = errors
        .iter()
        .position(|error| error.field_path.starts_with("eo"))
        .expect("EO errors present");
    assert!(errors.as_slice()[..first_non_technical]
        .iter()
        .all(|error| error.field_path.starts_with("flutter")));
}

#[test]
fn validation_is_idempotent() {
    let validator = validator();
    let submission = base_submission()
        .with_track(Track::Both)
        .with_technical_circle(TechnicalCircle::DataScience)
        .with_field("dsPythonRating", "7");

    let first = validator.validate(&submission).expect_err("invalid");
    let second = validator.validate(&submission).expect_err("invalid");

    assert_eq!(first, second);
}

fn circle_submission_for(field: &str) -> ApplicationSubmission {
    if let Some(circle) = TechnicalCircle::ALL
        .iter()
        .find(|circle| circle.required_fields().contains(&field))
    {
        return technical_submission(*circle);
    }
    let circle = NonTechnicalCircle::ALL
        .iter()
        .find(|circle| circle.required_fields().contains(&field))
        .expect("field belongs to a circle");
    non_technical_submission(*circle)
}
