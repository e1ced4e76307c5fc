use crate::workflows::forms::rules::{is_rating, trimmed_len};
use crate::workflows::forms::{FieldError, FieldErrorKind};

use super::catalog::label_for;
use super::domain::{ApplicationSubmission, Selectable};
use super::requirements::RequirementRule;
use super::schema::{filled, Selectors};

/// Cross-field pass: selector consistency, then the requirement list of every selected circle.
pub(crate) fn refine(
    submission: &ApplicationSubmission,
    selectors: &Selectors,
    errors: &mut Vec<FieldError>,
) {
    check_selector_consistency(submission, selectors, errors);

    // Each selected circle is checked on its own, whatever the track says.
    if let Some(circle) = selectors.technical {
        check_circle_fields(submission, circle.label(), circle.required_fields(), errors);
    }
    if let Some(circle) = selectors.non_technical {
        check_circle_fields(submission, circle.label(), circle.required_fields(), errors);
    }
}

fn check_selector_consistency(
    submission: &ApplicationSubmission,
    selectors: &Selectors,
    errors: &mut Vec<FieldError>,
) {
    let Some(track) = selectors.track else {
        return;
    };

    // A selector that was filled with an unknown option already carries an InvalidChoice.
    if track.needs_technical() && filled(submission.technical_circle.as_deref()).is_none() {
        errors.push(FieldError::new(
            "technicalCircle",
            FieldErrorKind::MissingSelector,
            format!("Choose a technical circle for the '{}' track", track.label()),
        ));
    }

    if track.needs_non_technical() && filled(submission.non_technical_circle.as_deref()).is_none()
    {
        errors.push(FieldError::new(
            "nonTechnicalCircle",
            FieldErrorKind::MissingSelector,
            format!(
                "Choose a non-technical circle for the '{}' track",
                track.label()
            ),
        ));
    }
}

fn check_circle_fields(
    submission: &ApplicationSubmission,
    circle: &str,
    fields: &[&'static str],
    errors: &mut Vec<FieldError>,
) {
    for &field in fields {
        if let Some(error) = check_required_field(submission.value(field), field, circle) {
            errors.push(error);
        }
    }
}

fn check_required_field(value: Option<&str>, field: &str, circle: &str) -> Option<FieldError> {
    let label = label_for(field);

    let Some(value) = filled(value) else {
        return Some(FieldError::new(
            field,
            FieldErrorKind::Required,
            format!("{label} is required for the {circle} circle"),
        ));
    };

    match RequirementRule::for_field(field) {
        RequirementRule::MinLength(min) if trimmed_len(value) < min => Some(FieldError::new(
            field,
            FieldErrorKind::TooShort,
            format!("{label} must be at least {min} characters"),
        )),
        RequirementRule::MinLength(_) => None,
        RequirementRule::Rating if is_rating(value) => None,
        RequirementRule::Rating => Some(FieldError::new(
            field,
            FieldErrorKind::InvalidChoice,
            format!("{label} must be a rating from 1 to 5"),
        )),
    }
}
