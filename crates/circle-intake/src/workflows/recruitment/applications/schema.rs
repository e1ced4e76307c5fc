use crate::workflows::forms::{FieldError, FieldErrorKind};

use super::catalog::field_catalog;
use super::domain::{ApplicationSubmission, NonTechnicalCircle, Selectable, TechnicalCircle, Track};

/// Selector values that parsed to a known option.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Selectors {
    pub track: Option<Track>,
    pub technical: Option<TechnicalCircle>,
    pub non_technical: Option<NonTechnicalCircle>,
}

/// Unconditional shape checks over every catalogued field plus the three selectors.
///
/// Runs to completion; nothing short-circuits.
pub(crate) fn check_base_fields(
    submission: &ApplicationSubmission,
    errors: &mut Vec<FieldError>,
) -> Selectors {
    for entry in field_catalog() {
        entry.check(submission.value(entry.name), errors);
    }

    let track = match filled(submission.track.as_deref()) {
        None => {
            errors.push(FieldError::new(
                "track",
                FieldErrorKind::Required,
                "Track is required",
            ));
            None
        }
        Some(raw) => parse_selector::<Track>("track", "Track", raw, errors),
    };

    let technical = filled(submission.technical_circle.as_deref()).and_then(|raw| {
        parse_selector::<TechnicalCircle>("technicalCircle", "Technical circle", raw, errors)
    });

    let non_technical = filled(submission.non_technical_circle.as_deref()).and_then(|raw| {
        parse_selector::<NonTechnicalCircle>(
            "nonTechnicalCircle",
            "Non-technical circle",
            raw,
            errors,
        )
    });

    Selectors {
        track,
        technical,
        non_technical,
    }
}

pub(crate) fn filled(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.trim().is_empty())
}

fn parse_selector<T: Selectable>(
    field: &str,
    label: &str,
    raw: &str,
    errors: &mut Vec<FieldError>,
) -> Option<T> {
    let parsed = T::from_label(raw);
    if parsed.is_none() {
        errors.push(FieldError::new(
            field,
            FieldErrorKind::InvalidChoice,
            format!("{label} must be one of: {}", T::labels().join(", ")),
        ));
    }
    parsed
}
