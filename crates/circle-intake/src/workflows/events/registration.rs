use serde::Serialize;

use crate::workflows::forms::{FieldKind, FieldSpec, FormValues, LengthBounds, ValidationErrors};
use crate::workflows::recruitment::applications::domain::{
    AcademicYear, Selectable, ACADEMIC_YEAR_LABELS,
};

static REGISTRATION_FIELDS: &[FieldSpec] = &[
    FieldSpec::required(
        "fullName",
        "Full name",
        FieldKind::ShortText,
        Some(LengthBounds::new(3, 120)),
    ),
    FieldSpec::required(
        "email",
        "Email",
        FieldKind::Email,
        Some(LengthBounds::at_most(160)),
    ),
    FieldSpec::required("phoneNumber", "Phone number", FieldKind::Phone, None),
    FieldSpec::required(
        "university",
        "University",
        FieldKind::ShortText,
        Some(LengthBounds::new(2, 120)),
    ),
    FieldSpec::required(
        "faculty",
        "Faculty",
        FieldKind::ShortText,
        Some(LengthBounds::new(2, 120)),
    ),
    FieldSpec::required(
        "academicYear",
        "Academic year",
        FieldKind::Choice(&ACADEMIC_YEAR_LABELS),
        None,
    ),
    FieldSpec::optional("expectations", "What you hope to get out of it", FieldKind::LongText)
        .with_bounds(LengthBounds::at_most(400)),
];

pub fn registration_fields() -> &'static [FieldSpec] {
    REGISTRATION_FIELDS
}

/// A registration that passed every field rule, bound to its event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRegistration {
    pub event_slug: String,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub university: String,
    pub faculty: String,
    pub academic_year: AcademicYear,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expectations: Option<String>,
}

/// Field checks only; whether the event accepts registrations is the service's call.
pub fn validate_registration(
    event_slug: &str,
    values: &FormValues,
) -> Result<EventRegistration, ValidationErrors> {
    let mut errors = Vec::new();
    for field in REGISTRATION_FIELDS {
        field.check(values.get(field.name), &mut errors);
    }

    let academic_year = values.filled("academicYear").and_then(AcademicYear::from_label);
    let (true, Some(academic_year)) = (errors.is_empty(), academic_year) else {
        return Err(ValidationErrors::from(errors));
    };

    let text = |name: &str| values.filled(name).unwrap_or_default().trim().to_string();

    Ok(EventRegistration {
        event_slug: event_slug.to_string(),
        full_name: text("fullName"),
        email: text("email"),
        phone_number: text("phoneNumber"),
        university: text("university"),
        faculty: text("faculty"),
        academic_year,
        expectations: values
            .filled("expectations")
            .map(|value| value.trim().to_string()),
    })
}
