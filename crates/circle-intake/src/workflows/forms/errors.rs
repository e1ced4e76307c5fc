use serde::{Deserialize, Serialize};

/// Category of a single field-level violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    Required,
    TooShort,
    TooLong,
    InvalidFormat,
    InvalidChoice,
    MissingSelector,
}

impl FieldErrorKind {
    pub const fn label(self) -> &'static str {
        match self {
            FieldErrorKind::Required => "required",
            FieldErrorKind::TooShort => "too_short",
            FieldErrorKind::TooLong => "too_long",
            FieldErrorKind::InvalidFormat => "invalid_format",
            FieldErrorKind::InvalidChoice => "invalid_choice",
            FieldErrorKind::MissingSelector => "missing_selector",
        }
    }
}

/// One violation, scoped to the form field the client should highlight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field_path: String,
    pub kind: FieldErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn new(
        field_path: impl Into<String>,
        kind: FieldErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field_path: field_path.into(),
            kind,
            message: message.into(),
        }
    }
}

/// Ordered collection of every violation found in a single validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(transparent)]
#[error("submission rejected with {} field error(s)", .errors.len())]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    pub fn as_slice(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn into_vec(self) -> Vec<FieldError> {
        self.errors
    }

    pub fn for_field<'a>(&'a self, field_path: &'a str) -> impl Iterator<Item = &'a FieldError> {
        self.errors
            .iter()
            .filter(move |error| error.field_path == field_path)
    }

    /// Number of errors of `kind` reported against `field_path`.
    pub fn count(&self, field_path: &str, kind: FieldErrorKind) -> usize {
        self.for_field(field_path)
            .filter(|error| error.kind == kind)
            .count()
    }

    pub fn contains(&self, field_path: &str, kind: FieldErrorKind) -> bool {
        self.count(field_path, kind) > 0
    }
}

impl From<Vec<FieldError>> for ValidationErrors {
    fn from(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
