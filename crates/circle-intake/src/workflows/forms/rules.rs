use std::sync::OnceLock;

use regex::Regex;
use validator::{ValidateEmail, ValidateUrl};

use super::errors::{FieldError, FieldErrorKind};

/// Accepted answers for every 1–5 self-assessment question.
pub const RATING_VALUES: [&str; 5] = ["1", "2", "3", "4", "5"];

/// Local mobile numbers: optional `+2` country code followed by an 11-digit `01x` number.
const PHONE_PATTERN: &str = r"^(\+2)?01[0125][0-9]{8}$";

fn phone_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(PHONE_PATTERN).expect("phone pattern compiles"))
}

/// Inclusive character bounds, counted on the trimmed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBounds {
    pub min: usize,
    pub max: usize,
}

impl LengthBounds {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    pub const fn at_most(max: usize) -> Self {
        Self { min: 0, max }
    }
}

/// Semantic type of a form field; decides which shape check applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    ShortText,
    LongText,
    Email,
    Phone,
    Url,
    NumericString,
    Rating,
    Choice(&'static [&'static str]),
}

/// Whether the field must be filled regardless of any selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    Optional,
    /// Requiredness is decided by the circle the applicant selects.
    Conditional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub presence: Presence,
    pub bounds: Option<LengthBounds>,
}

impl FieldSpec {
    pub const fn required(
        name: &'static str,
        label: &'static str,
        kind: FieldKind,
        bounds: Option<LengthBounds>,
    ) -> Self {
        Self {
            name,
            label,
            kind,
            presence: Presence::Required,
            bounds,
        }
    }

    pub const fn optional(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            presence: Presence::Optional,
            bounds: None,
        }
    }

    pub const fn conditional(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            presence: Presence::Conditional,
            bounds: None,
        }
    }

    pub const fn with_bounds(mut self, bounds: LengthBounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Shape checks for a single value; every violated constraint is appended.
    ///
    /// `Conditional` fields are skipped here, the caller owns their requiredness.
    pub fn check(&self, value: Option<&str>, errors: &mut Vec<FieldError>) {
        if self.presence == Presence::Conditional {
            return;
        }

        let Some(value) = value.filter(|value| !value.trim().is_empty()) else {
            if self.presence == Presence::Required {
                errors.push(FieldError::new(
                    self.name,
                    FieldErrorKind::Required,
                    format!("{} is required", self.label),
                ));
            }
            return;
        };

        if let Some(bounds) = self.bounds {
            if let Some(error) = check_length(self.name, self.label, value, bounds) {
                errors.push(error);
            }
        }

        let shape_ok = match self.kind {
            FieldKind::ShortText | FieldKind::LongText => true,
            FieldKind::Email => is_valid_email(value),
            FieldKind::Phone => is_valid_phone(value),
            FieldKind::Url => is_absolute_url(value),
            FieldKind::NumericString => is_numeric_string(value),
            FieldKind::Rating => is_rating(value),
            FieldKind::Choice(options) => options.contains(&value),
        };

        if !shape_ok {
            errors.push(self.shape_error());
        }
    }

    fn shape_error(&self) -> FieldError {
        let (kind, message) = match self.kind {
            FieldKind::Email => (
                FieldErrorKind::InvalidFormat,
                format!("{} must be a valid email address", self.label),
            ),
            FieldKind::Phone => (
                FieldErrorKind::InvalidFormat,
                format!("{} must be an 11-digit mobile number starting with 01", self.label),
            ),
            FieldKind::Url => (
                FieldErrorKind::InvalidFormat,
                format!("{} must be a full link including https://", self.label),
            ),
            FieldKind::NumericString => (
                FieldErrorKind::InvalidFormat,
                format!("{} must contain digits only", self.label),
            ),
            FieldKind::Rating => (
                FieldErrorKind::InvalidChoice,
                format!("{} must be a rating from 1 to 5", self.label),
            ),
            FieldKind::Choice(options) => (
                FieldErrorKind::InvalidChoice,
                format!("{} must be one of: {}", self.label, options.join(", ")),
            ),
            FieldKind::ShortText | FieldKind::LongText => (
                FieldErrorKind::InvalidFormat,
                format!("{} is not valid", self.label),
            ),
        };
        FieldError::new(self.name, kind, message)
    }
}

pub fn trimmed_len(value: &str) -> usize {
    value.trim().chars().count()
}

pub fn check_length(
    name: &str,
    label: &str,
    value: &str,
    bounds: LengthBounds,
) -> Option<FieldError> {
    let length = trimmed_len(value);
    if length < bounds.min {
        Some(FieldError::new(
            name,
            FieldErrorKind::TooShort,
            format!("{label} must be at least {} characters", bounds.min),
        ))
    } else if length > bounds.max {
        Some(FieldError::new(
            name,
            FieldErrorKind::TooLong,
            format!("{label} must be at most {} characters", bounds.max),
        ))
    } else {
        None
    }
}

pub fn is_valid_email(value: &str) -> bool {
    value.trim().validate_email()
}

pub fn is_valid_phone(value: &str) -> bool {
    phone_pattern().is_match(value.trim())
}

pub fn is_absolute_url(value: &str) -> bool {
    let value = value.trim();
    !value.contains(char::is_whitespace) && value.validate_url()
}

pub fn is_numeric_string(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

pub fn is_rating(value: &str) -> bool {
    RATING_VALUES.contains(&value)
}
