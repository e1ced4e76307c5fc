use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::workflows::forms::{FieldSpec, Presence, ValidationErrors};

use super::catalog::field_catalog;
use super::domain::{AcademicYear, ApplicationSubmission, NormalizedSubmission, Selectable};
use super::refinement::refine;
use super::requirements::{requirement_groups, RequirementGroup, MIN_LENGTH_OVERRIDES};
use super::schema::{check_base_fields, filled};

/// Defect in the static field tables. Never caused by applicant input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("circle '{circle}' requires field '{field}' which is not in the field catalog")]
    UnknownRequirementField { circle: &'static str, field: &'static str },
    #[error("circle '{circle}' requires field '{field}' which the catalog marks as a base field")]
    BaseFieldRequired { circle: &'static str, field: &'static str },
    #[error("field '{field}' is required by both '{first}' and '{second}'")]
    SharedField {
        field: &'static str,
        first: &'static str,
        second: &'static str,
    },
    #[error("field '{field}' in circle '{circle}' does not carry the '{prefix}' prefix")]
    MissingPrefix {
        circle: &'static str,
        field: &'static str,
        prefix: &'static str,
    },
    #[error("minimum-length override for '{field}' names no catalogued field")]
    UnknownOverrideField { field: &'static str },
}

/// Cross-checks the catalog, the requirement tables, and the override table.
pub fn audit_tables(
    catalog: &[FieldSpec],
    groups: &[RequirementGroup],
    overrides: &[(&'static str, usize)],
) -> Result<(), CatalogError> {
    let by_name: HashMap<&str, &FieldSpec> =
        catalog.iter().map(|entry| (entry.name, entry)).collect();
    let mut owners: HashMap<&'static str, &'static str> = HashMap::new();

    for group in groups {
        for &field in group.fields {
            let entry = by_name
                .get(field)
                .ok_or(CatalogError::UnknownRequirementField {
                    circle: group.circle,
                    field,
                })?;

            if entry.presence != Presence::Conditional {
                return Err(CatalogError::BaseFieldRequired {
                    circle: group.circle,
                    field,
                });
            }

            if !field.starts_with(group.prefix) {
                return Err(CatalogError::MissingPrefix {
                    circle: group.circle,
                    field,
                    prefix: group.prefix,
                });
            }

            if let Some(first) = owners.insert(field, group.circle) {
                return Err(CatalogError::SharedField {
                    field,
                    first,
                    second: group.circle,
                });
            }
        }
    }

    for &(field, _) in overrides {
        if !by_name.contains_key(field) {
            return Err(CatalogError::UnknownOverrideField { field });
        }
    }

    Ok(())
}

/// Conditional application validator: base schema first, then the per-circle refinement.
///
/// Pure and stateless; share one instance behind an `Arc`.
#[derive(Debug, Clone)]
pub struct ApplicationValidator {
    catalog: &'static [FieldSpec],
}

impl ApplicationValidator {
    /// Audits the static tables before handing out a validator.
    pub fn new() -> Result<Self, CatalogError> {
        audit_tables(field_catalog(), &requirement_groups(), MIN_LENGTH_OVERRIDES)?;
        Ok(Self {
            catalog: field_catalog(),
        })
    }

    pub fn validate(
        &self,
        submission: &ApplicationSubmission,
    ) -> Result<NormalizedSubmission, ValidationErrors> {
        let mut errors = Vec::new();
        let selectors = check_base_fields(submission, &mut errors);
        refine(submission, &selectors, &mut errors);

        // A missing or unknown track always records an error, so `errors` is non-empty here.
        let track = match selectors.track {
            Some(track) if errors.is_empty() => track,
            _ => {
                debug!(error_count = errors.len(), "application failed validation");
                return Err(ValidationErrors::from(errors));
            }
        };

        let fields: BTreeMap<&'static str, String> = self
            .catalog
            .iter()
            .filter_map(|entry| {
                filled(submission.value(entry.name))
                    .map(|value| (entry.name, value.trim().to_string()))
            })
            .collect();

        let academic_year = fields
            .get("academicYear")
            .and_then(|raw| AcademicYear::from_label(raw));

        Ok(NormalizedSubmission {
            track,
            technical_circle: selectors.technical,
            non_technical_circle: selectors.non_technical,
            academic_year,
            fields,
        })
    }
}
