use std::collections::HashSet;

use crate::workflows::forms::{FieldKind, Presence};
use crate::workflows::recruitment::applications::catalog::{field_catalog, lookup};
use crate::workflows::recruitment::applications::requirements::{
    requirement_groups, RequirementGroup, RequirementRule, MIN_LENGTH_OVERRIDES,
};
use crate::workflows::recruitment::applications::{audit_tables, CatalogError};

#[test]
fn shipped_tables_pass_the_audit() {
    assert_eq!(
        audit_tables(field_catalog(), &requirement_groups(), MIN_LENGTH_OVERRIDES),
        Ok(())
    );
}

#[test]
fn every_conditional_field_belongs_to_exactly_one_circle() {
    let required: Vec<&str> = requirement_groups()
        .iter()
        .flat_map(|group| group.fields.iter().copied())
        .collect();
    let unique: HashSet<&str> = required.iter().copied().collect();
    assert_eq!(unique.len(), required.len());

    for entry in field_catalog() {
        if entry.presence == Presence::Conditional {
            assert!(unique.contains(entry.name), "{} is never required", entry.name);
        }
    }
}

#[test]
fn overrides_only_cover_free_text_circle_fields() {
    let groups = requirement_groups();
    for &(field, min) in MIN_LENGTH_OVERRIDES {
        assert!(min >= 1, "{field} has a zero minimum");
        assert!(
            groups.iter().any(|group| group.fields.contains(&field)),
            "{field} is overridden but no circle requires it"
        );
        let entry = lookup(field).expect("override field is catalogued");
        assert_ne!(entry.kind, FieldKind::Rating, "{field} is a rating");
    }
}

#[test]
fn fields_without_an_override_are_ratings() {
    for group in requirement_groups() {
        for &field in group.fields {
            let entry = lookup(field).expect("catalogued");
            match RequirementRule::for_field(field) {
                RequirementRule::Rating => assert_eq!(entry.kind, FieldKind::Rating, "{field}"),
                RequirementRule::MinLength(_) => assert_ne!(entry.kind, FieldKind::Rating),
            }
        }
    }
}

#[test]
fn requirement_groups_cover_all_fifteen_circles() {
    let groups = requirement_groups();
    assert_eq!(groups.len(), 15);
    assert!(groups.iter().all(|group| !group.fields.is_empty()));
    assert_eq!(groups[0].circle, "UIUX");
    assert_eq!(groups[7].circle, "HR - Human Resources");
}

static STRAY_FIELDS: &[&str] = &["hrTeamworkRating", "hrUnlistedAnswer"];
static BASE_FIELDS: &[&str] = &["hrTeamworkRating", "fullName"];
static UNPREFIXED_FIELDS: &[&str] = &["prNegotiationRating"];
static SHARED_FIELDS: &[&str] = &["hrTeamworkRating"];

fn group(circle: &'static str, prefix: &'static str, fields: &'static [&'static str]) -> RequirementGroup {
    RequirementGroup {
        circle,
        prefix,
        fields,
    }
}

#[test]
fn audit_rejects_uncatalogued_requirement() {
    let groups = [group("HR - Human Resources", "hr", STRAY_FIELDS)];
    assert_eq!(
        audit_tables(field_catalog(), &groups, &[]),
        Err(CatalogError::UnknownRequirementField {
            circle: "HR - Human Resources",
            field: "hrUnlistedAnswer",
        })
    );
}

#[test]
fn audit_rejects_base_field_in_a_circle() {
    let groups = [group("HR - Human Resources", "hr", BASE_FIELDS)];
    assert!(matches!(
        audit_tables(field_catalog(), &groups, &[]),
        Err(CatalogError::BaseFieldRequired { field: "fullName", .. })
    ));
}

#[test]
fn audit_rejects_field_outside_the_circle_namespace() {
    let groups = [group("HR - Human Resources", "hr", UNPREFIXED_FIELDS)];
    assert!(matches!(
        audit_tables(field_catalog(), &groups, &[]),
        Err(CatalogError::MissingPrefix { prefix: "hr", .. })
    ));
}

#[test]
fn audit_rejects_field_shared_between_circles() {
    let groups = [
        group("HR - Human Resources", "hr", SHARED_FIELDS),
        group("Shadow HR", "hr", SHARED_FIELDS),
    ];
    assert_eq!(
        audit_tables(field_catalog(), &groups, &[]),
        Err(CatalogError::SharedField {
            field: "hrTeamworkRating",
            first: "HR - Human Resources",
            second: "Shadow HR",
        })
    );
}

#[test]
fn audit_rejects_override_for_unknown_field() {
    let overrides = [("frontendVue", 30)];
    assert_eq!(
        audit_tables(field_catalog(), &requirement_groups(), &overrides),
        Err(CatalogError::UnknownOverrideField {
            field: "frontendVue"
        })
    );
}
