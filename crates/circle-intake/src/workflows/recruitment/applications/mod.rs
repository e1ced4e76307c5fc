//! Conditional, table-driven validation of the recruitment application form.
//!
//! A submission passes through two stages that both always run to completion:
//!
//! 1. the base schema ([`catalog`]) checks shape and bounds of every unconditional field;
//! 2. the refinement pass checks selector consistency and, for each circle actually
//!    selected, walks that circle's requirement list ([`requirements`]).
//!
//! Errors from both stages are merged into one ordered [`ValidationErrors`] list.
//!
//! [`ValidationErrors`]: crate::workflows::forms::ValidationErrors

pub mod catalog;
pub mod domain;
mod refinement;
pub mod requirements;
pub mod router;
mod schema;
pub mod service;
pub mod validator;

#[cfg(test)]
mod tests;

pub use domain::{
    AcademicYear, ApplicationOptions, ApplicationSubmission, NonTechnicalCircle,
    NormalizedSubmission, Selectable, TechnicalCircle, Track,
};
pub use requirements::{RequirementGroup, RequirementRule};
pub use router::application_router;
pub use service::{ApplicationServiceError, RecruitmentService};
pub use validator::{audit_tables, ApplicationValidator, CatalogError};
