//! Building blocks shared by the recruitment application and event registration forms.
//!
//! Both forms arrive as flat string-keyed records, are checked field by field against a
//! static [`FieldSpec`] table, and report every violation at once through
//! [`ValidationErrors`] so a client can highlight all offending inputs in one round trip.

pub mod errors;
pub mod rules;
mod values;

pub use errors::{FieldError, FieldErrorKind, ValidationErrors};
pub use rules::{FieldKind, FieldSpec, LengthBounds, Presence};
pub use values::FormValues;
