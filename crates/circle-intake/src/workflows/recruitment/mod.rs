//! Recruitment: the multi-track application form, circle content, and sheet audits.

pub mod applications;
pub mod circles;
pub mod sheet;

pub use circles::{circle_profiles, find_circle, CircleFamily, CircleProfile};
