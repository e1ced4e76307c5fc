//! Event listings with date countdowns and the per-event registration form.

pub mod catalog;
pub mod registration;
pub mod router;
pub mod service;

pub use catalog::{event_listings, event_views, find_event, EventListing, EventStatus, EventView};
pub use registration::{registration_fields, validate_registration, EventRegistration};
pub use router::event_router;
pub use service::{EventService, RegistrationError};
