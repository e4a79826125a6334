//! Core domain entities representing the business data model.
//!
//! A [`Link`] is the sole persisted entity: a short code mapped to a target
//! URL together with its click telemetry. `NewLink` carries the validated
//! input for creation; the store fills in the counter and timestamps.

pub mod link;

pub use link::{Link, NewLink};
