//! Artist dashboard state service
//!
//! Mode-scoped widget layouts, the mode controller with its onboarding hint,
//! the chat transcript and artist stats, served over HTTP.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
