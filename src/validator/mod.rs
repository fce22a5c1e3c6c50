//! Validation system
//!
//! Format predicates, user-facing messages and the per-field pipeline
//! run on submission.

pub mod messages;
pub mod pipeline;
pub mod rules;

pub use messages::ErrorMessage;
pub use pipeline::validate;
pub use rules::{ValidationRules, is_valid_email, is_valid_password};
