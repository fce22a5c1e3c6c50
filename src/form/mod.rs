//! Signup form
//!
//! Input record, per-field messages and the controller that ties them to
//! validation and storage.

pub mod errors;
pub mod input;
pub mod results;
pub mod state;

pub use errors::{FieldError, FieldErrors};
pub use input::{Field, UserInput};
pub use results::SubmitOutcome;
pub use state::SignupForm;
