pub mod config;
pub mod error;
pub mod form;
pub mod session;
pub mod storage;
pub mod validator;

pub use crate::config::SignupConfig;
pub use form::{Field, FieldError, FieldErrors, SignupForm, SubmitOutcome, UserInput};
