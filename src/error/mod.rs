//! Error handling
//!
//! Defines error types and handling for the signup form.

pub mod handlers;
pub mod types;

pub use types::*;
