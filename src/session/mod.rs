//! Terminal session
//!
//! Line-oriented front end feeding field edits and submissions into a
//! `SignupForm`.

pub mod handler;
pub mod parser;
pub mod responses;

pub use handler::{handle_command, run_session};
pub use parser::{Command, CommandResult, parse_command};
