//! Reply text for terminal commands

use std::fmt::Write;

use crate::form::{Field, FieldErrors, SubmitOutcome, UserInput};

pub const BANNER: &str = "회원가입\n회원가입을 위해 아래 정보를 입력해주세요.\n";

pub const HELP: &str = "\
commands:
  set <field> [value]   edit a field (id, name, email, password, passwordConfirm)
  submit                validate and store the form
  show                  print the current input
  errors                print the current field messages
  list                  print stored signups
  reset                 clear the form
  clear                 delete stored signups
  quit                  leave
";

pub fn format_outcome(outcome: &SubmitOutcome) -> String {
    match outcome {
        SubmitOutcome::Accepted { stored } => {
            format!("accepted: {} signup(s) stored\n", stored)
        }
        SubmitOutcome::Rejected(errors) => format!("rejected\n{}", format_errors(errors)),
    }
}

pub fn format_errors(errors: &FieldErrors) -> String {
    if errors.is_clear() {
        return "no errors\n".to_string();
    }

    let mut out = String::new();
    for (field, msg) in errors.iter() {
        let _ = writeln!(out, "  {}: {}", field, msg);
    }
    out
}

/// Secret fields are masked character for character.
pub fn format_input(input: &UserInput) -> String {
    let mut out = String::new();
    for field in Field::ALL {
        let value = input.get(field);
        let shown = if field.is_secret() {
            "*".repeat(value.chars().count())
        } else {
            value.to_string()
        };
        let _ = writeln!(out, "  {}: {}", field, shown);
    }
    out
}

pub fn format_users(users: &[UserInput]) -> String {
    if users.is_empty() {
        return "no stored signups\n".to_string();
    }

    let mut out = String::new();
    for (index, user) in users.iter().enumerate() {
        let _ = writeln!(out, "  {}. {} ({}) {}", index + 1, user.id, user.name, user.email);
    }
    out
}
