//! Terminal command parsing

use crate::form::Field;

/// Command enum to represent terminal input lines
#[derive(Debug, PartialEq)]
pub enum Command {
    Set(Field, String),
    Submit,
    Show,
    Errors,
    List,
    Reset,
    Clear,
    Help,
    Quit,
    Empty,
    Invalid(String),
    Unknown(String),
}

#[derive(Debug, PartialEq)]
pub enum CommandResult {
    Quit,
    Continue,
}

/// Parse a raw input line into a Command
pub fn parse_command(raw: &str) -> Command {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Command::Empty;
    }

    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let cmd = parts.next().unwrap_or("").to_ascii_lowercase();
    let arg = parts.next().unwrap_or("").trim();

    match cmd.as_str() {
        "set" => parse_set(arg),
        "submit" => Command::Submit,
        "show" => Command::Show,
        "errors" => Command::Errors,
        "list" => Command::List,
        "reset" => Command::Reset,
        "clear" => Command::Clear,
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    }
}

/// `set <field> [value]`; a missing value clears the field
fn parse_set(arg: &str) -> Command {
    let mut parts = arg.splitn(2, char::is_whitespace);
    let name = parts.next().unwrap_or("");
    let value = parts.next().unwrap_or("").trim();

    if name.is_empty() {
        return Command::Invalid("usage: set <field> [value]".into());
    }

    match name.parse::<Field>() {
        Ok(field) => Command::Set(field, value.to_string()),
        Err(e) => Command::Invalid(e.to_string()),
    }
}
