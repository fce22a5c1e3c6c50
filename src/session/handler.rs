use log::{debug, info, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use super::parser::{Command, CommandResult, parse_command};
use super::responses::{BANNER, HELP, format_errors, format_input, format_outcome, format_users};
use crate::error::SessionError;
use crate::form::SignupForm;
use crate::storage::UserRepository;

const MAX_LINE_LENGTH: usize = 512;

/// Drives a signup form from line-oriented input.
///
/// - Reads one command per line until EOF or `quit`.
/// - Storage faults and non-UTF-8 lines are reported on the writer and the
///   session continues.
/// - Only terminal I/O failures end the session with an error.
pub async fn run_session<I, O, R>(
    mut reader: I,
    writer: &mut O,
    form: &mut SignupForm<R>,
) -> Result<(), SessionError>
where
    I: AsyncBufRead + Unpin,
    O: AsyncWrite + Unpin,
    R: UserRepository,
{
    writer.write_all(BANNER.as_bytes()).await?;
    writer.flush().await?;

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            info!("Input closed, ending session");
            break;
        }

        if buf.len() > MAX_LINE_LENGTH {
            writer.write_all(b"error: line too long\n").await?;
            continue;
        }

        let Ok(line) = std::str::from_utf8(&buf) else {
            warn!("Discarding input line that is not valid UTF-8");
            writer.write_all(b"error: input is not valid UTF-8\n").await?;
            continue;
        };

        let command = parse_command(line);
        debug!("Received command: {}", describe(&command));

        let (result, reply) = handle_command(form, command);
        writer.write_all(reply.as_bytes()).await?;
        writer.flush().await?;

        if result == CommandResult::Quit {
            info!("Session ended by user");
            break;
        }
    }

    Ok(())
}

/// Applies one command to the form and returns the reply text.
pub fn handle_command<R: UserRepository>(
    form: &mut SignupForm<R>,
    command: Command,
) -> (CommandResult, String) {
    let reply = match command {
        Command::Set(field, value) => {
            form.change(field, value);
            String::new()
        }
        Command::Submit => match form.submit() {
            Ok(outcome) => format_outcome(&outcome),
            Err(e) => {
                warn!("Submission could not be stored: {}", e);
                format!("error: {}\n", e)
            }
        },
        Command::Show => format_input(form.input()),
        Command::Errors => format_errors(form.errors()),
        Command::List => match form.repository().list() {
            Ok(users) => format_users(&users),
            Err(e) => {
                warn!("Failed to list stored signups: {}", e);
                format!("error: {}\n", e)
            }
        },
        Command::Reset => {
            form.reset();
            "form cleared\n".to_string()
        }
        Command::Clear => match form.repository_mut().clear() {
            Ok(()) => "stored signups deleted\n".to_string(),
            Err(e) => {
                warn!("Failed to clear stored signups: {}", e);
                format!("error: {}\n", e)
            }
        },
        Command::Help => HELP.to_string(),
        Command::Quit => return (CommandResult::Quit, "bye\n".to_string()),
        Command::Empty => String::new(),
        Command::Invalid(reason) => format!("error: {}\n", reason),
        Command::Unknown(raw) => format!("unknown command: {} (try 'help')\n", raw),
    };

    (CommandResult::Continue, reply)
}

/// Log label that never carries field values.
fn describe(command: &Command) -> String {
    match command {
        Command::Set(field, _) => format!("Set({})", field),
        Command::Invalid(_) => "Invalid".to_string(),
        Command::Unknown(raw) => {
            let verb = raw.split_whitespace().next().unwrap_or("");
            format!("Unknown({})", verb)
        }
        other => format!("{:?}", other),
    }
}
