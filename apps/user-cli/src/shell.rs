//! Line-oriented session over a single store.
//!
//! Each line is one command (`add <id> <first> <last>`, `get <index>`,
//! `list`, `help`, `quit`). A failed command is reported and the session
//! continues; EOF or `quit` ends it.

use std::fmt;
use std::io::{self, BufRead, Write};

use domain::service::{UserRequest, UserResponse, UserService};
use domain::{User, UserStore};
use tracing::{debug, info, warn};

use crate::config::OutputFormat;
use crate::render;

const HELP: &str = "commands:
  add <id> <first_name> <last_name>   append a user
  get <index>                         user at a zero-based position
  list                                all users in insertion order
  help                                this text
  quit | exit                         end the session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Request(UserRequest),
    Help,
    Quit,
}

/// A line that does not form a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellError(String);

impl ShellError {
    pub fn code(&self) -> &'static str {
        "bad_request"
    }
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ShellError {}

/// Parse one input line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> Result<Option<ShellCommand>, ShellError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let mut words = line.split_whitespace();
    let Some(cmd) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();

    let command = match (cmd.to_lowercase().as_str(), args.as_slice()) {
        ("add", [id, first, last]) => {
            let id: i32 = id
                .parse()
                .map_err(|_| ShellError(format!("invalid id '{}'", id)))?;
            ShellCommand::Request(UserRequest::AddUser(User::new(id, *first, *last)))
        }
        ("add", _) => return Err(ShellError("usage: add <id> <first_name> <last_name>".into())),
        ("get", [index]) => {
            let index: i64 = index
                .parse()
                .map_err(|_| ShellError(format!("invalid index '{}'", index)))?;
            ShellCommand::Request(UserRequest::GetUserByIndex(index))
        }
        ("get", _) => return Err(ShellError("usage: get <index>".into())),
        ("list", []) => ShellCommand::Request(UserRequest::GetUsers),
        ("help", []) => ShellCommand::Help,
        ("quit" | "exit", []) => ShellCommand::Quit,
        ("list" | "help" | "quit" | "exit", _) => {
            return Err(ShellError(format!("'{}' takes no arguments", cmd)))
        }
        _ => return Err(ShellError(format!("unknown command '{}'", cmd))),
    };
    Ok(Some(command))
}

/// Handle one request and write its result. Returns whether it succeeded.
pub fn execute<S, W, E>(
    svc: &UserService<S>,
    request: UserRequest,
    format: OutputFormat,
    out: &mut W,
    err: &mut E,
) -> io::Result<bool>
where
    S: UserStore,
    W: Write,
    E: Write,
{
    debug!(?request, "handling request");
    match svc.handle(request) {
        Ok(response) => {
            if let UserResponse::User(ref user) = response {
                debug!(id = user.id, "user returned");
            }
            render::write_response(out, format, &response)?;
            Ok(true)
        }
        Err(e) => {
            warn!(code = e.code(), err = %e, "request failed");
            render::write_error(out, err, format, e.code(), &e.to_string())?;
            Ok(false)
        }
    }
}

/// Run a session until EOF or `quit`.
pub fn run<S, R, W, E>(
    svc: &UserService<S>,
    input: R,
    format: OutputFormat,
    out: &mut W,
    err: &mut E,
) -> io::Result<()>
where
    S: UserStore,
    R: BufRead,
    W: Write,
    E: Write,
{
    info!(users = svc.store().len(), "shell session started");
    let mut executed = 0usize;
    for line in input.lines() {
        let line = line?;
        match parse_line(&line) {
            Ok(None) => {}
            Ok(Some(ShellCommand::Quit)) => break,
            Ok(Some(ShellCommand::Help)) => writeln!(err, "{}", HELP)?,
            Ok(Some(ShellCommand::Request(request))) => {
                execute(svc, request, format, out, err)?;
                executed += 1;
            }
            Err(e) => {
                warn!(line = %line, err = %e, "unparsable line");
                render::write_error(out, err, format, e.code(), &e.to_string())?;
            }
        }
        out.flush()?;
    }
    info!(executed, users = svc.store().len(), "shell session ended");
    Ok(())
}
