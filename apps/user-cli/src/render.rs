//! Writing command results and errors in the configured output format.

use std::io::{self, Write};

use domain::service::UserResponse;
use domain::User;

use crate::config::OutputFormat;

/// Create a structured error JSON.
///
/// Returns: `{"error": {"code": "<code>", "message": "<message>"}}`
pub fn json_error(code: &str, message: &str) -> serde_json::Value {
    serde_json::json!({"error": {"code": code, "message": message}})
}

fn write_user_line<W: Write>(out: &mut W, user: &User) -> io::Result<()> {
    writeln!(out, "{}\t{}\t{}", user.id, user.first_name, user.last_name)
}

fn write_json<W: Write, T: serde::Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)
}

pub fn write_response<W: Write>(
    out: &mut W,
    format: OutputFormat,
    response: &UserResponse,
) -> io::Result<()> {
    match (format, response) {
        (OutputFormat::Text, UserResponse::User(user)) => write_user_line(out, user),
        (OutputFormat::Text, UserResponse::Users(users)) => {
            users.iter().try_for_each(|u| write_user_line(out, u))
        }
        (OutputFormat::Json, UserResponse::User(user)) => write_json(out, user),
        (OutputFormat::Json, UserResponse::Users(users)) => write_json(out, users),
    }
}

/// Report a failed command. JSON errors go to `out` so a consumer sees one
/// document per command; text errors go to `err`.
pub fn write_error<W: Write, E: Write>(
    out: &mut W,
    err: &mut E,
    format: OutputFormat,
    code: &str,
    message: &str,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => write_json(out, &json_error(code, message)),
        OutputFormat::Text => writeln!(err, "error: {}", message),
    }
}
