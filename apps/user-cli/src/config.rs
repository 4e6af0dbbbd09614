//! Centralized configuration for user-cli.
//!
//! All environment variables are loaded and validated at startup to fail fast
//! on misconfiguration rather than halfway through a session.

use std::env;
use std::fmt;

/// Log output format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    fn from_str(s: &str) -> Self {
        if s.eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Pretty
        }
    }
}

/// Format used for command results written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated, one user per line
    Text,
    /// JSON objects and arrays
    Json,
}

impl OutputFormat {
    fn from_str(s: &str) -> Self {
        if s.eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// Configuration error.
#[derive(Debug)]
pub struct ConfigError {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Configuration error for {}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Process configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log format (default: pretty)
    pub log_format: LogFormat,
    /// Default result format (default: text)
    pub output_format: OutputFormat,
    /// Whether the store starts with the seed records (default: true)
    pub seed_users: bool,
}

impl Config {
    /// Load and validate configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_format = LogFormat::from_str(&lookup("LOG_FORMAT").unwrap_or_else(|| "pretty".into()));

        let output_format =
            OutputFormat::from_str(&lookup("OUTPUT_FORMAT").unwrap_or_else(|| "text".into()));

        let seed_users = match lookup("SEED_USERS") {
            None => true,
            Some(raw) => parse_bool(&raw).ok_or_else(|| ConfigError {
                field: "SEED_USERS",
                message: format!("expected true/false, got '{}'", raw),
            })?,
        };

        Ok(Self {
            log_format,
            output_format,
            seed_users,
        })
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}
