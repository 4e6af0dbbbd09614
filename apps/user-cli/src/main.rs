//! user-cli — command-line host for the in-memory user store.
//!
//! Builds exactly one store per process and runs either a single command or
//! a line-oriented shell against it. Because nothing is persisted, use the
//! shell to run several operations against the same store.
//!
//! Run:
//! ```bash
//! cargo run -p user-cli -- list
//! cargo run -p user-cli -- --format json get 2
//! printf 'add 4 Ali Ben\nget 3\nlist\n' | cargo run -p user-cli -- shell
//! ```
//!
//! Configuration: See `config.rs` for all environment variables.

mod config;
mod render;
mod shell;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use domain::adapters::memory_repo::InMemoryUserStore;
use domain::service::{UserRequest, UserService};
use domain::{User, UserStore};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use config::OutputFormat;

#[derive(Parser)]
#[command(name = "user-cli", version)]
#[command(about = "Add, fetch and list users held in process memory")]
struct Args {
    /// Result format; overrides OUTPUT_FORMAT
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every user in insertion order
    List,
    /// Print the user at a zero-based position (not an id lookup)
    Get {
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },
    /// Append a user and print it
    Add {
        #[arg(allow_negative_numbers = true)]
        id: i32,
        first_name: String,
        last_name: String,
    },
    /// Read commands from stdin against one store
    Shell,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Load and validate config first (fail fast on misconfiguration)
    let cfg = match config::Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&cfg);

    let format = args.format.unwrap_or(cfg.output_format);
    let store = if cfg.seed_users {
        InMemoryUserStore::seeded()
    } else {
        InMemoryUserStore::new()
    };
    info!(users = store.len(), seeded = cfg.seed_users, "{}", domain::about());
    let svc = UserService::new(store);

    match run(&svc, args.command, format) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!(err = %e, "io error");
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run<S: UserStore>(svc: &UserService<S>, command: Command, format: OutputFormat) -> io::Result<bool> {
    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();

    let request = match command {
        Command::Shell => {
            let stdin = io::stdin();
            shell::run(svc, stdin.lock(), format, &mut out, &mut err)?;
            return Ok(true);
        }
        Command::List => UserRequest::GetUsers,
        Command::Get { index } => UserRequest::GetUserByIndex(index),
        Command::Add {
            id,
            first_name,
            last_name,
        } => UserRequest::AddUser(User::new(id, first_name, last_name)),
    };
    let ok = shell::execute(svc, request, format, &mut out, &mut err)?;
    out.flush()?;
    Ok(ok)
}

// Logs go to stderr; stdout carries command results.
fn init_tracing(cfg: &config::Config) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let registry = tracing_subscriber::registry().with(env_filter);
    match cfg.log_format {
        config::LogFormat::Json => {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_timer(fmt::time::SystemTime)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        config::LogFormat::Pretty => {
            registry
                .with(
                    fmt::layer()
                        .pretty()
                        .with_target(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    }
}
