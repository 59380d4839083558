#![expect(clippy::print_stderr, reason = "Tracing not initialized yet")]

//! Tracing setup.
//!
//! The interactive viewer owns the screen, so `DIGIT_GRID_LOG=<file>` is the
//! way to see logs while it runs.

use std::io::IsTerminal;
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

const LOG_FILE_ENV: &str = "DIGIT_GRID_LOG";
const LOG_FORMAT_ENV: &str = "DIGIT_GRID_LOG_FORMAT";
const LOG_STREAM_ENV: &str = "DIGIT_GRID_LOG_STREAM";

#[derive(Debug)]
pub struct TelemetryGuard {
    _guard: Option<WorkerGuard>,
}

impl TelemetryGuard {
    fn disabled() -> Self {
        Self { _guard: None }
    }
}

pub fn init_tracing(default_level: &str) -> TelemetryGuard {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let (writer, guard, ansi) = match log_file_path_from_env() {
        Some(path) => match std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
        {
            Ok(file) => {
                let (non_blocking, guard) = tracing_appender::non_blocking(file);
                (BoxMakeWriter::new(non_blocking), Some(guard), false)
            }
            Err(err) => {
                eprintln!(
                    "Warning: failed to open log file {}: {}",
                    path.display(),
                    err
                );
                (
                    BoxMakeWriter::new(std::io::stderr),
                    None,
                    std::io::stderr().is_terminal(),
                )
            }
        },
        None => match log_stream_from_env() {
            LogStream::Stdout => (
                BoxMakeWriter::new(std::io::stdout),
                None,
                std::io::stdout().is_terminal(),
            ),
            LogStream::Stderr => (
                BoxMakeWriter::new(std::io::stderr),
                None,
                std::io::stderr().is_terminal(),
            ),
        },
    };

    let subscriber: Box<dyn tracing::Subscriber + Send + Sync> = match log_format_from_env() {
        LogFormat::Json => Box::new(
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_ansi(false)
                .json()
                .with_writer(writer)
                .finish(),
        ),
        LogFormat::Text => Box::new(
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_thread_names(true)
                .with_ansi(ansi)
                .with_writer(writer)
                .finish(),
        ),
    };

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        return TelemetryGuard::disabled();
    }

    TelemetryGuard { _guard: guard }
}

fn log_file_path_from_env() -> Option<PathBuf> {
    std::env::var(LOG_FILE_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LogStream {
    Stderr,
    Stdout,
}

fn normalized_env(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|value| value.trim().to_lowercase())
}

fn log_format_from_env() -> LogFormat {
    match normalized_env(LOG_FORMAT_ENV).as_deref() {
        Some("json") => LogFormat::Json,
        _ => LogFormat::Text,
    }
}

fn log_stream_from_env() -> LogStream {
    match normalized_env(LOG_STREAM_ENV).as_deref() {
        Some("stdout") => LogStream::Stdout,
        _ => LogStream::Stderr,
    }
}
