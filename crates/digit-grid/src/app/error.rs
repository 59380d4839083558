use std::io;

use thiserror::Error;

use crate::adapters::ErrorView;
use crate::domain::StructureError;
use crate::infra::http::ConfigError;
use crate::usecases::RefreshError;
use crate::usecases::ports::TransportError;

/// Exit codes following sysexits.h.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const USAGE: i32 = 64;
    pub const UNAVAILABLE: i32 = 69;
    pub const SOFTWARE: i32 = 70;
    pub const IOERR: i32 = 74;
    pub const TEMPFAIL: i32 = 75;
    pub const PROTOCOL: i32 = 76;
}

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("Terminal error: {0}")]
    Terminal(#[from] io::Error),

    #[error("Event read failed: {0}")]
    EventRead(String),
}

/// Maps a failed run to what the user sees and the process exit code.
pub fn describe(error: &anyhow::Error) -> (ErrorView, i32) {
    if let Some(err) = error.downcast_ref::<RefreshError>() {
        let code = match err {
            RefreshError::Transport(TransportError::Timeout { .. }) => exit_codes::TEMPFAIL,
            RefreshError::Transport(_) => exit_codes::UNAVAILABLE,
            RefreshError::Protocol(_) => exit_codes::PROTOCOL,
        };
        return (
            ErrorView {
                error: err.to_string(),
                suggestion: Some(err.suggestion().to_string()),
                retryable: err.is_retryable(),
            },
            code,
        );
    }

    if let Some(err) = error.downcast_ref::<ConfigError>() {
        return (
            view(err.to_string(), "Check --host, --port and --path."),
            exit_codes::USAGE,
        );
    }

    if let Some(err) = error.downcast_ref::<StructureError>() {
        return (
            view(err.to_string(), "The board layout must be 8 rows of 8 cells."),
            exit_codes::SOFTWARE,
        );
    }

    if let Some(err) = error.downcast_ref::<ViewerError>() {
        return (
            view(err.to_string(), "Run with --once when no interactive terminal is available."),
            exit_codes::IOERR,
        );
    }

    (
        ErrorView {
            error: format!("{error:#}"),
            suggestion: None,
            retryable: false,
        },
        exit_codes::GENERAL_ERROR,
    )
}

fn view(error: String, suggestion: &str) -> ErrorView {
    ErrorView {
        error,
        suggestion: Some(suggestion.to_string()),
        retryable: false,
    }
}
