#![expect(clippy::print_stdout, reason = "CLI output is emitted here")]
#![expect(clippy::print_stderr, reason = "CLI output is emitted here")]

//! One-shot output of a refreshed board.

use clap::ValueEnum;
use serde::Serialize;

use crate::common::Colors;
use crate::domain::Color;
use crate::infra::terminal::Board;

/// Output format for CLI commands
#[derive(Clone, Copy, Debug, ValueEnum, Default, PartialEq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize)]
pub struct BoardView {
    pub target: String,
    pub status: String,
    pub cells: Vec<Vec<Option<Color>>>,
}

impl BoardView {
    pub fn from_board(board: &Board) -> Self {
        let (rows, cols) = board.size();
        Self {
            target: board.label().to_string(),
            status: board.status().to_string(),
            cells: (0..rows)
                .map(|row| (0..cols).map(|col| board.color(row, col).cloned()).collect())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorView {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    pub retryable: bool,
}

pub trait Presenter {
    fn present_board(&self, view: &BoardView);

    fn present_error(&self, error: &ErrorView);
}

pub fn create_presenter(format: OutputFormat) -> Box<dyn Presenter> {
    match format {
        OutputFormat::Text => Box::new(TextPresenter),
        OutputFormat::Json => Box::new(JsonPresenter),
    }
}

pub struct TextPresenter;

impl TextPresenter {
    /// Colored swatches on a terminal, hex triplets otherwise.
    pub fn format_board(view: &BoardView) -> String {
        let mut out = String::new();
        for row in &view.cells {
            let line: Vec<String> = row
                .iter()
                .map(|cell| match cell {
                    Some(color) => match color.rgb() {
                        Some(rgb) => Colors::swatch(rgb, "  ", color.as_str()),
                        None => color.to_string(),
                    },
                    None => "-".to_string(),
                })
                .collect();
            out.push_str(&line.join(" "));
            out.push('\n');
        }
        out.push_str(&format!("target: {}", view.target));
        out
    }
}

impl Presenter for TextPresenter {
    fn present_board(&self, view: &BoardView) {
        println!("{}", Self::format_board(view));
    }

    fn present_error(&self, error: &ErrorView) {
        eprintln!("{} {}", Colors::error("Error:"), error.error);
        if let Some(suggestion) = &error.suggestion {
            eprintln!("{} {}", Colors::dim("Suggestion:"), suggestion);
        }
        if error.retryable {
            eprintln!(
                "{}",
                Colors::dim("(This error may be transient - retry may succeed)")
            );
        }
    }
}

pub struct JsonPresenter;

impl JsonPresenter {
    fn to_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value)
            .unwrap_or_else(|err| format!(r#"{{"error":"failed to encode output: {err}"}}"#))
    }
}

impl Presenter for JsonPresenter {
    fn present_board(&self, view: &BoardView) {
        println!("{}", Self::to_json(view));
    }

    fn present_error(&self, error: &ErrorView) {
        println!("{}", Self::to_json(error));
    }
}
