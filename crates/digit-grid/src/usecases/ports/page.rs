use std::fmt;

use crate::domain::Color;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RefreshStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

impl fmt::Display for RefreshStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefreshStatus::Idle => f.write_str("idle"),
            RefreshStatus::Loading => f.write_str("loading"),
            RefreshStatus::Ready => f.write_str("ready"),
            RefreshStatus::Failed(reason) => write!(f, "refresh failed: {reason}"),
        }
    }
}

/// The surface a digit is drawn on: rows of addressable cells, a label and
/// a status line.
pub trait Page: Send + 'static {
    type Cell: Send + Sync + 'static;

    /// Row containers in document order, each holding its cells in order.
    fn rows(&self) -> Vec<Vec<Self::Cell>>;

    fn paint(&mut self, cell: &Self::Cell, color: &Color);

    fn set_label(&mut self, text: &str);

    fn set_status(&mut self, status: &RefreshStatus);
}
