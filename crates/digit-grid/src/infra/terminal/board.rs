//! In-memory page backing the terminal view.

use crate::domain::{Color, GRID_SIDE};
use crate::usecases::ports::{Page, RefreshStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellId {
    row: usize,
    col: usize,
}

impl CellId {
    pub fn row(self) -> usize {
        self.row
    }

    pub fn col(self) -> usize {
        self.col
    }
}

/// Rows of cells plus the label and status line. Cells start unpainted.
#[derive(Debug, Clone)]
pub struct Board {
    rows: usize,
    cols: usize,
    colors: Vec<Option<Color>>,
    label: String,
    status: RefreshStatus,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self::with_size(GRID_SIDE, GRID_SIDE)
    }

    pub fn with_size(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            colors: vec![None; rows * cols],
            label: String::new(),
            status: RefreshStatus::Idle,
        }
    }

    pub fn size(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn color(&self, row: usize, col: usize) -> Option<&Color> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.colors.get(row * self.cols + col)?.as_ref()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn status(&self) -> &RefreshStatus {
        &self.status
    }
}

impl Page for Board {
    type Cell = CellId;

    fn rows(&self) -> Vec<Vec<CellId>> {
        (0..self.rows)
            .map(|row| (0..self.cols).map(|col| CellId { row, col }).collect())
            .collect()
    }

    fn paint(&mut self, cell: &CellId, color: &Color) {
        if let Some(slot) = self.colors.get_mut(cell.row * self.cols + cell.col) {
            *slot = Some(color.clone());
        }
    }

    fn set_label(&mut self, text: &str) {
        self.label = text.to_string();
    }

    fn set_status(&mut self, status: &RefreshStatus) {
        self.status = status.clone();
    }
}
