//! Fixed 8x8 grid of cell handles.

use thiserror::Error;

pub const GRID_SIDE: usize = 8;
pub const CELL_COUNT: usize = GRID_SIDE * GRID_SIDE;

/// Flat, row-major index of a grid position into a 64-sample array.
pub const fn pixel_index(row: usize, col: usize) -> usize {
    col + GRID_SIDE * row
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructureError {
    #[error("page exposes {found} rows, expected {GRID_SIDE}")]
    RowCount { found: usize },
    #[error("row {row} exposes {found} cells, expected {GRID_SIDE}")]
    CellCount { row: usize, found: usize },
}

/// Row-major 8x8 collection of handles. Positions never change once built.
#[derive(Debug, Clone)]
pub struct Grid<C> {
    cells: Vec<C>,
}

impl<C> Grid<C> {
    /// Builds the grid from rows scanned in document order, rejecting any
    /// shape other than exactly 8 rows of 8 cells.
    pub fn from_rows(rows: Vec<Vec<C>>) -> Result<Self, StructureError> {
        if rows.len() != GRID_SIDE {
            return Err(StructureError::RowCount { found: rows.len() });
        }
        if let Some((row, cells)) = rows
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != GRID_SIDE)
        {
            return Err(StructureError::CellCount {
                row,
                found: cells.len(),
            });
        }

        Ok(Self {
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Returns `None` for positions outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<&C> {
        if row >= GRID_SIDE || col >= GRID_SIDE {
            return None;
        }
        self.cells.get(pixel_index(row, col))
    }

    /// Yields `(row, col, cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &C)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, cell)| (index / GRID_SIDE, index % GRID_SIDE, cell))
    }
}
