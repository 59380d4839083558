use tracing::debug;

use crate::domain::{Grid, StructureError};
use crate::usecases::ports::Page;

/// Scans the page once and captures its cells as a fixed 8x8 grid.
pub fn build_grid<P: Page>(page: &P) -> Result<Grid<P::Cell>, StructureError> {
    let rows = page.rows();
    debug!(rows = rows.len(), "Scanned page layout");
    Grid::from_rows(rows)
}
