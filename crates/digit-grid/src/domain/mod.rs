//! Pure digit model: grid shape, shade mapping and payload parsing.

pub mod digit;
pub mod grid;
pub mod shade;

pub use digit::{DigitResponse, Frame, ProtocolError, Target};
pub use grid::{CELL_COUNT, GRID_SIDE, Grid, StructureError, pixel_index};
pub use shade::{Color, Shade};
