mod board;
mod render;

pub use board::{Board, CellId};
pub use render::{ViewHeader, draw_board};
