pub mod presenter;

pub use presenter::{BoardView, ErrorView, OutputFormat, Presenter, create_presenter};
