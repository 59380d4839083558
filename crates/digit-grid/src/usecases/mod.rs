pub mod layout;
pub mod ports;
pub mod refresh;

pub use layout::build_grid;
pub use refresh::{OverlapPolicy, RefreshError, RefreshOutcome, Refresher};
