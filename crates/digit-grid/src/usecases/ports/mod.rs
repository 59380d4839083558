pub mod digit_source;
pub mod errors;
pub mod page;
#[cfg(test)]
pub(crate) mod test_support;

pub use digit_source::DigitSource;
pub use errors::TransportError;
pub use page::{Page, RefreshStatus};
