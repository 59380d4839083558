mod color;
mod sync;
pub mod telemetry;

pub use color::Colors;
pub use color::init as color_init;
pub use sync::mutex_lock_or_recover;
#[cfg(test)]
pub(crate) mod test_env;
