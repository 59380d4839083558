mod client;
pub mod config;

pub use client::HttpDigitSource;
pub use config::{ClientConfig, ConfigError};
