//! Adapters to the outside world: the HTTP endpoint and the terminal.

pub mod http;
pub mod terminal;
