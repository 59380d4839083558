#![deny(clippy::all)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

mod adapters;
mod app;
mod common;
mod domain;
mod infra;
mod usecases;

pub use app::Application;
pub use domain::{Color, DigitResponse, Frame, Grid, ProtocolError, Shade, StructureError};
pub use infra::http::{ClientConfig, ConfigError, HttpDigitSource};
pub use infra::terminal::{Board, CellId};
pub use usecases::ports::{DigitSource, Page, RefreshStatus, TransportError};
pub use usecases::{OverlapPolicy, RefreshError, RefreshOutcome, Refresher, build_grid};
