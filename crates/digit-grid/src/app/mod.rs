//! CLI application layer and composition root wiring.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

pub mod commands;
pub mod error;
pub mod once;
pub mod viewer;

use crate::adapters::Presenter;
use crate::adapters::create_presenter;
use crate::app::commands::Cli;
use crate::app::error::exit_codes;
use crate::common::color_init;
use crate::common::telemetry;
use crate::infra::http::{ClientConfig, HttpDigitSource};
use crate::infra::terminal::Board;
use crate::usecases::Refresher;

pub struct Application;

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

impl Application {
    pub fn new() -> Self {
        Self
    }

    pub fn run(&self) -> Result<i32> {
        let cli = Cli::parse();
        color_init(cli.no_color);
        let _telemetry = telemetry::init_tracing(cli.log_level());
        let presenter = create_presenter(cli.effective_format());

        match Self::execute(&cli, presenter.as_ref()) {
            Ok(()) => Ok(exit_codes::SUCCESS),
            Err(err) => {
                debug!(error = ?err, "Run failed");
                let (view, code) = error::describe(&err);
                presenter.present_error(&view);
                Ok(code)
            }
        }
    }

    fn execute(cli: &Cli, presenter: &dyn Presenter) -> Result<()> {
        let refresher = Refresher::new(
            Board::new(),
            Arc::new(HttpDigitSource::new(&client_config(cli))?),
            cli.policy.into(),
        )?;
        debug!(endpoint = refresher.endpoint(), policy = %refresher.policy(), "Starting");

        if cli.once {
            let view = once::run_once(refresher)?;
            presenter.present_board(&view);
            return Ok(());
        }

        viewer::run_viewer(refresher)?;
        Ok(())
    }
}

/// Environment supplies the defaults, flags win.
fn client_config(cli: &Cli) -> ClientConfig {
    let mut config = ClientConfig::from_env();
    if let Some(host) = &cli.host {
        config = config.with_host(host.clone());
    }
    if let Some(port) = cli.port {
        config = config.with_port(port);
    }
    if let Some(path) = &cli.path {
        config = config.with_path(path.clone());
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        config = config.with_timeout_ms(timeout_ms);
    }
    config
}
