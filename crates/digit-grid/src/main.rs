//! CLI entrypoint for digit-grid.

use anyhow::Result;
use digit_grid::Application;

fn main() -> Result<()> {
    let app = Application::new();
    let exit_code = app.run()?;
    std::process::exit(exit_code);
}
