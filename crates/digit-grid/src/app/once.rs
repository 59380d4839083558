//! Single refresh for scripts: fetch, apply, print.

use anyhow::Result;

use crate::adapters::BoardView;
use crate::infra::terminal::Board;
use crate::usecases::Refresher;

pub fn run_once(refresher: Refresher<Board>) -> Result<BoardView> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(refresher.refresh())?;
    Ok(refresher.with_page(BoardView::from_board))
}
