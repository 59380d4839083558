//! Interactive full-screen view.

use std::io;
use std::thread;
use std::time::Duration;

use crossterm::cursor;
use crossterm::event;
use crossterm::event::Event;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use crossterm::execute;
use crossterm::terminal;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::app::error::ViewerError;
use crate::infra::terminal::{Board, ViewHeader, draw_board};
use crate::usecases::Refresher;

/// Redraw cadence while refreshes are in flight.
const TICK: Duration = Duration::from_millis(100);

/// Restores terminal state on drop to avoid leaving the user's shell in a broken mode.
#[must_use = "TerminalGuard must be held for the duration of the view"]
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, ViewerError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Refresh,
    Quit,
}

#[derive(Debug)]
enum ViewerEvent {
    Key(KeyAction),
    Redraw,
    Resized,
    InputFailed(String),
}

pub fn key_action(key: KeyEvent) -> Option<KeyAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(KeyAction::Quit)
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(KeyAction::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Char(' ') | KeyCode::Enter => {
            Some(KeyAction::Refresh)
        }
        _ => None,
    }
}

/// Runs the view on a single-threaded runtime until the user quits.
pub fn run_viewer(refresher: Refresher<Board>) -> Result<(), ViewerError> {
    on_viewer_runtime(view_loop(refresher))
}

/// Refreshes still in flight at quit are abandoned, not joined.
fn on_viewer_runtime<F>(task: F) -> Result<(), ViewerError>
where
    F: Future<Output = Result<(), ViewerError>>,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let result = runtime.block_on(task);
    runtime.shutdown_background();
    result
}

async fn view_loop(refresher: Refresher<Board>) -> Result<(), ViewerError> {
    let _guard = TerminalGuard::new()?;
    let (tx, mut rx) = mpsc::unbounded_channel();
    spawn_input_reader(tx.clone());

    let policy = refresher.policy().to_string();
    let endpoint = refresher.endpoint().to_string();
    let header = ViewHeader {
        endpoint: &endpoint,
        policy: &policy,
    };
    let mut stdout = io::stdout();
    let mut ticker = tokio::time::interval(TICK);

    spawn_refresh(&refresher, &tx);

    loop {
        tokio::select! {
            event = rx.recv() => match event {
                Some(ViewerEvent::Key(KeyAction::Quit)) | None => break,
                Some(ViewerEvent::Key(KeyAction::Refresh)) => spawn_refresh(&refresher, &tx),
                Some(ViewerEvent::Redraw) => {}
                Some(ViewerEvent::Resized) => {
                    execute!(stdout, terminal::Clear(terminal::ClearType::All))?;
                }
                Some(ViewerEvent::InputFailed(reason)) => return Err(ViewerError::EventRead(reason)),
            },
            _ = ticker.tick() => {}
        }
        refresher.with_page(|board| draw_board(&mut stdout, board, &header))?;
    }

    Ok(())
}

/// Each key press gets its own task; earlier refreshes are never cancelled.
fn spawn_refresh(refresher: &Refresher<Board>, tx: &mpsc::UnboundedSender<ViewerEvent>) {
    let refresher = refresher.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        match refresher.refresh().await {
            Ok(outcome) => debug!(?outcome, "Refresh finished"),
            Err(err) => warn!(error = %err, "Refresh failed"),
        }
        let _ = tx.send(ViewerEvent::Redraw);
    });
}

fn spawn_input_reader(tx: mpsc::UnboundedSender<ViewerEvent>) {
    let spawned = thread::Builder::new()
        .name("digit-grid-input".to_string())
        .spawn(move || {
            loop {
                let event = match event::read() {
                    Ok(Event::Key(key)) => match key_action(key) {
                        Some(action) => ViewerEvent::Key(action),
                        None => continue,
                    },
                    Ok(Event::Resize(..)) => ViewerEvent::Resized,
                    Ok(_) => continue,
                    Err(err) => ViewerEvent::InputFailed(err.to_string()),
                };
                let failed = matches!(event, ViewerEvent::InputFailed(_));
                if tx.send(event).is_err() || failed {
                    break;
                }
            }
        });
    if let Err(err) = spawned {
        warn!(error = %err, "Failed to start input thread");
    }
}
