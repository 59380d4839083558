//! Fetch, parse and apply one digit.

use std::fmt;
use std::sync::Arc;
use std::sync::Mutex;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::common::mutex_lock_or_recover;
use crate::domain::{DigitResponse, Frame, Grid, ProtocolError, StructureError};
use crate::usecases::layout::build_grid;
use crate::usecases::ports::{DigitSource, Page, RefreshStatus, TransportError};

/// How overlapping refreshes are ordered when they complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlapPolicy {
    /// Apply responses as they complete; the last to complete wins.
    #[default]
    Completion,
    /// Drop responses older than the last one applied; the last requested wins.
    Latest,
}

impl fmt::Display for OverlapPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverlapPolicy::Completion => f.write_str("completion"),
            OverlapPolicy::Latest => f.write_str("latest"),
        }
    }
}

#[derive(Error, Debug)]
pub enum RefreshError {
    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),
    #[error("protocol violation: {0}")]
    Protocol(#[from] ProtocolError),
}

impl RefreshError {
    /// Which step of the refresh failed, for logs.
    pub fn stage(&self) -> &'static str {
        match self {
            RefreshError::Transport(err) => err.operation(),
            RefreshError::Protocol(_) => "decode",
        }
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            RefreshError::Transport(err) => err.is_retryable(),
            RefreshError::Protocol(_) => false,
        }
    }

    pub fn suggestion(&self) -> &'static str {
        match self {
            RefreshError::Transport(TransportError::Timeout { .. }) => {
                "The digit server is slow to answer. Raise --timeout-ms or try again."
            }
            RefreshError::Transport(TransportError::Status { .. }) => {
                "The server answered but not with a digit. Check --path."
            }
            RefreshError::Transport(_) => {
                "Check that the digit server is running and --host/--port point at it."
            }
            RefreshError::Protocol(_) => {
                "The server must answer with {\"pixels\": [64 integers], \"target\": \"...\"}."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    Applied { ticket: u64, label: String },
    /// The response arrived after a newer one had already been applied.
    Superseded { ticket: u64, applied: u64 },
}

struct Shared<P> {
    page: P,
    issued: u64,
    applied: u64,
    in_flight: usize,
}

struct Inner<P: Page> {
    source: Arc<dyn DigitSource>,
    grid: Grid<P::Cell>,
    policy: OverlapPolicy,
    shared: Mutex<Shared<P>>,
}

/// Owns the page and runs refresh cycles against it. Clones share the same
/// page, so several refreshes may be in flight at once.
pub struct Refresher<P: Page> {
    inner: Arc<Inner<P>>,
}

impl<P: Page> Clone for Refresher<P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<P: Page> Refresher<P> {
    pub fn new(
        page: P,
        source: Arc<dyn DigitSource>,
        policy: OverlapPolicy,
    ) -> Result<Self, StructureError> {
        let grid = build_grid(&page)?;
        Ok(Self {
            inner: Arc::new(Inner {
                source,
                grid,
                policy,
                shared: Mutex::new(Shared {
                    page,
                    issued: 0,
                    applied: 0,
                    in_flight: 0,
                }),
            }),
        })
    }

    pub fn policy(&self) -> OverlapPolicy {
        self.inner.policy
    }

    pub fn endpoint(&self) -> &str {
        self.inner.source.endpoint()
    }

    pub fn with_page<R>(&self, f: impl FnOnce(&P) -> R) -> R {
        let shared = mutex_lock_or_recover(&self.inner.shared);
        f(&shared.page)
    }

    /// Runs one fetch, parse and apply cycle. Failures are also reported to
    /// the page as [`RefreshStatus::Failed`]; pixels are left as they were.
    pub async fn refresh(&self) -> Result<RefreshOutcome, RefreshError> {
        let ticket = self.begin();
        debug!(ticket, endpoint = self.endpoint(), "Refresh started");
        let frame = self.fetch_frame().await;
        self.finish(ticket, frame)
    }

    fn begin(&self) -> u64 {
        let mut shared = mutex_lock_or_recover(&self.inner.shared);
        shared.issued += 1;
        shared.in_flight += 1;
        shared.page.set_status(&RefreshStatus::Loading);
        shared.issued
    }

    async fn fetch_frame(&self) -> Result<Frame, RefreshError> {
        let body = self.inner.source.fetch().await?;
        let response = DigitResponse::parse(&body)?;
        Ok(Frame::from_response(&response)?)
    }

    fn finish(
        &self,
        ticket: u64,
        frame: Result<Frame, RefreshError>,
    ) -> Result<RefreshOutcome, RefreshError> {
        let mut guard = mutex_lock_or_recover(&self.inner.shared);
        let shared = &mut *guard;
        shared.in_flight = shared.in_flight.saturating_sub(1);
        let stale = self.inner.policy == OverlapPolicy::Latest && ticket < shared.applied;
        let settled = if shared.in_flight > 0 {
            RefreshStatus::Loading
        } else {
            RefreshStatus::Ready
        };

        let frame = match frame {
            Ok(frame) => frame,
            Err(err) => {
                warn!(ticket, stage = err.stage(), error = %err, "Refresh failed");
                if stale {
                    shared.page.set_status(&settled);
                } else {
                    shared.page.set_status(&RefreshStatus::Failed(err.to_string()));
                }
                return Err(err);
            }
        };

        if stale {
            warn!(
                ticket,
                applied = shared.applied,
                "Discarding response superseded by a newer refresh"
            );
            shared.page.set_status(&settled);
            return Ok(RefreshOutcome::Superseded {
                ticket,
                applied: shared.applied,
            });
        }

        for (cell, color) in frame.cells(&self.inner.grid) {
            shared.page.paint(cell, color);
        }
        shared.page.set_label(frame.label());
        shared.page.set_status(&settled);
        shared.applied = ticket;
        info!(ticket, label = frame.label(), "Digit applied");

        Ok(RefreshOutcome::Applied {
            ticket,
            label: frame.label().to_string(),
        })
    }
}
