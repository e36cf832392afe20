//! One-shot timer that clears the duplicate advisory.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{sleep_until, Instant};
use tokio_util::sync::CancellationToken;

use crate::editor::ADVISORY_TTL;
use crate::hlog_debug;
use crate::tea::Message;

use super::ActorHandle;

/// Schedules `Message::AdvisoryExpired` after the advisory TTL.
///
/// At most one expiry is outstanding: scheduling again cancels the previous
/// one, and dropping the timer cancels whatever is left.
pub struct AdvisoryTimer {
    msg_tx: mpsc::UnboundedSender<Message>,
    ttl: Duration,
    current: Option<ActorHandle>,
}

impl AdvisoryTimer {
    pub fn new(msg_tx: mpsc::UnboundedSender<Message>) -> Self {
        Self {
            msg_tx,
            ttl: ADVISORY_TTL,
            current: None,
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Start the expiry for `generation`. Must run inside a tokio runtime.
    pub fn schedule(&mut self, generation: u64) {
        self.cancel();

        let cancel = CancellationToken::new();
        let token = cancel.clone();
        // Deadline is fixed here, not when the task first gets polled.
        let deadline = Instant::now() + self.ttl;
        let tx = self.msg_tx.clone();

        hlog_debug!(
            "AdvisoryTimer::schedule generation={} ttl={:?}",
            generation,
            self.ttl
        );

        tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = token.cancelled() => {
                    hlog_debug!("AdvisoryTimer cancelled generation={}", generation);
                }
                _ = sleep_until(deadline) => {
                    let _ = tx.send(Message::AdvisoryExpired { generation });
                }
            }
        });

        self.current = Some(ActorHandle::new(cancel));
    }

    /// Cancel the outstanding expiry, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.current.take() {
            handle.shutdown();
        }
    }
}

impl Drop for AdvisoryTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
