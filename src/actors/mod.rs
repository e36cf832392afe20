//! Background tasks that feed messages back into the logic loop.
//!
//! The only one today is the advisory expiry timer. Keyboard input is handled
//! synchronously in the logic thread, not via an actor.

pub mod expiry;

use tokio_util::sync::CancellationToken;

pub use expiry::AdvisoryTimer;

/// Handle to a running actor task. Dropping the handle does not cancel it;
/// call `shutdown`.
#[derive(Debug)]
pub struct ActorHandle {
    cancel: CancellationToken,
}

impl ActorHandle {
    pub fn new(cancel: CancellationToken) -> Self {
        Self { cancel }
    }

    /// Signal the actor to stop.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }
}
