//! One-shot timers that report an event back into a [`crate::StateCtx`].
//!
//! ```ignore
//! let timer = Timer::deliver_after(Duration::from_secs(3), ctx.updater(), Event::Expired);
//!
//! // The message changed again: the old timer must not fire.
//! timer.cancel();
//! ```

use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::Updater;

/// Handle to a pending timer. Clones share the same token.
#[derive(Debug, Clone)]
pub struct Timer {
    cancel_token: CancellationToken,
}

impl Timer {
    /// Spawn a timer that reports `event` once `delay` has elapsed, measured
    /// from this call. Must be called from within a Tokio runtime.
    pub fn deliver_after<E: Send + 'static>(
        delay: Duration,
        updater: Updater<E>,
        event: E,
    ) -> Self {
        let cancel_token = CancellationToken::new();
        let cancelled = cancel_token.clone();
        let deadline = Instant::now() + delay;

        tokio::spawn(async move {
            tokio::select! {
                () = cancelled.cancelled() => {}
                () = tokio::time::sleep_until(deadline) => updater.set(event),
            }
        });

        Self { cancel_token }
    }

    /// The event will not be reported after this returns.
    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}
