use flume::Sender;
use log::debug;

/// Sending half used by commands and timers to report events back to a
/// [`crate::StateCtx`].
#[derive(Debug)]
pub struct Updater<E> {
    send: Sender<E>,
}

impl<E> Clone for Updater<E> {
    fn clone(&self) -> Self {
        Self {
            send: self.send.clone(),
        }
    }
}

impl<E> Updater<E> {
    pub(crate) fn new(send: Sender<E>) -> Self {
        Self { send }
    }

    /// Queue an event. Events sent after the owning context is gone are dropped.
    pub fn set(&self, event: E) {
        if self.send.send(event).is_err() {
            debug!("Updater: state context dropped, discarding event");
        }
    }
}
