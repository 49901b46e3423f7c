use flume::{Receiver, Sender};
use log::{debug, error};
use tokio::task::{JoinError, JoinSet};
use tokio_util::sync::CancellationToken;

use crate::{Command, State, Updater};

/// Owns the current state snapshot and every in-flight command.
///
/// Commands run on the Tokio runtime and report events through an
/// [`Updater`]. Nothing touches the snapshot except [`StateCtx::apply`], which
/// the owner calls from its own thread (typically once per frame, after
/// [`StateCtx::drain`]).
pub struct StateCtx<S: State> {
    state: S,

    send: Sender<S::Event>,
    recv: Receiver<S::Event>,

    tasks: JoinSet<()>,
    cancel: CancellationToken,
}

impl<S: State + std::fmt::Debug> std::fmt::Debug for StateCtx<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateCtx")
            .field("state", &self.state)
            .field("pending_events", &self.recv.len())
            .field("tasks", &self.tasks.len())
            .field("cancelled", &self.cancel.is_cancelled())
            .finish()
    }
}

impl<S: State + Default> Default for StateCtx<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: State> StateCtx<S> {
    pub fn new(state: S) -> Self {
        let (send, recv) = flume::unbounded();
        Self {
            state,
            send,
            recv,
            tasks: JoinSet::new(),
            cancel: CancellationToken::new(),
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Direct access for input widgets (text fields bound to the snapshot).
    pub fn state_mut(&mut self) -> &mut S {
        &mut self.state
    }

    pub fn updater(&self) -> Updater<S::Event> {
        Updater::new(self.send.clone())
    }

    pub fn apply(&mut self, event: &S::Event) {
        self.state = self.state.apply(event);
    }

    /// Take every event reported since the last drain, in arrival order.
    pub fn drain(&self) -> Vec<S::Event> {
        self.recv.try_iter().collect()
    }

    /// Spawn a command with a snapshot of the current state.
    ///
    /// Must be called from within a Tokio runtime. After [`StateCtx::shutdown`]
    /// this is a no-op.
    pub fn dispatch<C: Command<S>>(&mut self, command: &C) {
        if self.cancel.is_cancelled() {
            debug!(
                "StateCtx: ignoring {} after shutdown",
                std::any::type_name::<C>()
            );
            return;
        }

        let future = command.run(
            self.state.clone(),
            self.updater(),
            self.cancel.child_token(),
        );
        self.tasks.spawn(future);
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Wait for the next in-flight command to finish.
    pub async fn join_next(&mut self) -> Option<Result<(), JoinError>> {
        self.tasks.join_next().await
    }

    /// Drop bookkeeping for commands that already finished.
    pub fn reap(&mut self) {
        while let Some(result) = self.tasks.try_join_next() {
            if let Err(err) = result {
                error!("StateCtx: command task failed: {err}");
            }
        }
    }

    /// Cancel every in-flight command and stop accepting new ones.
    ///
    /// Requests already on the wire are left to resolve; their commands see the
    /// cancelled token and report nothing.
    pub fn shutdown(&mut self) {
        if self.cancel.is_cancelled() {
            return;
        }
        self.cancel.cancel();
        self.tasks.detach_all();
    }

    pub fn is_shut_down(&self) -> bool {
        self.cancel.is_cancelled()
    }
}
