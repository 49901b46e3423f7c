use std::future::Future;
use std::pin::Pin;

use tokio_util::sync::CancellationToken;

use crate::{State, Updater};

pub type CommandFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// Manual-only side effect.
///
/// A command is dispatched explicitly through [`crate::StateCtx::dispatch`].
/// It receives a snapshot of the state taken at dispatch time and reports its
/// outcome with [`Updater::set`]. Implementations must check `cancel` before
/// reporting so results that resolve after teardown are discarded.
pub trait Command<S: State> {
    fn run(&self, snap: S, updater: Updater<S::Event>, cancel: CancellationToken) -> CommandFuture;
}
