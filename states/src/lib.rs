//! Small state runtime shared by the business and UI layers.
//!
//! - [`State`]: an immutable snapshot with a pure transition function.
//! - [`Command`]: a manual-only side effect (network IO) that reports outcome
//!   events through an [`Updater`].
//! - [`StateCtx`]: owns the current snapshot and the in-flight command tasks;
//!   the UI drains outcome events once per frame.
//! - [`Timer`]: a cancellable one-shot timer that reports an event.

mod command;
mod ctx;
mod state;
mod timer;
mod updater;

pub use command::{Command, CommandFuture};
pub use ctx::StateCtx;
pub use state::State;
pub use timer::Timer;
pub use updater::Updater;
