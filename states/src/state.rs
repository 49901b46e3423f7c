/// An immutable snapshot with a pure transition function.
///
/// `apply` never performs IO; side effects live in [`crate::Command`]s which
/// report back with events of type [`State::Event`].
pub trait State: Clone + Send + 'static {
    type Event: Send + 'static;

    fn apply(&self, event: &Self::Event) -> Self;
}
