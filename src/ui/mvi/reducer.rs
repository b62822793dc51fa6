//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// The only place where UI state transitions happen: (State, Intent) -> State.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Applies `intent` and returns the next state. No I/O.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
