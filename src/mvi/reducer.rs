//! Reducer trait for MVI architecture.

use super::effect::{Effect, Effects};
use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> (State, {Effect}).
/// Effects are descriptions only; executing them is the job of an
/// [`EffectHandler`](super::EffectHandler).
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// The effect type this reducer emits.
    type Effect: Effect;

    /// Process an intent and return the new state with the effects to run.
    fn reduce(state: Self::State, intent: Self::Intent) -> (Self::State, Effects<Self::Effect>);
}
