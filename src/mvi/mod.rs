//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides the base traits and plumbing for unidirectional
//! data flow with asynchronous side effects.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ (State, {Effect})
//!    ↑                        │        │
//!    │                      View   EffectHandler
//!    └──────── Commit ────────────────┘
//! ```
//!
//! - **State**: Immutable representation of what the screen shows
//! - **Intent**: User actions or async completions
//! - **Effect**: Description of async work; results come back as intents
//! - **Reducer**: Pure function from (state, intent) to (state, effects)

mod commit;
mod effect;
mod fanout;
mod intent;
mod reducer;
mod state;

pub use commit::Commit;
pub use effect::{Effect, EffectHandler, Effects};
pub use fanout::{fan_out, FanOut, FanOutSender};
pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
