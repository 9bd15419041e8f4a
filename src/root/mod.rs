//! Root of the state engine.
//!
//! - `state.rs` - [`RootState`], the screen map and backstack
//! - `intent.rs` / `effect.rs` - root message and effect sums
//! - `reducer.rs` - routes messages to the current screen's reducer
//! - `navigation.rs` - backstack transitions
//! - `dispatcher.rs` - routes effects to handlers and fan-out channels
//! - `store.rs` - the single-writer fold loop

mod dispatcher;
mod effect;
mod intent;
mod navigation;
mod reducer;
mod state;
mod store;

pub use dispatcher::{Collaborators, EffDispatcher};
pub use effect::{Eff, HostCommand, Notification};
pub use intent::{Msg, NavigateCommand, ScreenTarget};
pub use navigation::reduce_navigate;
pub use reducer::RootReducer;
pub use state::{Route, RootState, ScreenState, StateError};
pub use store::RootStore;
