//! Dishes catalog screen: list, search and autocomplete.
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - What the catalog screen shows
//! - `intent.rs` - User input and repository results
//! - `effect.rs` - Catalog sync, search, cart updates
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `handler.rs` - Executes effects against the repositories

mod effect;
mod handler;
mod intent;
mod reducer;
mod state;
pub mod suggestions;

pub use effect::DishesEff;
pub use handler::DishesEffectHandler;
pub use intent::DishesMsg;
pub use reducer::DishesReducer;
pub use state::{DishesContent, DishesState};

use crate::mvi::Effects;

pub const ROUTE: &str = "dishes";
pub const TITLE: &str = "All dishes";

pub fn initial_state() -> DishesState {
    DishesState::default()
}

pub fn initial_effects() -> Effects<DishesEff> {
    Effects::from([DishesEff::SyncDishes])
}
