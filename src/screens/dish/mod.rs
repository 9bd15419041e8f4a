//! Single dish screen: details, reviews, quantity picker.
//!
//! Effects for one visit share a cancellation scope owned by
//! [`DishEffectHandler`]; `DishEff::Terminate` ends it.

mod effect;
mod handler;
mod intent;
mod reducer;
mod state;

pub use effect::DishEff;
pub use handler::DishEffectHandler;
pub use intent::DishMsg;
pub use reducer::DishReducer;
pub use state::{DishContent, DishState, ReviewsContent};

use crate::mvi::Effects;

pub const ROUTE: &str = "dish";

pub fn initial_state(id: &str, title: &str) -> DishState {
    DishState::new(id, title)
}

pub fn initial_effects(id: &str) -> Effects<DishEff> {
    Effects::from([
        DishEff::LoadDish(id.to_string()),
        DishEff::LoadReviews(id.to_string()),
    ])
}
