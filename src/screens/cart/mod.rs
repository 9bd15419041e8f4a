//! Cart screen: line items, quantity changes, removal confirm, checkout.

mod effect;
mod handler;
mod intent;
mod reducer;
mod state;

pub use effect::CartEff;
pub use handler::CartEffectHandler;
pub use intent::CartMsg;
pub use reducer::CartReducer;
pub use state::{CartContent, CartState, ConfirmDialog};

use crate::mvi::Effects;

pub const ROUTE: &str = "cart";
pub const TITLE: &str = "Cart";

pub fn initial_state() -> CartState {
    CartState::default()
}

pub fn initial_effects() -> Effects<CartEff> {
    Effects::from([CartEff::LoadCart])
}
