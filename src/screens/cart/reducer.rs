//! Reducer for the cart screen.

use crate::mvi::{Effects, Reducer};
use crate::root::{Eff, NavigateCommand, ScreenTarget};

use super::effect::CartEff;
use super::intent::CartMsg;
use super::state::{CartContent, CartState, ConfirmDialog};

pub struct CartReducer;

impl Reducer for CartReducer {
    type State = CartState;
    type Intent = CartMsg;
    type Effect = Eff;

    fn reduce(state: Self::State, intent: Self::Intent) -> (Self::State, Effects<Self::Effect>) {
        match intent {
            CartMsg::ClickOnDish { id, title } => (
                state,
                Effects::from([Eff::Navigate(NavigateCommand::ToScreen(
                    ScreenTarget::Dish { id, title },
                ))]),
            ),

            CartMsg::IncrementCount(id) => {
                (state, Effects::from([Eff::Cart(CartEff::IncrementItem(id))]))
            }

            CartMsg::DecrementCount(id) => {
                (state, Effects::from([Eff::Cart(CartEff::DecrementItem(id))]))
            }

            CartMsg::ShowConfirm { id, title } => (
                CartState {
                    confirm: ConfirmDialog::Shown { id, title },
                    ..state
                },
                Effects::new(),
            ),

            CartMsg::HideConfirm => (
                CartState {
                    confirm: ConfirmDialog::Hidden,
                    ..state
                },
                Effects::new(),
            ),

            CartMsg::RemoveFromCart { id, title } => (
                CartState {
                    confirm: ConfirmDialog::Hidden,
                    ..state
                },
                Effects::from([Eff::Cart(CartEff::RemoveItem { id, title })]),
            ),

            CartMsg::SendOrder => {
                let items = state.items().to_vec();
                (state, Effects::from([Eff::Cart(CartEff::SendOrder(items))]))
            }

            CartMsg::ShowCart(items) => {
                let content = if items.is_empty() {
                    CartContent::Empty
                } else {
                    CartContent::Loaded(items)
                };
                (CartState { content, ..state }, Effects::new())
            }
        }
    }
}
