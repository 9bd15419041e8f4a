//! Root-level messages.

use crate::mvi::Intent;
use crate::screens::cart::CartMsg;
use crate::screens::dish::DishMsg;
use crate::screens::dishes::DishesMsg;

/// Everything that can be folded into [`RootState`](super::RootState).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Msg {
    Dishes(DishesMsg),
    Dish(DishMsg),
    Cart(CartMsg),
    /// Navigation is applied at the root, whatever screen is current.
    Navigate(NavigateCommand),
    UpdateCartCount(u32),
}

impl Intent for Msg {}

impl From<DishesMsg> for Msg {
    fn from(msg: DishesMsg) -> Self {
        Msg::Dishes(msg)
    }
}

impl From<DishMsg> for Msg {
    fn from(msg: DishMsg) -> Self {
        Msg::Dish(msg)
    }
}

impl From<CartMsg> for Msg {
    fn from(msg: CartMsg) -> Self {
        Msg::Cart(msg)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NavigateCommand {
    /// Push the current screen and open `target` with fresh state.
    ToScreen(ScreenTarget),
    /// Like `ToScreen(Cart)`, but a no-op when the cart is already open.
    ToCart,
    /// Pop the backstack; on an empty backstack the session finishes.
    ToBack,
}

/// A screen to open, with the parameters that seed its state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ScreenTarget {
    Dishes,
    Dish { id: String, title: String },
    Cart,
}
