use crate::mvi::Intent;
use crate::repository::CartItem;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CartMsg {
    ClickOnDish { id: String, title: String },
    IncrementCount(String),
    DecrementCount(String),
    /// Ask before removing a line.
    ShowConfirm { id: String, title: String },
    HideConfirm,
    RemoveFromCart { id: String, title: String },
    SendOrder,
    ShowCart(Vec<CartItem>),
}

impl Intent for CartMsg {}
