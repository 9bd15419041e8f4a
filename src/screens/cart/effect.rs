use crate::mvi::Effect;
use crate::repository::CartItem;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CartEff {
    LoadCart,
    IncrementItem(String),
    DecrementItem(String),
    RemoveItem { id: String, title: String },
    SendOrder(Vec<CartItem>),
}

impl Effect for CartEff {}
