use crate::mvi::Effect;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DishesEff {
    /// Pull the remote catalog into the local store, then show it.
    SyncDishes,
    SearchDishes(String),
    FindAllDishes,
    FindSuggestions(String),
    AddToCart { id: String, title: String },
    RemoveFromCart { id: String, title: String },
}

impl Effect for DishesEff {}
