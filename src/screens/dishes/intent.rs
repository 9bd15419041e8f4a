//! Intents for the dishes screen.

use std::collections::BTreeMap;

use crate::mvi::Intent;
use crate::repository::Dish;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DishesMsg {
    /// Search box text changed.
    SearchInput(String),
    SearchSubmit(String),
    /// Search icon pressed.
    SearchToggle,
    ShowDishes(Vec<Dish>),
    ShowError,
    ShowLoading,
    ClickDish {
        id: String,
        title: String,
    },
    AddToCart {
        id: String,
        title: String,
    },
    RemoveFromCart {
        id: String,
        title: String,
    },
    /// Ask for autocomplete suggestions for the current input.
    UpdateSuggestionResult(String),
    ShowSuggestions(BTreeMap<String, u32>),
    SuggestionSelect(String),
}

impl Intent for DishesMsg {}
