//! State for the dishes screen.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::mvi::UiState;
use crate::repository::Dish;

/// What the dish list area shows.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DishesContent {
    #[default]
    Loading,
    Empty,
    Error,
    Populated(Vec<Dish>),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DishesState {
    /// Current search box text.
    pub input: String,
    /// Whether the search bar is open.
    pub is_search: bool,
    /// Autocomplete fragments with the number of dishes sharing each.
    pub suggestions: BTreeMap<String, u32>,
    pub content: DishesContent,
}

impl UiState for DishesState {}

impl DishesState {
    pub fn dishes(&self) -> &[Dish] {
        match &self.content {
            DishesContent::Populated(dishes) => dishes,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.content, DishesContent::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_loading_and_idle() {
        let state = DishesState::default();
        assert!(state.is_loading());
        assert!(!state.is_search);
        assert!(state.input.is_empty());
        assert!(state.dishes().is_empty());
    }

    #[test]
    fn dishes_only_when_populated() {
        let state = DishesState {
            content: DishesContent::Populated(vec![Dish::new("1", "Soup", 300)]),
            ..Default::default()
        };
        assert_eq!(state.dishes().len(), 1);
        assert!(!state.is_loading());
    }
}
