//! State for the dish screen.

use serde::{Deserialize, Serialize};

use crate::mvi::UiState;
use crate::repository::{Dish, Review};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DishContent {
    #[default]
    Loading,
    Loaded(Dish),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReviewsContent {
    #[default]
    Loading,
    Loaded(Vec<Review>),
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DishState {
    pub id: String,
    pub title: String,
    pub content: DishContent,
    pub reviews: ReviewsContent,
    /// Quantity picked for "add to cart"; at least one.
    pub count: u32,
    pub is_liked: bool,
    pub is_review_dialog: bool,
}

impl Default for DishState {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            content: DishContent::default(),
            reviews: ReviewsContent::default(),
            count: 1,
            is_liked: false,
            is_review_dialog: false,
        }
    }
}

impl UiState for DishState {}

impl DishState {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn dish(&self) -> Option<&Dish> {
        match &self.content {
            DishContent::Loaded(dish) => Some(dish),
            DishContent::Loading => None,
        }
    }

    /// Reviews currently on screen.
    pub fn shown_reviews(&self) -> &[Review] {
        match &self.reviews {
            ReviewsContent::Loaded(reviews) => reviews,
            _ => &[],
        }
    }
}
