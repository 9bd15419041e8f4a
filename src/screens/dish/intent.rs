use crate::mvi::Intent;
use crate::repository::{Dish, Review};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DishMsg {
    AddToCart {
        id: String,
        count: u32,
    },
    IncrementCount,
    /// Never goes below one.
    DecrementCount,
    ToggleLike,
    ShowReviewDialog,
    HideReviewDialog,
    SendReview {
        dish_id: String,
        rating: u8,
        review: String,
    },
    ShowDish(Dish),
    ShowReviews(Vec<Review>),
}

impl Intent for DishMsg {}
