use crate::mvi::Effect;
use crate::repository::Review;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DishEff {
    LoadDish(String),
    LoadReviews(String),
    /// `reviews` are the ones on screen, so the handler can append the new one.
    SendReview {
        id: String,
        rating: u8,
        review: String,
        reviews: Vec<Review>,
    },
    AddToCart {
        id: String,
        count: u32,
    },
    /// Cancel every in-flight effect of the current visit.
    Terminate,
}

impl Effect for DishEff {}
