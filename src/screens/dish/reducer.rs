//! Reducer for the dish screen.

use crate::mvi::{Effects, Reducer};
use crate::root::Eff;

use super::effect::DishEff;
use super::intent::DishMsg;
use super::state::{DishContent, DishState, ReviewsContent};

pub struct DishReducer;

impl Reducer for DishReducer {
    type State = DishState;
    type Intent = DishMsg;
    type Effect = Eff;

    fn reduce(state: Self::State, intent: Self::Intent) -> (Self::State, Effects<Self::Effect>) {
        match intent {
            DishMsg::AddToCart { id, count } => {
                (state, Effects::from([Eff::Dish(DishEff::AddToCart { id, count })]))
            }

            DishMsg::IncrementCount => (
                DishState {
                    count: state.count.saturating_add(1),
                    ..state
                },
                Effects::new(),
            ),

            DishMsg::DecrementCount => (
                DishState {
                    count: state.count.saturating_sub(1).max(1),
                    ..state
                },
                Effects::new(),
            ),

            DishMsg::ToggleLike => (
                DishState {
                    is_liked: !state.is_liked,
                    ..state
                },
                Effects::new(),
            ),

            DishMsg::ShowReviewDialog => (
                DishState {
                    is_review_dialog: true,
                    ..state
                },
                Effects::new(),
            ),

            DishMsg::HideReviewDialog => (
                DishState {
                    is_review_dialog: false,
                    ..state
                },
                Effects::new(),
            ),

            DishMsg::SendReview {
                dish_id,
                rating,
                review,
            } => {
                let reviews = state.shown_reviews().to_vec();
                (
                    DishState {
                        is_review_dialog: false,
                        ..state
                    },
                    Effects::from([Eff::Dish(DishEff::SendReview {
                        id: dish_id,
                        rating,
                        review,
                        reviews,
                    })]),
                )
            }

            DishMsg::ShowDish(dish) if dish.id != state.id => {
                tracing::debug!("Ignoring dish {} on screen for {}", dish.id, state.id);
                (state, Effects::new())
            }

            DishMsg::ShowDish(dish) => (
                DishState {
                    content: DishContent::Loaded(dish),
                    ..state
                },
                Effects::new(),
            ),

            DishMsg::ShowReviews(reviews) => {
                let reviews = if reviews.is_empty() {
                    ReviewsContent::Empty
                } else {
                    ReviewsContent::Loaded(reviews)
                };
                (DishState { reviews, ..state }, Effects::new())
            }
        }
    }
}
