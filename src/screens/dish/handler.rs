//! Executes dish-screen effects inside a per-visit cancellation scope.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;

use crate::mvi::{Commit, EffectHandler, FanOutSender};
use crate::repository::{CartStore, DishesStore, RepoError, Review, ReviewService};
use crate::root::{Msg, Notification};

use super::effect::DishEff;
use super::intent::DishMsg;

const HOUR_MS: i64 = 60 * 60 * 1000;
const STUB_REVIEWS_BASE_MS: i64 = 1_631_232_000_000;

pub struct DishEffectHandler {
    dishes: Arc<dyn DishesStore>,
    cart: Arc<dyn CartStore>,
    reviews: Arc<dyn ReviewService>,
    notifier: FanOutSender<Notification>,
    reviews_page_size: usize,
    /// Scope of the current visit. Created on the first effect, dropped on terminate.
    scope: Mutex<Option<CancellationToken>>,
}

impl DishEffectHandler {
    pub fn new(
        dishes: Arc<dyn DishesStore>,
        cart: Arc<dyn CartStore>,
        reviews: Arc<dyn ReviewService>,
        notifier: FanOutSender<Notification>,
        reviews_page_size: usize,
    ) -> Self {
        Self {
            dishes,
            cart,
            reviews,
            notifier,
            reviews_page_size: reviews_page_size.max(1),
            scope: Mutex::new(None),
        }
    }

    fn scope(&self) -> CancellationToken {
        self.scope
            .lock()
            .get_or_insert_with(CancellationToken::new)
            .clone()
    }

    fn terminate(&self) {
        if let Some(scope) = self.scope.lock().take() {
            tracing::debug!("Dish scope cancelled");
            scope.cancel();
        }
    }

    /// Whether a visit scope is currently open.
    pub fn has_scope(&self) -> bool {
        self.scope.lock().is_some()
    }

    async fn notify(&self, scope: &CancellationToken, notification: Notification) {
        if !scope.is_cancelled() {
            self.notifier.send(notification).await;
        }
    }

    async fn run(
        &self,
        effect: DishEff,
        commit: &Commit<Msg>,
        scope: &CancellationToken,
    ) -> Result<(), RepoError> {
        match effect {
            DishEff::LoadDish(id) => {
                let dish = self
                    .dishes
                    .find_local(&id)
                    .await?
                    .ok_or_else(|| RepoError::NotFound {
                        what: format!("Dish {id}"),
                    })?;
                commit.send(DishMsg::ShowDish(dish).into());
            }

            DishEff::LoadReviews(id) => {
                let reviews = match self
                    .reviews
                    .fetch_reviews(&id, 0, self.reviews_page_size)
                    .await
                {
                    Ok(reviews) => reviews,
                    Err(e) if e.is_transient() => {
                        tracing::warn!("Reviews for {} unavailable, showing stub: {}", id, e);
                        stub_reviews()
                    }
                    Err(e) => return Err(e),
                };
                commit.send(DishMsg::ShowReviews(reviews).into());
            }

            DishEff::SendReview {
                id,
                rating,
                review,
                mut reviews,
            } => {
                let sent = match self.reviews.submit_review(&id, rating, &review).await {
                    Ok(sent) => sent,
                    Err(e) => {
                        tracing::warn!("Review for {} not delivered, echoing locally: {}", id, e);
                        Review {
                            author: "You".to_string(),
                            date: crate::repository::now_millis(),
                            rating,
                            text: review,
                        }
                    }
                };
                reviews.push(sent);
                commit.send(DishMsg::ShowReviews(reviews).into());
                self.notify(scope, Notification::text("Review sent")).await;
            }

            DishEff::AddToCart { id, count } => {
                self.cart.add_to_cart(&id, count).await?;
                let total = self.cart.total_count().await?;
                commit.send(Msg::UpdateCartCount(total));
                self.notify(scope, Notification::text(format!("Added {count} items to cart")))
                    .await;
            }

            DishEff::Terminate => self.terminate(),
        }
        Ok(())
    }
}

#[async_trait]
impl EffectHandler<DishEff, Msg> for DishEffectHandler {
    fn bind_scope(&self, effect: &DishEff) -> Option<CancellationToken> {
        match effect {
            DishEff::Terminate => None,
            _ => Some(self.scope()),
        }
    }

    async fn handle(&self, effect: DishEff, commit: Commit<Msg>) {
        if effect == DishEff::Terminate {
            self.terminate();
            return;
        }

        // A commit bound at dispatch time keeps the visit it was issued for.
        let scope = match commit.scope() {
            Some(scope) => scope.clone(),
            None => self.scope(),
        };
        let commit = commit.scoped(scope.clone());

        tokio::select! {
            biased;
            _ = scope.cancelled() => {
                tracing::debug!("Dish effect abandoned");
            }
            result = self.run(effect, &commit, &scope) => {
                if let Err(e) = result {
                    tracing::warn!("Dish effect failed: {}", e);
                    self.notify(&scope, Notification::error(e.to_string())).await;
                }
            }
        }
    }
}

/// Shown when the reviews API cannot be reached.
fn stub_reviews() -> Vec<Review> {
    vec![
        Review {
            author: "Gleb".to_string(),
            date: STUB_REVIEWS_BASE_MS - 5 * HOUR_MS,
            rating: 4,
            text: "Liked it".to_string(),
        },
        Review {
            author: "Alina".to_string(),
            date: STUB_REVIEWS_BASE_MS,
            rating: 1,
            text: "Not tasty".to_string(),
        },
        Review {
            author: "Ivan".to_string(),
            date: STUB_REVIEWS_BASE_MS + 2 * HOUR_MS,
            rating: 3,
            text: "Something average".to_string(),
        },
    ]
}
