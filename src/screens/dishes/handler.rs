//! Executes dishes-screen effects against the catalog and cart stores.

use std::sync::Arc;

use async_trait::async_trait;

use crate::mvi::{Commit, EffectHandler, FanOutSender};
use crate::repository::{CartStore, Dish, DishesStore, RepoError};
use crate::root::{Msg, Notification};

use super::effect::DishesEff;
use super::intent::DishesMsg;
use super::suggestions::find_suggestions;

pub struct DishesEffectHandler {
    dishes: Arc<dyn DishesStore>,
    cart: Arc<dyn CartStore>,
    notifier: FanOutSender<Notification>,
    page_size: usize,
}

impl DishesEffectHandler {
    pub fn new(
        dishes: Arc<dyn DishesStore>,
        cart: Arc<dyn CartStore>,
        notifier: FanOutSender<Notification>,
        page_size: usize,
    ) -> Self {
        Self {
            dishes,
            cart,
            notifier,
            page_size: page_size.max(1),
        }
    }

    async fn run(&self, effect: DishesEff, commit: &Commit<Msg>) -> Result<(), RepoError> {
        match effect {
            DishesEff::SyncDishes => self.sync_dishes(commit).await,

            DishesEff::SearchDishes(query) => {
                let dishes = if query.trim().is_empty() {
                    self.dishes.all_local().await?
                } else {
                    self.dishes.search_local(query.trim()).await?
                };
                commit.send(DishesMsg::ShowDishes(dishes).into());
                Ok(())
            }

            DishesEff::FindAllDishes => {
                let dishes = self.dishes.all_local().await?;
                commit.send(DishesMsg::ShowDishes(dishes).into());
                Ok(())
            }

            DishesEff::FindSuggestions(query) => {
                let candidates = self.dishes.search_local(query.trim()).await?;
                let suggestions =
                    find_suggestions(&query, candidates.iter().map(|dish| dish.title.as_str()));
                commit.send(DishesMsg::ShowSuggestions(suggestions).into());
                Ok(())
            }

            DishesEff::AddToCart { id, title } => {
                self.cart.add_to_cart(&id, 1).await?;
                let total = self.cart.total_count().await?;
                commit.send(Msg::UpdateCartCount(total));
                self.notifier
                    .send(Notification::Action {
                        message: format!("{title} added to cart"),
                        label: "Undo".to_string(),
                        action: DishesMsg::RemoveFromCart { id, title }.into(),
                    })
                    .await;
                Ok(())
            }

            DishesEff::RemoveFromCart { id, title } => {
                self.cart.decrement_or_remove(&id).await?;
                let total = self.cart.total_count().await?;
                commit.send(Msg::UpdateCartCount(total));
                self.notifier
                    .send(Notification::text(format!("{title} removed from cart")))
                    .await;
                Ok(())
            }
        }
    }

    /// Page through the remote catalog until it runs out or fails, then
    /// replace the local copy with whatever arrived.
    async fn sync_dishes(&self, commit: &Commit<Msg>) -> Result<(), RepoError> {
        let mut fetched: Vec<Dish> = Vec::new();
        let mut pages = 0usize;
        let mut offset = 0usize;

        loop {
            match self.dishes.fetch_page(offset, self.page_size).await {
                Ok(page) => {
                    pages += 1;
                    fetched.extend(page.items);
                    if !page.more_available {
                        break;
                    }
                    offset += self.page_size;
                }
                Err(e) => {
                    tracing::debug!("Catalog paging stopped at offset {}: {}", offset, e);
                    break;
                }
            }
        }

        if pages > 0 {
            tracing::info!("Synced {} dishes in {} pages", fetched.len(), pages);
            self.dishes.replace_all(fetched).await?;
        }

        let local = self.dishes.all_local().await?;
        if pages == 0 && local.is_empty() {
            commit.send(DishesMsg::ShowError.into());
        } else {
            commit.send(DishesMsg::ShowDishes(local).into());
        }
        Ok(())
    }
}

#[async_trait]
impl EffectHandler<DishesEff, Msg> for DishesEffectHandler {
    async fn handle(&self, effect: DishesEff, commit: Commit<Msg>) {
        if let Err(e) = self.run(effect, &commit).await {
            tracing::warn!("Dishes effect failed: {}", e);
            self.notifier.send(Notification::error(e.to_string())).await;
        }
    }
}
