//! Executes cart-screen effects.

use std::sync::Arc;

use async_trait::async_trait;

use crate::mvi::{Commit, EffectHandler, FanOutSender};
use crate::repository::{CartStore, RepoError};
use crate::root::{Msg, Notification};

use super::effect::CartEff;
use super::intent::CartMsg;

pub struct CartEffectHandler {
    cart: Arc<dyn CartStore>,
    notifier: FanOutSender<Notification>,
}

impl CartEffectHandler {
    pub fn new(cart: Arc<dyn CartStore>, notifier: FanOutSender<Notification>) -> Self {
        Self { cart, notifier }
    }

    /// Re-read the whole cart and commit it along with the item total.
    async fn update_cart(&self, commit: &Commit<Msg>) -> Result<(), RepoError> {
        let items = self.cart.all_items().await?;
        let total = items.iter().map(|item| item.count).sum();
        commit.send(CartMsg::ShowCart(items).into());
        commit.send(Msg::UpdateCartCount(total));
        Ok(())
    }

    async fn run(&self, effect: CartEff, commit: &Commit<Msg>) -> Result<(), RepoError> {
        match effect {
            CartEff::LoadCart => self.update_cart(commit).await,

            CartEff::IncrementItem(id) => {
                self.cart.add_to_cart(&id, 1).await?;
                self.update_cart(commit).await
            }

            CartEff::DecrementItem(id) => {
                self.cart.decrement_or_remove(&id).await?;
                self.update_cart(commit).await
            }

            CartEff::RemoveItem { id, title } => {
                self.cart.remove(&id).await?;
                self.update_cart(commit).await?;
                self.notifier
                    .send(Notification::text(format!("{title} removed from cart")))
                    .await;
                Ok(())
            }

            CartEff::SendOrder(items) => {
                tracing::info!("Placing order with {} lines", items.len());
                self.cart.clear().await?;
                self.update_cart(commit).await?;
                self.notifier.send(Notification::text("Order placed")).await;
                Ok(())
            }
        }
    }
}

#[async_trait]
impl EffectHandler<CartEff, Msg> for CartEffectHandler {
    async fn handle(&self, effect: CartEff, commit: Commit<Msg>) {
        if let Err(e) = self.run(effect, &commit).await {
            tracing::warn!("Cart effect failed: {}", e);
            self.notifier.send(Notification::error(e.to_string())).await;
        }
    }
}
