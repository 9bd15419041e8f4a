//! Routes effects to feature handlers and the fan-out channels.

use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::Instrument;

use crate::config::EngineConfig;
use crate::mvi::{fan_out, Commit, EffectHandler, FanOut, FanOutSender};
use crate::repository::{CartStore, DishesStore, ReviewService};
use crate::screens::cart::CartEffectHandler;
use crate::screens::dish::DishEffectHandler;
use crate::screens::dishes::DishesEffectHandler;

use super::effect::{Eff, HostCommand, Notification};
use super::intent::Msg;

/// Repository collaborators shared by every handler.
#[derive(Clone)]
pub struct Collaborators {
    pub dishes: Arc<dyn DishesStore>,
    pub cart: Arc<dyn CartStore>,
    pub reviews: Arc<dyn ReviewService>,
}

impl Collaborators {
    /// Use one backend for all three roles.
    pub fn shared<B>(backend: Arc<B>) -> Self
    where
        B: DishesStore + CartStore + ReviewService + 'static,
    {
        Self {
            dishes: backend.clone(),
            cart: backend.clone(),
            reviews: backend,
        }
    }
}

pub struct EffDispatcher {
    dishes: DishesEffectHandler,
    dish: DishEffectHandler,
    cart: CartEffectHandler,
    cart_store: Arc<dyn CartStore>,
    notifier: FanOutSender<Notification>,
    host: FanOutSender<HostCommand>,
}

impl EffDispatcher {
    /// Build the dispatcher with its notification and host-command channels.
    ///
    /// The dispatcher keeps only the sending ends. Once every returned
    /// receiver is dropped, emits are discarded; while a receiver is held
    /// but not drained, emitters wait for buffer space.
    pub fn new(
        config: &EngineConfig,
        collaborators: Collaborators,
    ) -> (Self, FanOut<Notification>, FanOut<HostCommand>) {
        let (notifier, notifications) = fan_out(config.notification_buffer);
        let (host, host_commands) = fan_out(config.command_buffer);

        let dispatcher = Self {
            dishes: DishesEffectHandler::new(
                collaborators.dishes.clone(),
                collaborators.cart.clone(),
                notifier.clone(),
                config.dishes_page_size,
            ),
            dish: DishEffectHandler::new(
                collaborators.dishes,
                collaborators.cart.clone(),
                collaborators.reviews,
                notifier.clone(),
                config.reviews_page_size,
            ),
            cart: CartEffectHandler::new(collaborators.cart.clone(), notifier.clone()),
            cart_store: collaborators.cart,
            notifier,
            host,
        };
        (dispatcher, notifications, host_commands)
    }

    async fn dispatch(&self, effect: Eff, commit: Commit<Msg>) {
        match effect {
            Eff::Dishes(effect) => self.dishes.handle(effect, commit).await,
            Eff::Dish(effect) => self.dish.handle(effect, commit).await,
            Eff::Cart(effect) => self.cart.handle(effect, commit).await,

            Eff::SyncCounter => match self.cart_store.total_count().await {
                Ok(total) => {
                    commit.send(Msg::UpdateCartCount(total));
                }
                Err(e) => {
                    tracing::warn!("Cart counter sync failed: {}", e);
                    self.notifier.send(Notification::error(e.to_string())).await;
                }
            },

            Eff::Notification(notification) => {
                if !self.notifier.send(notification).await {
                    tracing::debug!("No notification consumers left");
                }
            }

            Eff::Navigate(command) => {
                commit.send(Msg::Navigate(command));
            }

            Eff::Host(command) => {
                tracing::info!("Host command: {:?}", command);
                if !self.host.send(command).await {
                    tracing::debug!("No host command consumers left");
                }
            }
        }
    }
}

#[async_trait]
impl EffectHandler<Eff, Msg> for EffDispatcher {
    fn bind_scope(&self, effect: &Eff) -> Option<CancellationToken> {
        match effect {
            Eff::Dish(effect) => self.dish.bind_scope(effect),
            _ => None,
        }
    }

    async fn handle(&self, effect: Eff, commit: Commit<Msg>) {
        let span = tracing::debug_span!("effect", kind = effect.kind());
        async {
            tracing::debug!("Handling {:?}", effect);
            self.dispatch(effect, commit).await;
        }
        .instrument(span)
        .await
    }
}
