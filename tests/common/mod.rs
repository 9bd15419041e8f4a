//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use std::sync::Arc;
use std::time::Duration;

use sbdelivery::config::EngineConfig;
use sbdelivery::mvi::FanOut;
use async_trait::async_trait;
use sbdelivery::repository::{
    CartItem, CartStore, Dish, DishesStore, MemoryBackend, Page, RepoError,
};
use sbdelivery::root::{Collaborators, RootState};
use sbdelivery::Session;

pub const TIMEOUT: Duration = Duration::from_secs(3);

pub fn catalog() -> Vec<Dish> {
    vec![
        Dish::new("1", "Пицца Маргарита", 590),
        Dish::new("2", "Пицца с ветчиной", 650),
        Dish::new("3", "Паста", 420),
        Dish::new("42", "Pizza", 500),
    ]
}

/// Backend whose local copy already holds the catalog.
pub fn seeded_backend() -> Arc<MemoryBackend> {
    Arc::new(MemoryBackend::new(catalog()).with_local(catalog()))
}

pub fn start_session(backend: Arc<MemoryBackend>) -> Session {
    Session::start(
        &EngineConfig::default(),
        Collaborators::shared(backend),
        None,
    )
}

/// Wait until a published state satisfies `ready`.
pub async fn wait_for(session: &Session, ready: impl Fn(&RootState) -> bool) -> RootState {
    let mut states = session.subscribe();
    tokio::time::timeout(TIMEOUT, async {
        loop {
            let state = states.borrow_and_update().clone();
            if ready(&state) {
                return state;
            }
            states.changed().await.expect("session stopped");
        }
    })
    .await
    .expect("timed out waiting for state")
}

/// Receive values until one matches, or time out.
pub async fn recv_matching<T: Send + std::fmt::Debug>(
    channel: &FanOut<T>,
    matches: impl Fn(&T) -> bool,
) -> T {
    tokio::time::timeout(TIMEOUT, async {
        loop {
            let value = channel.recv().await.expect("channel closed");
            if matches(&value) {
                return value;
            }
        }
    })
    .await
    .expect("timed out waiting for value")
}

/// Wraps a [`MemoryBackend`] and delays local dish lookups and cart totals,
/// the two calls a dish visit waits on before it commits.
pub struct SlowBackend {
    pub inner: Arc<MemoryBackend>,
    pub delay: Duration,
}

impl SlowBackend {
    pub fn new(inner: Arc<MemoryBackend>, delay: Duration) -> Arc<Self> {
        Arc::new(Self { inner, delay })
    }
}

#[async_trait]
impl DishesStore for SlowBackend {
    async fn fetch_page(&self, offset: usize, limit: usize) -> Result<Page<Dish>, RepoError> {
        self.inner.fetch_page(offset, limit).await
    }

    async fn search_local(&self, query: &str) -> Result<Vec<Dish>, RepoError> {
        self.inner.search_local(query).await
    }

    async fn all_local(&self) -> Result<Vec<Dish>, RepoError> {
        self.inner.all_local().await
    }

    async fn find_local(&self, id: &str) -> Result<Option<Dish>, RepoError> {
        tokio::time::sleep(self.delay).await;
        self.inner.find_local(id).await
    }

    async fn replace_all(&self, items: Vec<Dish>) -> Result<(), RepoError> {
        self.inner.replace_all(items).await
    }
}

#[async_trait]
impl CartStore for SlowBackend {
    async fn item_count(&self, dish_id: &str) -> Result<Option<u32>, RepoError> {
        self.inner.item_count(dish_id).await
    }

    async fn set_count(&self, dish_id: &str, count: u32) -> Result<(), RepoError> {
        self.inner.set_count(dish_id, count).await
    }

    async fn add_item(&self, dish_id: &str, count: u32) -> Result<(), RepoError> {
        self.inner.add_item(dish_id, count).await
    }

    async fn decrement(&self, dish_id: &str) -> Result<(), RepoError> {
        self.inner.decrement(dish_id).await
    }

    async fn remove(&self, dish_id: &str) -> Result<(), RepoError> {
        self.inner.remove(dish_id).await
    }

    async fn total_count(&self) -> Result<u32, RepoError> {
        tokio::time::sleep(self.delay).await;
        self.inner.total_count().await
    }

    async fn all_items(&self) -> Result<Vec<CartItem>, RepoError> {
        self.inner.all_items().await
    }

    async fn clear(&self) -> Result<(), RepoError> {
        self.inner.clear().await
    }
}

/// Session whose dish lookups and cart totals answer after `delay`.
pub fn start_slow_session(delay: Duration) -> (Session, Arc<MemoryBackend>) {
    let inner = Arc::new(
        MemoryBackend::new(catalog())
            .with_local(catalog())
            .with_latency(delay),
    );
    let slow = SlowBackend::new(inner.clone(), delay);
    let collaborators = Collaborators {
        dishes: slow.clone(),
        cart: slow,
        reviews: inner.clone(),
    };
    let session = Session::start(&EngineConfig::default(), collaborators, None);
    (session, inner)
}
