//! Collaborators consumed by the effect handlers.
//!
//! The engine only sees these traits; network and database access live
//! behind them. Implementations must be safe for concurrent use from many
//! handlers at once; the engine takes no locks over them.

mod error;
mod memory;
mod types;

use async_trait::async_trait;

pub use error::RepoError;
pub use memory::MemoryBackend;
pub(crate) use memory::now_millis;
pub use types::{CartItem, Dish, Page, Review};

/// Remote dish catalog plus its local (persisted, searchable) copy.
#[async_trait]
pub trait DishesStore: Send + Sync {
    /// Fetch one page of the remote catalog.
    async fn fetch_page(&self, offset: usize, limit: usize) -> Result<Page<Dish>, RepoError>;

    /// Local dishes whose title contains `query` (case-insensitive).
    async fn search_local(&self, query: &str) -> Result<Vec<Dish>, RepoError>;

    async fn all_local(&self) -> Result<Vec<Dish>, RepoError>;

    async fn find_local(&self, id: &str) -> Result<Option<Dish>, RepoError>;

    /// Replace every local record with `items`.
    async fn replace_all(&self, items: Vec<Dish>) -> Result<(), RepoError>;
}

/// Persistent shopping cart keyed by dish id.
#[async_trait]
pub trait CartStore: Send + Sync {
    async fn item_count(&self, dish_id: &str) -> Result<Option<u32>, RepoError>;

    async fn set_count(&self, dish_id: &str, count: u32) -> Result<(), RepoError>;

    async fn add_item(&self, dish_id: &str, count: u32) -> Result<(), RepoError>;

    async fn decrement(&self, dish_id: &str) -> Result<(), RepoError>;

    async fn remove(&self, dish_id: &str) -> Result<(), RepoError>;

    /// Sum of item counts across the cart.
    async fn total_count(&self) -> Result<u32, RepoError>;

    async fn all_items(&self) -> Result<Vec<CartItem>, RepoError>;

    async fn clear(&self) -> Result<(), RepoError>;

    /// Add `count` units of a dish: insert it, or grow the existing entry.
    async fn add_to_cart(&self, dish_id: &str, count: u32) -> Result<(), RepoError> {
        match self.item_count(dish_id).await? {
            Some(existing) if existing > 0 => {
                let total = existing.checked_add(count).ok_or_else(|| {
                    RepoError::Storage(format!("cart count overflow for {dish_id}"))
                })?;
                self.set_count(dish_id, total).await
            }
            _ => self.add_item(dish_id, count).await,
        }
    }

    /// Remove one unit of a dish; the last unit removes the entry.
    async fn decrement_or_remove(&self, dish_id: &str) -> Result<(), RepoError> {
        match self.item_count(dish_id).await?.unwrap_or(0) {
            0 => Ok(()),
            1 => self.remove(dish_id).await,
            _ => self.decrement(dish_id).await,
        }
    }
}

/// Remote reviews API.
#[async_trait]
pub trait ReviewService: Send + Sync {
    async fn fetch_reviews(
        &self,
        dish_id: &str,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<Review>, RepoError>;

    async fn submit_review(
        &self,
        dish_id: &str,
        rating: u8,
        text: &str,
    ) -> Result<Review, RepoError>;
}
