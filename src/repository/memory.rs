//! In-memory collaborators for the demo binary and tests.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use parking_lot::RwLock;

use super::{CartItem, CartStore, Dish, DishesStore, Page, RepoError, ReviewService, Review};

/// One struct backing all three collaborator traits.
///
/// `remote` plays the role of the network catalog; `local` is the
/// persisted copy that `replace_all` overwrites.
pub struct MemoryBackend {
    remote: Vec<Dish>,
    page_failure_at: Option<usize>,
    latency: Duration,
    local: RwLock<Vec<Dish>>,
    cart: RwLock<BTreeMap<String, u32>>,
    reviews: RwLock<HashMap<String, Vec<Review>>>,
    reviews_offline: AtomicBool,
}

impl MemoryBackend {
    pub fn new(catalog: Vec<Dish>) -> Self {
        Self {
            remote: catalog,
            page_failure_at: None,
            latency: Duration::ZERO,
            local: RwLock::new(Vec::new()),
            cart: RwLock::new(BTreeMap::new()),
            reviews: RwLock::new(HashMap::new()),
            reviews_offline: AtomicBool::new(false),
        }
    }

    /// Simulated round-trip time applied to every remote call.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Remote pages starting at or after `offset` answer with HTTP 503.
    pub fn with_page_failure_at(mut self, offset: usize) -> Self {
        self.page_failure_at = Some(offset);
        self
    }

    pub fn with_local(self, dishes: Vec<Dish>) -> Self {
        *self.local.write() = dishes;
        self
    }

    pub fn with_reviews(self, dish_id: &str, reviews: Vec<Review>) -> Self {
        self.reviews.write().insert(dish_id.to_string(), reviews);
        self
    }

    /// Toggle connectivity of the reviews API.
    pub fn set_reviews_offline(&self, offline: bool) {
        self.reviews_offline.store(offline, Ordering::SeqCst);
    }

    async fn remote_round_trip(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    fn lookup(&self, dish_id: &str) -> Option<Dish> {
        let local = self.local.read();
        local
            .iter()
            .chain(self.remote.iter())
            .find(|dish| dish.id == dish_id)
            .cloned()
    }
}

#[async_trait]
impl DishesStore for MemoryBackend {
    async fn fetch_page(&self, offset: usize, limit: usize) -> Result<Page<Dish>, RepoError> {
        self.remote_round_trip().await;
        if matches!(self.page_failure_at, Some(failing) if offset >= failing) {
            return Err(RepoError::Http {
                status: 503,
                message: "catalog unavailable".to_string(),
            });
        }
        let end = (offset + limit).min(self.remote.len());
        let items = self.remote.get(offset..end).unwrap_or_default().to_vec();
        Ok(Page {
            items,
            more_available: end < self.remote.len(),
        })
    }

    async fn search_local(&self, query: &str) -> Result<Vec<Dish>, RepoError> {
        let needle = query.trim().to_lowercase();
        Ok(self
            .local
            .read()
            .iter()
            .filter(|dish| dish.title.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn all_local(&self) -> Result<Vec<Dish>, RepoError> {
        Ok(self.local.read().clone())
    }

    async fn find_local(&self, id: &str) -> Result<Option<Dish>, RepoError> {
        Ok(self.local.read().iter().find(|dish| dish.id == id).cloned())
    }

    async fn replace_all(&self, items: Vec<Dish>) -> Result<(), RepoError> {
        *self.local.write() = items;
        Ok(())
    }
}

#[async_trait]
impl CartStore for MemoryBackend {
    async fn item_count(&self, dish_id: &str) -> Result<Option<u32>, RepoError> {
        Ok(self.cart.read().get(dish_id).copied())
    }

    async fn set_count(&self, dish_id: &str, count: u32) -> Result<(), RepoError> {
        self.cart.write().insert(dish_id.to_string(), count);
        Ok(())
    }

    async fn add_item(&self, dish_id: &str, count: u32) -> Result<(), RepoError> {
        self.cart.write().insert(dish_id.to_string(), count);
        Ok(())
    }

    async fn decrement(&self, dish_id: &str) -> Result<(), RepoError> {
        if let Some(count) = self.cart.write().get_mut(dish_id) {
            *count = count.saturating_sub(1);
        }
        Ok(())
    }

    async fn remove(&self, dish_id: &str) -> Result<(), RepoError> {
        self.cart.write().remove(dish_id);
        Ok(())
    }

    async fn total_count(&self) -> Result<u32, RepoError> {
        Ok(self.cart.read().values().sum())
    }

    async fn all_items(&self) -> Result<Vec<CartItem>, RepoError> {
        let lines: Vec<(String, u32)> = self
            .cart
            .read()
            .iter()
            .map(|(id, count)| (id.clone(), *count))
            .collect();

        Ok(lines
            .into_iter()
            .map(|(id, count)| match self.lookup(&id) {
                Some(dish) => CartItem {
                    id,
                    title: dish.title,
                    image: dish.image,
                    price: dish.price,
                    count,
                },
                None => CartItem {
                    title: id.clone(),
                    id,
                    image: String::new(),
                    price: 0,
                    count,
                },
            })
            .collect())
    }

    async fn clear(&self) -> Result<(), RepoError> {
        self.cart.write().clear();
        Ok(())
    }
}

#[async_trait]
impl ReviewService for MemoryBackend {
    async fn fetch_reviews(
        &self,
        dish_id: &str,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<Review>, RepoError> {
        self.remote_round_trip().await;
        if self.reviews_offline.load(Ordering::SeqCst) {
            return Err(RepoError::Network("reviews API unreachable".to_string()));
        }
        let reviews = self.reviews.read();
        let all = reviews.get(dish_id).map(Vec::as_slice).unwrap_or_default();
        Ok(all.iter().skip(offset).take(limit).cloned().collect())
    }

    async fn submit_review(
        &self,
        dish_id: &str,
        rating: u8,
        text: &str,
    ) -> Result<Review, RepoError> {
        self.remote_round_trip().await;
        if self.reviews_offline.load(Ordering::SeqCst) {
            return Err(RepoError::Network("reviews API unreachable".to_string()));
        }
        let review = Review {
            author: "Guest".to_string(),
            date: now_millis(),
            rating,
            text: text.to_string(),
        };
        self.reviews
            .write()
            .entry(dish_id.to_string())
            .or_default()
            .push(review.clone());
        Ok(review)
    }
}

pub(crate) fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(n: usize) -> Vec<Dish> {
        (0..n)
            .map(|i| Dish::new(format!("d{i}"), format!("Dish {i}"), 100 + i as u32))
            .collect()
    }

    #[tokio::test]
    async fn add_to_cart_rejects_count_overflow() {
        let backend = MemoryBackend::new(catalog(1));
        backend.set_count("X", u32::MAX).await.unwrap();

        let err = backend.add_to_cart("X", 1).await.unwrap_err();
        assert!(matches!(err, RepoError::Storage(_)));
        assert_eq!(backend.item_count("X").await.unwrap(), Some(u32::MAX));
    }

    #[tokio::test]
    async fn add_to_cart_twice_counts_up() {
        let backend = MemoryBackend::new(catalog(1));
        assert_eq!(backend.item_count("X").await.unwrap(), None);

        backend.add_to_cart("X", 1).await.unwrap();
        assert_eq!(backend.item_count("X").await.unwrap(), Some(1));

        backend.add_to_cart("X", 1).await.unwrap();
        assert_eq!(backend.item_count("X").await.unwrap(), Some(2));
    }

    #[tokio::test]
    async fn decrement_or_remove_on_single_item_removes_it() {
        let backend = MemoryBackend::new(catalog(1));
        backend.add_to_cart("X", 1).await.unwrap();

        backend.decrement_or_remove("X").await.unwrap();
        assert_eq!(backend.item_count("X").await.unwrap(), None);
        assert!(backend.all_items().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn decrement_or_remove_on_many_decrements_by_one() {
        let backend = MemoryBackend::new(catalog(1));
        backend.add_to_cart("X", 3).await.unwrap();

        backend.decrement_or_remove("X").await.unwrap();
        assert_eq!(backend.item_count("X").await.unwrap(), Some(2));
    }

    #[tokio::test]
    async fn decrement_or_remove_on_absent_item_is_noop() {
        let backend = MemoryBackend::new(catalog(1));
        backend.decrement_or_remove("missing").await.unwrap();
        assert_eq!(backend.total_count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn all_items_joins_dish_details() {
        let backend = MemoryBackend::new(catalog(2));
        backend.add_to_cart("d1", 2).await.unwrap();

        let items = backend.all_items().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Dish 1");
        assert_eq!(items[0].price, 101);
        assert_eq!(items[0].count, 2);
        assert_eq!(backend.total_count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn fetch_page_reports_more_available() {
        let backend = MemoryBackend::new(catalog(15));

        let first = backend.fetch_page(0, 10).await.unwrap();
        assert_eq!(first.items.len(), 10);
        assert!(first.more_available);

        let second = backend.fetch_page(10, 10).await.unwrap();
        assert_eq!(second.items.len(), 5);
        assert!(!second.more_available);
    }

    #[tokio::test]
    async fn fetch_page_fails_past_failure_offset() {
        let backend = MemoryBackend::new(catalog(30)).with_page_failure_at(10);
        assert!(backend.fetch_page(0, 10).await.is_ok());
        assert!(matches!(
            backend.fetch_page(10, 10).await,
            Err(RepoError::Http { status: 503, .. })
        ));
    }

    #[tokio::test]
    async fn offline_reviews_return_network_error() {
        let backend = MemoryBackend::new(catalog(1));
        backend.set_reviews_offline(true);
        let err = backend.fetch_reviews("d0", 0, 10).await.unwrap_err();
        assert!(err.is_transient());
    }
}
