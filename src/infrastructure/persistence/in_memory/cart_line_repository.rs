//! # In-Memory Cart Line Repository
//!
//! In-memory implementation of [`CartLineRepository`] for tests and local
//! runs without a database.

use crate::domain::entities::CartLine;
use crate::domain::value_objects::CartId;
use crate::infrastructure::persistence::traits::{CartLineRepository, RepositoryResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory implementation of [`CartLineRepository`].
///
/// Uses a thread-safe `HashMap` keyed by cart id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCartLineRepository {
    storage: Arc<RwLock<HashMap<CartId, Vec<CartLine>>>>,
}

impl InMemoryCartLineRepository {
    /// Creates a new empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the lines of a cart.
    pub async fn insert_cart(&self, cart_id: CartId, lines: Vec<CartLine>) {
        let mut storage = self.storage.write().await;
        storage.insert(cart_id, lines);
    }
}

#[async_trait]
impl CartLineRepository for InMemoryCartLineRepository {
    async fn find_by_cart(&self, cart_id: &CartId) -> RepositoryResult<Vec<CartLine>> {
        let storage = self.storage.read().await;
        Ok(storage.get(cart_id).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{ProductId, ShopId};

    fn line(shop: &str, quantity: u32) -> CartLine {
        CartLine::new(ProductId::new("p"), ShopId::new(shop), quantity)
    }

    #[tokio::test]
    async fn unknown_cart_has_no_lines() {
        let repo = InMemoryCartLineRepository::new();
        let lines = repo.find_by_cart(&CartId::new_v4()).await.unwrap();
        assert!(lines.is_empty());
    }

    #[tokio::test]
    async fn insert_and_find() {
        let repo = InMemoryCartLineRepository::new();
        let cart = CartId::new_v4();
        repo.insert_cart(cart, vec![line("a", 1), line("b", 2)]).await;

        let lines = repo.find_by_cart(&cart).await.unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines.iter().map(|l| l.quantity).sum::<u32>(), 3);
    }

    #[tokio::test]
    async fn insert_replaces_previous_lines() {
        let repo = InMemoryCartLineRepository::new();
        let cart = CartId::new_v4();
        repo.insert_cart(cart, vec![line("a", 1), line("a", 3)]).await;
        repo.insert_cart(cart, vec![line("b", 5)]).await;

        let lines = repo.find_by_cart(&cart).await.unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 5);
    }
}
