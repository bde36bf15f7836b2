//! In-memory implementation of the ProductRepository trait

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ProductResult;
use crate::models::Product;
use crate::repository::ProductRepository;

/// Process-local product store for local runs and tests
#[derive(Clone, Debug, Default)]
pub struct InMemoryProductRepository {
    items: Arc<RwLock<HashMap<String, Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn get(&self, product_id: &str) -> ProductResult<Option<Product>> {
        Ok(self.items.read().await.get(product_id).cloned())
    }

    async fn put(&self, product: &Product) -> ProductResult<()> {
        self.items
            .write()
            .await
            .insert(product.product_id.clone(), product.clone());
        Ok(())
    }

    async fn delete(&self, product_id: &str) -> ProductResult<()> {
        self.items.write().await.remove(product_id);
        Ok(())
    }

    async fn scan(&self) -> ProductResult<Vec<Product>> {
        Ok(self.items.read().await.values().cloned().collect())
    }

    async fn health_check(&self) -> ProductResult<()> {
        Ok(())
    }
}
