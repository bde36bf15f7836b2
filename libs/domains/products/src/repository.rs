use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::Product;

/// Repository trait for Product persistence
///
/// Single-key point operations on a table keyed by `productID`, plus an
/// unfiltered scan. Writes are unconditional.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Point-read by identifier
    async fn get(&self, product_id: &str) -> ProductResult<Option<Product>>;

    /// Insert or fully replace the item with the same identifier
    async fn put(&self, product: &Product) -> ProductResult<()>;

    /// Remove by identifier; removing a missing item is not an error
    async fn delete(&self, product_id: &str) -> ProductResult<()>;

    /// Every stored item, in store-defined order
    async fn scan(&self) -> ProductResult<Vec<Product>>;

    /// Probe the backing store for readiness checks
    async fn health_check(&self) -> ProductResult<()>;
}
