//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{HttpError, ProductResult};
use crate::models::Product;
use crate::repository::ProductRepository;
use crate::schema::parse_product_body;

/// Product service providing the five product operations
///
/// Create and update validate the raw body; update and delete confirm
/// existence with a read before writing. The check and the write are not
/// atomic.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Product lookup: the stored item, or a 404 `HttpError`
    #[instrument(skip(self))]
    pub async fn fetch_product(&self, product_id: &str) -> ProductResult<Product> {
        self.repository
            .get(product_id)
            .await?
            .ok_or_else(|| HttpError::not_found().into())
    }

    /// Full-table scan
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.scan().await
    }

    /// Validate the body and store it under a freshly minted identifier
    #[instrument(skip(self, body))]
    pub async fn create_product(&self, body: &[u8]) -> ProductResult<Product> {
        let input = parse_product_body(body)?;
        let product = input.into_product(Uuid::new_v4().to_string());

        self.repository.put(&product).await?;
        tracing::info!(product_id = %product.product_id, "Product created");
        Ok(product)
    }

    /// Replace the stored item with the validated body.
    ///
    /// Existence is checked before the body is parsed, so an unknown
    /// identifier yields 404 even for an invalid body.
    #[instrument(skip(self, body))]
    pub async fn update_product(&self, product_id: &str, body: &[u8]) -> ProductResult<Product> {
        self.fetch_product(product_id).await?;

        let input = parse_product_body(body)?;
        let product = input.into_product(product_id.to_string());

        self.repository.put(&product).await?;
        Ok(product)
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, product_id: &str) -> ProductResult<()> {
        self.fetch_product(product_id).await?;
        self.repository.delete(product_id).await
    }
}
