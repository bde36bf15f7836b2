//! Products API routes

use axum::Router;
use domain_products::{ProductService, handlers};

use crate::state::{AppState, ProductStore};

/// Create products router over the configured store
pub fn router(state: &AppState) -> Router {
    match &state.store {
        ProductStore::DynamoDb(repository) => handlers::router(ProductService::new(repository.clone())),
        ProductStore::Memory(repository) => handlers::router(ProductService::new(repository.clone())),
    }
}
