//! Products Domain
//!
//! CRUD over a single key-value table of products keyed by `productID`.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, one store round trip each
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Lookup, existence checks, identifier minting
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + DynamoDB and in-memory implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Product, validated input, payload schema
//! └─────────────┘
//! ```
//!
//! Failures are `ProductError` values. Validation, malformed-body and
//! `HttpError` failures are mapped to responses by [`error::map_error`];
//! anything else falls through to the generic 500 envelope.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{DynamoProductRepository, ProductService, handlers};
//!
//! # async fn example() {
//! let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
//! let client = aws_sdk_dynamodb::Client::new(&config);
//!
//! let repository = DynamoProductRepository::new(client);
//! let service = ProductService::new(repository);
//!
//! // Create Axum router
//! let router = handlers::router(service);
//! # }
//! ```

pub mod dynamodb;
pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod repository;
pub mod response;
pub mod schema;
pub mod service;

// Re-export commonly used types
pub use dynamodb::DynamoProductRepository;
pub use error::{HttpError, ProductError, ProductResult, map_error};
pub use handlers::ApiDoc;
pub use memory::InMemoryProductRepository;
pub use models::{Product, ProductInput};
pub use repository::ProductRepository;
pub use response::ApiResponse;
pub use service::ProductService;
