//! Application state management

use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::config::Region;
use domain_products::{
    DynamoProductRepository, InMemoryProductRepository, ProductRepository, ProductResult,
};
use tracing::info;

use crate::config::{Config, StoreBackend};

/// Product store selected at startup
#[derive(Clone, Debug)]
pub enum ProductStore {
    DynamoDb(DynamoProductRepository),
    Memory(InMemoryProductRepository),
}

impl ProductStore {
    /// Build the configured store. The DynamoDB client takes credentials
    /// from the standard AWS provider chain.
    pub async fn from_config(config: &Config) -> Self {
        match config.store {
            StoreBackend::DynamoDb => {
                let mut loader = aws_config::defaults(BehaviorVersion::latest());
                if let Some(region) = &config.dynamodb.region {
                    loader = loader.region(Region::new(region.clone()));
                }
                if let Some(endpoint) = &config.dynamodb.endpoint_url {
                    loader = loader.endpoint_url(endpoint);
                }
                let sdk_config = loader.load().await;
                let client = aws_sdk_dynamodb::Client::new(&sdk_config);

                let repository = match &config.dynamodb.table_name {
                    Some(table) => DynamoProductRepository::with_table(client, table),
                    None => DynamoProductRepository::new(client),
                };
                info!(
                    table = repository.table_name(),
                    endpoint = ?config.dynamodb.endpoint_url,
                    "Using DynamoDB product store"
                );
                ProductStore::DynamoDb(repository)
            }
            StoreBackend::Memory => {
                info!("Using in-memory product store");
                ProductStore::Memory(InMemoryProductRepository::new())
            }
        }
    }

    /// Name reported by the readiness endpoint
    pub fn name(&self) -> &'static str {
        match self {
            ProductStore::DynamoDb(_) => "dynamodb",
            ProductStore::Memory(_) => "memory",
        }
    }

    pub async fn health_check(&self) -> ProductResult<()> {
        match self {
            ProductStore::DynamoDb(repository) => repository.health_check().await,
            ProductStore::Memory(repository) => repository.health_check().await,
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub store: ProductStore,
}
