//! DynamoDB implementation of the ProductRepository trait

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::AttributeValue;
use observability::ProductMetrics;
use std::collections::HashMap;
use tracing::instrument;

use crate::error::ProductResult;
use crate::models::Product;
use crate::repository::ProductRepository;

/// Default table name
pub const TABLE_NAME: &str = "ProductsTable";

/// Partition key attribute
pub const PARTITION_KEY: &str = "productID";

/// DynamoDB-backed product repository
#[derive(Clone, Debug)]
pub struct DynamoProductRepository {
    client: Client,
    table_name: String,
}

impl DynamoProductRepository {
    /// Repository over the default `ProductsTable`
    pub fn new(client: Client) -> Self {
        Self::with_table(client, TABLE_NAME)
    }

    pub fn with_table(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    fn key(product_id: &str) -> AttributeValue {
        AttributeValue::S(product_id.to_string())
    }
}

#[async_trait]
impl ProductRepository for DynamoProductRepository {
    #[instrument(skip(self), fields(table = %self.table_name))]
    async fn get(&self, product_id: &str) -> ProductResult<Option<Product>> {
        let _timer = ProductMetrics::start_store_timer("get_item");

        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(PARTITION_KEY, Self::key(product_id))
            .send()
            .await
            .map_err(aws_sdk_dynamodb::Error::from)?;

        match output.item {
            Some(item) => Ok(Some(serde_dynamo::from_item(item)?)),
            None => Ok(None),
        }
    }

    #[instrument(skip(self, product), fields(table = %self.table_name, product_id = %product.product_id))]
    async fn put(&self, product: &Product) -> ProductResult<()> {
        let _timer = ProductMetrics::start_store_timer("put_item");

        let item: HashMap<String, AttributeValue> = serde_dynamo::to_item(product)?;
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(aws_sdk_dynamodb::Error::from)?;

        Ok(())
    }

    #[instrument(skip(self), fields(table = %self.table_name))]
    async fn delete(&self, product_id: &str) -> ProductResult<()> {
        let _timer = ProductMetrics::start_store_timer("delete_item");

        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(PARTITION_KEY, Self::key(product_id))
            .send()
            .await
            .map_err(aws_sdk_dynamodb::Error::from)?;

        Ok(())
    }

    /// Follows `LastEvaluatedKey` until the whole table has been read
    #[instrument(skip(self), fields(table = %self.table_name))]
    async fn scan(&self) -> ProductResult<Vec<Product>> {
        let _timer = ProductMetrics::start_store_timer("scan");

        let items: Vec<HashMap<String, AttributeValue>> = self
            .client
            .scan()
            .table_name(&self.table_name)
            .into_paginator()
            .items()
            .send()
            .collect::<Result<Vec<_>, _>>()
            .await
            .map_err(aws_sdk_dynamodb::Error::from)?;

        tracing::debug!(count = items.len(), "Scanned products table");
        Ok(serde_dynamo::from_items(items)?)
    }

    async fn health_check(&self) -> ProductResult<()> {
        self.client
            .describe_table()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(aws_sdk_dynamodb::Error::from)?;

        Ok(())
    }
}
