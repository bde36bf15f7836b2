//! HTTP handlers for Products API
//!
//! Each handler returns `ProductResult<ApiResponse>`; failures are mapped
//! once, by `ProductError`'s `IntoResponse`.

use axum::{
    Router,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use axum_helpers::ErrorResponse;
use observability::ProductMetrics;
use serde::Serialize;
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductInput};
use crate::repository::ProductRepository;
use crate::response::ApiResponse;
use crate::service::ProductService;

/// 400 body for schema violations
#[derive(Serialize, ToSchema)]
pub struct ValidationErrorBody {
    #[schema(example = json!(["name is a required field"]))]
    pub errors: Vec<String>,
}

/// 400 body for malformed JSON, 404 body for unknown products
#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "not found")]
    pub error: String,
}

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        get_products,
        create_product,
        get_product,
        update_product,
        delete_product,
    ),
    components(schemas(Product, ProductInput, ValidationErrorBody, ErrorBody, ErrorResponse)),
    tags(
        (name = "Products", description = "Product management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(get_products).post(create_product))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(shared_service)
}

fn record<T>(operation: &'static str, result: &ProductResult<T>) {
    let outcome = match result {
        Ok(_) => "success",
        Err(ProductError::Validation(_) | ProductError::MalformedBody(_)) => "client_error",
        Err(ProductError::Http(err)) if !err.status.is_server_error() => "client_error",
        Err(_) => "server_error",
    };
    ProductMetrics::record_operation(operation, outcome);
}

/// List every product
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    responses(
        (status = 200, description = "All products, unpaginated", body = Vec<Product>),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
async fn get_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<ApiResponse> {
    let result = service.list_products().await;
    record("list", &result);

    // No content-type on this route
    Ok(ApiResponse::json(StatusCode::OK, &result?)?.without_headers())
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = ProductInput,
    responses(
        (status = 201, description = "Product created successfully", body = Product),
        (status = 400, description = "Validation failed", body = ValidationErrorBody),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    body: Bytes,
) -> ProductResult<ApiResponse> {
    let result = service.create_product(&body).await;
    record("create", &result);

    ApiResponse::json(StatusCode::CREATED, &result?)
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, description = "Product not found", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> ProductResult<ApiResponse> {
    let result = service.fetch_product(&id).await;
    record("get", &result);

    ApiResponse::json(StatusCode::OK, &result?)
}

/// Replace a product
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    request_body = ProductInput,
    responses(
        (status = 200, description = "Product replaced", body = Product),
        (status = 400, description = "Validation failed", body = ValidationErrorBody),
        (status = 404, description = "Product not found", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
    body: Bytes,
) -> ProductResult<ApiResponse> {
    let result = service.update_product(&id, &body).await;
    record("update", &result);

    ApiResponse::json(StatusCode::OK, &result?)
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product deleted successfully"),
        (status = 404, description = "Product not found", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> ProductResult<ApiResponse> {
    let result = service.delete_product(&id).await;
    record("delete", &result);

    result?;
    Ok(ApiResponse::empty(StatusCode::NO_CONTENT))
}
