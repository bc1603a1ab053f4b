// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod session;

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch, post, put},
};
use clap::Parser;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use storefront_api::{
    AddCartItemRequest, ApiError, CartResponse, CategoryInfo, ColorInput, CreateCategoryRequest,
    CreateProductRequest, ImageInput, ListOrdersRequest, ListProductsRequest, OrderListResponse,
    OrderResponse, PlaceOrderRequest, ProductInfo, ProductListResponse, RegisterCustomerRequest,
    RegisterCustomerResponse, ShippingInfo, UpdateOrderStatusRequest, UpdateProductRequest,
    add_cart_item, bootstrap_admin, clear_cart, create_category, create_product, delete_product,
    get_cart, get_order, get_product_by_slug, list_categories, list_my_orders, list_orders,
    list_products, place_order, register_customer, remove_cart_item, update_cart_item,
    update_order_status, update_product,
};
use storefront_domain::Decimal;
use storefront_persistence::Persistence;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

use crate::session::AuthenticatedCustomer;

/// Storefront Server - HTTP server for the storefront order core
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long, env = "STOREFRONT_DATABASE")]
    database: Option<String>,

    /// Address to bind the server to
    #[arg(
        short,
        long,
        env = "STOREFRONT_BIND",
        default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST)
    )]
    bind: IpAddr,

    /// Port to bind the server to
    #[arg(short, long, env = "STOREFRONT_PORT", default_value_t = 3000)]
    port: u16,

    /// Email of an admin to create on startup if no admin exists yet.
    #[arg(long, env = "STOREFRONT_BOOTSTRAP_ADMIN")]
    bootstrap_admin: Option<String>,
}

/// Application state shared across handlers.
///
/// The connection is behind a Mutex; every handler holds the lock for
/// the duration of one persistence call.
#[derive(Clone)]
struct AppState {
    /// The persistence layer.
    persistence: Arc<Mutex<Persistence>>,
}

// ============================================================================
// Wire request types
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct RegisterCustomerApiRequest {
    email: String,
    display_name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct CreateCategoryApiRequest {
    name: String,
    slug: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct ImageApiInput {
    #[serde(default)]
    id: Option<i64>,
    url: String,
}

impl From<ImageApiInput> for ImageInput {
    fn from(input: ImageApiInput) -> Self {
        Self {
            id: input.id,
            url: input.url,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct ColorApiInput {
    #[serde(default)]
    id: Option<i64>,
    name: String,
    value: String,
    #[serde(default)]
    images: Vec<ImageApiInput>,
}

impl From<ColorApiInput> for ColorInput {
    fn from(input: ColorApiInput) -> Self {
        Self {
            id: input.id,
            name: input.name,
            value: input.value,
            images: input.images.into_iter().map(ImageInput::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateProductApiRequest {
    #[serde(default)]
    category_id: Option<i64>,
    name: String,
    slug: String,
    price: Decimal,
    #[serde(default)]
    stock: i64,
    #[serde(default)]
    sizes: Vec<String>,
    #[serde(default)]
    colors: Vec<ColorApiInput>,
    #[serde(default)]
    images: Vec<ImageApiInput>,
}

/// A versioned product edit. Absent fields are left unchanged; an explicit
/// `"categoryId": null` clears the category.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateProductApiRequest {
    version: u32,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    slug: Option<String>,
    #[serde(default, deserialize_with = "present_or_null")]
    category_id: Option<Option<i64>>,
    #[serde(default)]
    price: Option<Decimal>,
    #[serde(default)]
    stock: Option<i64>,
    #[serde(default)]
    sizes: Option<Vec<String>>,
    #[serde(default)]
    colors: Option<Vec<ColorApiInput>>,
    #[serde(default)]
    images: Option<Vec<ImageApiInput>>,
}

/// Distinguishes a field sent as `null` from a missing one.
fn present_or_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct ListProductsQuery {
    category_id: Option<i64>,
    search: Option<String>,
    min_price: Option<Decimal>,
    max_price: Option<Decimal>,
    #[serde(default)]
    in_stock: bool,
    limit: Option<u32>,
    offset: Option<u32>,
}

const fn default_quantity() -> i64 {
    1
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct AddCartItemApiRequest {
    product_id: i64,
    #[serde(default = "default_quantity")]
    quantity: i64,
    #[serde(default)]
    size: Option<String>,
    /// Color hex value.
    #[serde(default)]
    color: Option<String>,
    #[serde(default)]
    color_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct UpdateCartItemApiRequest {
    quantity: i64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct ShippingApiInput {
    name: String,
    email: String,
    address: String,
    city: String,
    #[serde(default)]
    region: String,
    #[serde(rename = "postalcode", alias = "postalCode")]
    postal_code: String,
    country: String,
    phone: String,
}

impl From<ShippingApiInput> for ShippingInfo {
    fn from(input: ShippingApiInput) -> Self {
        Self {
            name: input.name,
            email: input.email,
            address: input.address,
            city: input.city,
            region: input.region,
            postal_code: input.postal_code,
            country: input.country,
            phone: input.phone,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct PlaceOrderApiRequest {
    shipping: ShippingApiInput,
    /// Client-side total, compared against the server total.
    #[serde(default)]
    total: Option<Decimal>,
    #[serde(default)]
    payment_method: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct ListOrdersQuery {
    customer_id: Option<i64>,
    status: Option<String>,
    limit: Option<u32>,
    offset: Option<u32>,
}

impl From<ListOrdersQuery> for ListOrdersRequest {
    fn from(query: ListOrdersQuery) -> Self {
        Self {
            customer_id: query.customer_id,
            status: query.status,
            limit: query.limit,
            offset: query.offset,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct UpdateOrderStatusApiRequest {
    status: String,
}

// ============================================================================
// Errors
// ============================================================================

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Machine-readable error kind.
    kind: String,
    /// The offending input field, for validation errors.
    field: Option<String>,
    /// Error message.
    message: String,
    /// Whether re-reading and retrying may succeed.
    retryable: bool,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// Machine-readable error kind.
    kind: &'static str,
    /// The offending input field.
    field: Option<String>,
    /// The error message.
    message: String,
    /// Whether the client may retry.
    retryable: bool,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            kind: self.kind.to_string(),
            field: self.field,
            message: self.message,
            retryable: self.retryable,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let retryable: bool = err.is_retryable();
        let message: String = err.to_string();
        let (status, kind, field): (StatusCode, &'static str, Option<String>) = match err {
            ApiError::AuthenticationFailed { .. } => {
                (StatusCode::UNAUTHORIZED, "authentication_failed", None)
            }
            ApiError::Unauthorized { .. } => (StatusCode::FORBIDDEN, "forbidden", None),
            ApiError::DomainRuleViolation { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, "domain_rule_violation", None)
            }
            ApiError::InvalidInput { field, .. } => {
                (StatusCode::BAD_REQUEST, "invalid_input", Some(field))
            }
            ApiError::Conflict { reason, .. } => {
                (StatusCode::CONFLICT, conflict_kind(&reason), None)
            }
            ApiError::ResourceNotFound { .. } => (StatusCode::NOT_FOUND, "not_found", None),
            ApiError::Internal { .. } => {
                error!(error = %message, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal", None)
            }
        };

        if status == StatusCode::CONFLICT {
            warn!(kind, error = %message, "Request conflicted");
        }

        Self {
            status,
            kind,
            field,
            message,
            retryable,
        }
    }
}

fn conflict_kind(reason: &str) -> &'static str {
    match reason {
        "insufficient_stock" => "insufficient_stock",
        "version_conflict" => "version_conflict",
        "stock_changed" => "stock_changed",
        "duplicate" => "duplicate",
        _ => "conflict",
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            kind: "invalid_input",
            field: None,
            message: rejection.body_text(),
            retryable: false,
        }
    }
}

// ============================================================================
// Customers and catalog
// ============================================================================

/// Handler for POST `/customers` endpoint.
async fn handle_register_customer(
    AxumState(app_state): AxumState<AppState>,
    payload: Result<Json<RegisterCustomerApiRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RegisterCustomerResponse>), HttpError> {
    let Json(req) = payload?;
    info!(email = %req.email, "Handling register_customer request");

    let request: RegisterCustomerRequest = RegisterCustomerRequest {
        email: req.email,
        display_name: req.display_name,
    };

    let mut persistence = app_state.persistence.lock().await;
    let response: RegisterCustomerResponse = register_customer(&mut persistence, &request)?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// Handler for GET `/categories` endpoint.
async fn handle_list_categories(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<CategoryInfo>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(list_categories(&mut persistence)?))
}

/// Handler for POST `/admin/categories` endpoint.
async fn handle_create_category(
    AxumState(app_state): AxumState<AppState>,
    AuthenticatedCustomer(actor): AuthenticatedCustomer,
    payload: Result<Json<CreateCategoryApiRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CategoryInfo>), HttpError> {
    let Json(req) = payload?;
    info!(
        customer_id = actor.customer_id,
        slug = %req.slug,
        "Handling create_category request"
    );

    let request: CreateCategoryRequest = CreateCategoryRequest {
        name: req.name,
        slug: req.slug,
    };

    let mut persistence = app_state.persistence.lock().await;
    let category: CategoryInfo = create_category(&mut persistence, &actor, &request)?;

    Ok((StatusCode::CREATED, Json(category)))
}

/// Handler for GET `/products` endpoint.
async fn handle_list_products(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<ListProductsQuery>,
) -> Result<Json<ProductListResponse>, HttpError> {
    let request: ListProductsRequest = ListProductsRequest {
        category_id: query.category_id,
        search: query.search,
        min_price: query.min_price,
        max_price: query.max_price,
        in_stock_only: query.in_stock,
        limit: query.limit,
        offset: query.offset,
    };

    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(list_products(&mut persistence, request)?))
}

/// Handler for GET `/products/{slug}` endpoint.
async fn handle_get_product(
    AxumState(app_state): AxumState<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ProductInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(get_product_by_slug(&mut persistence, &slug)?))
}

/// Handler for POST `/admin/products` endpoint.
async fn handle_create_product(
    AxumState(app_state): AxumState<AppState>,
    AuthenticatedCustomer(actor): AuthenticatedCustomer,
    payload: Result<Json<CreateProductApiRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ProductInfo>), HttpError> {
    let Json(req) = payload?;
    info!(
        customer_id = actor.customer_id,
        slug = %req.slug,
        "Handling create_product request"
    );

    let request: CreateProductRequest = CreateProductRequest {
        category_id: req.category_id,
        name: req.name,
        slug: req.slug,
        price: req.price,
        stock: req.stock,
        sizes: req.sizes,
        colors: req.colors.into_iter().map(ColorInput::from).collect(),
        images: req.images.into_iter().map(ImageInput::from).collect(),
    };

    let mut persistence = app_state.persistence.lock().await;
    let product: ProductInfo = create_product(&mut persistence, &actor, request)?;

    Ok((StatusCode::CREATED, Json(product)))
}

/// Handler for PUT `/admin/products/{id}` endpoint.
///
/// Rejects with 409 if the product changed since `version` was read.
async fn handle_update_product(
    AxumState(app_state): AxumState<AppState>,
    AuthenticatedCustomer(actor): AuthenticatedCustomer,
    Path(product_id): Path<i64>,
    payload: Result<Json<UpdateProductApiRequest>, JsonRejection>,
) -> Result<Json<ProductInfo>, HttpError> {
    let Json(req) = payload?;
    info!(
        customer_id = actor.customer_id,
        product_id,
        version = req.version,
        "Handling update_product request"
    );

    let request: UpdateProductRequest = UpdateProductRequest {
        version: req.version,
        name: req.name,
        slug: req.slug,
        category_id: req.category_id,
        price: req.price,
        stock: req.stock,
        sizes: req.sizes,
        colors: req
            .colors
            .map(|colors| colors.into_iter().map(ColorInput::from).collect()),
        images: req
            .images
            .map(|images| images.into_iter().map(ImageInput::from).collect()),
    };

    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(update_product(
        &mut persistence,
        &actor,
        product_id,
        request,
    )?))
}

/// Handler for DELETE `/admin/products/{id}` endpoint.
async fn handle_delete_product(
    AxumState(app_state): AxumState<AppState>,
    AuthenticatedCustomer(actor): AuthenticatedCustomer,
    Path(product_id): Path<i64>,
) -> Result<StatusCode, HttpError> {
    info!(
        customer_id = actor.customer_id,
        product_id,
        "Handling delete_product request"
    );

    let mut persistence = app_state.persistence.lock().await;
    delete_product(&mut persistence, &actor, product_id)?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Cart
// ============================================================================

/// Handler for GET `/cart` endpoint.
async fn handle_get_cart(
    AxumState(app_state): AxumState<AppState>,
    AuthenticatedCustomer(actor): AuthenticatedCustomer,
) -> Result<Json<CartResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(get_cart(&mut persistence, &actor)?))
}

/// Handler for POST `/cart/items` endpoint.
async fn handle_add_cart_item(
    AxumState(app_state): AxumState<AppState>,
    AuthenticatedCustomer(actor): AuthenticatedCustomer,
    payload: Result<Json<AddCartItemApiRequest>, JsonRejection>,
) -> Result<Json<CartResponse>, HttpError> {
    let Json(req) = payload?;
    info!(
        customer_id = actor.customer_id,
        product_id = req.product_id,
        quantity = req.quantity,
        "Handling add_cart_item request"
    );

    let request: AddCartItemRequest = AddCartItemRequest {
        product_id: req.product_id,
        quantity: req.quantity,
        size: req.size,
        color: req.color,
        color_name: req.color_name,
    };

    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(add_cart_item(&mut persistence, &actor, request)?))
}

/// Handler for PATCH `/cart/items/{id}` endpoint.
async fn handle_update_cart_item(
    AxumState(app_state): AxumState<AppState>,
    AuthenticatedCustomer(actor): AuthenticatedCustomer,
    Path(cart_item_id): Path<i64>,
    payload: Result<Json<UpdateCartItemApiRequest>, JsonRejection>,
) -> Result<Json<CartResponse>, HttpError> {
    let Json(req) = payload?;

    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(update_cart_item(
        &mut persistence,
        &actor,
        cart_item_id,
        req.quantity,
    )?))
}

/// Handler for DELETE `/cart/items/{id}` endpoint.
async fn handle_remove_cart_item(
    AxumState(app_state): AxumState<AppState>,
    AuthenticatedCustomer(actor): AuthenticatedCustomer,
    Path(cart_item_id): Path<i64>,
) -> Result<Json<CartResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(remove_cart_item(&mut persistence, &actor, cart_item_id)?))
}

/// Handler for DELETE `/cart` endpoint.
async fn handle_clear_cart(
    AxumState(app_state): AxumState<AppState>,
    AuthenticatedCustomer(actor): AuthenticatedCustomer,
) -> Result<Json<CartResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(clear_cart(&mut persistence, &actor)?))
}

// ============================================================================
// Orders
// ============================================================================

/// Handler for POST `/orders` endpoint.
///
/// Places an order from the caller's cart.
async fn handle_place_order(
    AxumState(app_state): AxumState<AppState>,
    AuthenticatedCustomer(actor): AuthenticatedCustomer,
    payload: Result<Json<PlaceOrderApiRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<OrderResponse>), HttpError> {
    let Json(req) = payload?;
    info!(
        customer_id = actor.customer_id,
        "Handling place_order request"
    );

    let request: PlaceOrderRequest = PlaceOrderRequest {
        shipping: ShippingInfo::from(req.shipping),
        total: req.total,
        payment_method: req.payment_method,
    };

    let mut persistence = app_state.persistence.lock().await;
    let order: OrderResponse = place_order(&mut persistence, &actor, request)?;

    Ok((StatusCode::CREATED, Json(order)))
}

/// Handler for GET `/orders` endpoint.
async fn handle_list_my_orders(
    AxumState(app_state): AxumState<AppState>,
    AuthenticatedCustomer(actor): AuthenticatedCustomer,
    Query(query): Query<ListOrdersQuery>,
) -> Result<Json<OrderListResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(list_my_orders(
        &mut persistence,
        &actor,
        ListOrdersRequest::from(query),
    )?))
}

/// Handler for GET `/orders/{id}` endpoint.
async fn handle_get_order(
    AxumState(app_state): AxumState<AppState>,
    AuthenticatedCustomer(actor): AuthenticatedCustomer,
    Path(order_id): Path<i64>,
) -> Result<Json<OrderResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(get_order(&mut persistence, &actor, order_id)?))
}

/// Handler for GET `/admin/orders` endpoint.
async fn handle_list_orders(
    AxumState(app_state): AxumState<AppState>,
    AuthenticatedCustomer(actor): AuthenticatedCustomer,
    Query(query): Query<ListOrdersQuery>,
) -> Result<Json<OrderListResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(list_orders(
        &mut persistence,
        &actor,
        ListOrdersRequest::from(query),
    )?))
}

/// Handler for PUT `/admin/orders/{id}/status` endpoint.
///
/// Cancelling an active order returns its stock.
async fn handle_update_order_status(
    AxumState(app_state): AxumState<AppState>,
    AuthenticatedCustomer(actor): AuthenticatedCustomer,
    Path(order_id): Path<i64>,
    payload: Result<Json<UpdateOrderStatusApiRequest>, JsonRejection>,
) -> Result<Json<OrderResponse>, HttpError> {
    let Json(req) = payload?;
    info!(
        customer_id = actor.customer_id,
        order_id,
        status = %req.status,
        "Handling update_order_status request"
    );

    let request: UpdateOrderStatusRequest = UpdateOrderStatusRequest { status: req.status };

    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(update_order_status(
        &mut persistence,
        &actor,
        order_id,
        &request,
    )?))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/customers", post(handle_register_customer))
        .route("/categories", get(handle_list_categories))
        .route("/admin/categories", post(handle_create_category))
        .route("/products", get(handle_list_products))
        .route("/products/{slug}", get(handle_get_product))
        .route("/admin/products", post(handle_create_product))
        .route(
            "/admin/products/{id}",
            put(handle_update_product).delete(handle_delete_product),
        )
        .route("/cart", get(handle_get_cart).delete(handle_clear_cart))
        .route("/cart/items", post(handle_add_cart_item))
        .route(
            "/cart/items/{id}",
            patch(handle_update_cart_item).delete(handle_remove_cart_item),
        )
        .route(
            "/orders",
            post(handle_place_order).get(handle_list_my_orders),
        )
        .route("/orders/{id}", get(handle_get_order))
        .route("/admin/orders", get(handle_list_orders))
        .route("/admin/orders/{id}/status", put(handle_update_order_status))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Storefront Server");

    let mut persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    if let Some(email) = &args.bootstrap_admin {
        match bootstrap_admin(&mut persistence, email)? {
            Some(created) => info!(
                email = %created.customer.email,
                token = %created.token,
                "Bootstrapped admin; use this token as a Bearer credential"
            ),
            None => info!("An admin already exists; bootstrap skipped"),
        }
    }

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    let app: Router = build_router(app_state);

    let addr: SocketAddr = SocketAddr::new(args.bind, args.port);
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
