// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Requests are plain structs built by the transport layer. Responses
//! serialize with camelCase keys.

use serde::{Deserialize, Serialize};
use storefront_domain::{Decimal, ShippingInfo};

/// API request to register a customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterCustomerRequest {
    /// Email address, unique ignoring case.
    pub email: String,
    /// Name shown in the storefront.
    pub display_name: String,
}

/// A customer as returned by the API. Never includes the token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    /// The canonical identifier.
    pub id: i64,
    /// Normalized email address.
    pub email: String,
    /// Display name.
    pub display_name: String,
    /// `admin` or `customer`.
    pub role: String,
}

/// API response for a successful registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterCustomerResponse {
    /// The new customer.
    pub customer: CustomerInfo,
    /// Bearer token for subsequent requests. Shown once.
    pub token: String,
}

/// API request to create a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCategoryRequest {
    /// Display name.
    pub name: String,
    /// URL slug.
    pub slug: String,
}

/// A category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInfo {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

/// An image in a product request. `id` refers to an existing image.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageInput {
    pub id: Option<i64>,
    pub url: String,
}

/// A color variant in a product request. `id` refers to an existing variant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColorInput {
    pub id: Option<i64>,
    pub name: String,
    pub value: String,
    pub images: Vec<ImageInput>,
}

/// API request to create a product.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CreateProductRequest {
    pub category_id: Option<i64>,
    pub name: String,
    pub slug: String,
    pub price: Decimal,
    pub stock: i64,
    pub sizes: Vec<String>,
    pub colors: Vec<ColorInput>,
    pub images: Vec<ImageInput>,
}

/// API request to edit a product.
///
/// Absent fields are left unchanged. `colors` and `images`, when present,
/// are the complete desired lists.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UpdateProductRequest {
    /// The version the edit was based on.
    pub version: u32,
    pub name: Option<String>,
    pub slug: Option<String>,
    /// `Some(None)` removes the category.
    pub category_id: Option<Option<i64>>,
    pub price: Option<Decimal>,
    pub stock: Option<i64>,
    pub sizes: Option<Vec<String>>,
    pub colors: Option<Vec<ColorInput>>,
    pub images: Option<Vec<ImageInput>>,
}

/// API request to list products.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListProductsRequest {
    pub category_id: Option<i64>,
    pub search: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub in_stock_only: bool,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

/// An image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageInfo {
    pub id: Option<i64>,
    pub url: String,
}

/// A color variant with its images.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorInfo {
    pub id: Option<i64>,
    pub name: String,
    pub value: String,
    pub images: Vec<ImageInfo>,
}

/// A product with its variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInfo {
    pub id: i64,
    pub category_id: Option<i64>,
    pub name: String,
    pub slug: String,
    pub price: Decimal,
    pub stock: u32,
    /// Send this back with an edit.
    pub version: u32,
    pub sizes: Vec<String>,
    pub colors: Vec<ColorInfo>,
    pub images: Vec<ImageInfo>,
}

/// API response for a product listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListResponse {
    pub products: Vec<ProductInfo>,
    pub limit: u32,
    pub offset: u32,
}

/// API request to add a line to the cart.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddCartItemRequest {
    pub product_id: i64,
    pub quantity: i64,
    pub size: Option<String>,
    /// Color hex value.
    pub color: Option<String>,
    pub color_name: Option<String>,
}

/// The product an order or cart line refers to.
///
/// `id` is `None` once the product has been deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRefInfo {
    pub id: Option<i64>,
    pub name: String,
    pub slug: String,
}

/// A cart line priced at the product's current price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemInfo {
    pub id: i64,
    pub product: ProductRefInfo,
    pub quantity: u32,
    pub price: Decimal,
    pub line_total: Decimal,
    pub size: Option<String>,
    pub color: Option<String>,
    pub color_name: Option<String>,
    pub image_url: String,
    /// Units currently in stock.
    pub stock: u32,
    /// Whether stock currently covers this line.
    pub available: bool,
}

/// The customer's cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub cart_id: Option<i64>,
    pub items: Vec<CartItemInfo>,
    pub item_count: u64,
    pub subtotal: Decimal,
}

/// API request to place an order from the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceOrderRequest {
    pub shipping: ShippingInfo,
    /// Client-side total. Compared with the server total, never trusted.
    pub total: Option<Decimal>,
    /// Payment method label; defaults to cash on delivery.
    pub payment_method: Option<String>,
}

/// API request to list orders.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListOrdersRequest {
    /// Admin only; ignored for customers.
    pub customer_id: Option<i64>,
    pub status: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

/// API request to move an order to a new status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOrderStatusRequest {
    pub status: String,
}

/// Shipping details on an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingResponse {
    pub name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub region: String,
    #[serde(rename = "postalcode")]
    pub postal_code: String,
    pub country: String,
    pub phone: String,
}

/// An order line with its frozen price and image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemResponse {
    pub id: i64,
    pub quantity: u32,
    pub price: Decimal,
    pub size: Option<String>,
    pub color: Option<String>,
    pub color_name: Option<String>,
    pub image_url: String,
    pub product: ProductRefInfo,
}

/// An order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: i64,
    pub total: Decimal,
    pub status: String,
    pub payment_method: String,
    pub created_at: String,
    pub shipping: ShippingResponse,
    pub items: Vec<OrderItemResponse>,
}

/// API response for an order listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderListResponse {
    pub orders: Vec<OrderResponse>,
}
