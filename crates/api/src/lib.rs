// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the storefront.
//!
//! Handlers authorize the caller, translate requests into domain values,
//! call persistence, and translate results into response DTOs. This crate
//! knows nothing about HTTP; the server crate maps [`ApiError`] onto status
//! codes.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod auth;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedActor, AuthenticationService, AuthorizationService, Role};
pub use error::{
    ApiError, AuthError, translate_core_error, translate_domain_error,
    translate_persistence_error,
};
pub use handlers::{
    add_cart_item, bootstrap_admin, clear_cart, create_category, create_product, delete_product,
    get_cart, get_order, get_product_by_slug, list_categories, list_my_orders, list_orders,
    list_products, place_order, register_customer, remove_cart_item, update_cart_item,
    update_order_status, update_product,
};
pub use request_response::{
    AddCartItemRequest, CartItemInfo, CartResponse, CategoryInfo, ColorInfo, ColorInput,
    CreateCategoryRequest, CreateProductRequest, CustomerInfo, ImageInfo, ImageInput,
    ListOrdersRequest, ListProductsRequest, OrderItemResponse, OrderListResponse, OrderResponse,
    PlaceOrderRequest, ProductInfo, ProductListResponse, ProductRefInfo, RegisterCustomerRequest,
    RegisterCustomerResponse, ShippingResponse, UpdateOrderStatusRequest, UpdateProductRequest,
};
pub use storefront_domain::ShippingInfo;

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;
