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
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod cart;
mod catalog;
mod error;
mod filter;
mod money;
mod order;
mod order_status;
mod shipping;
mod validation;
mod variant_image;

#[cfg(test)]
mod tests;

pub use cart::{CartLineKey, LineOptions, MAX_LINE_QUANTITY, validate_quantity};
pub use catalog::{Category, ColorVariant, NewProduct, Product, ProductImage};
pub use error::DomainError;
pub use filter::{DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT, OrderFilter, Page, ProductFilter};
pub use money::{MONEY_SCALE, MONEY_TOLERANCE, Money, MoneyError};
pub use order::{Order, OrderItem, ProductRef};
pub use order_status::{OrderStatus, PaymentMethod};
pub use shipping::ShippingInfo;
pub use validation::{
    MAX_TEXT_LENGTH, validate_color_name, validate_color_value, validate_display_name,
    validate_email, validate_image_url, validate_name, validate_sizes, validate_slug,
    validate_stock,
};
pub use variant_image::{FALLBACK_IMAGE_URL, resolve_variant_image};

// Re-exported so downstream crates share one decimal type.
pub use rust_decimal::Decimal;
