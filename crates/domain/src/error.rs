// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::money::MoneyError;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Product or category name is empty or invalid.
    InvalidName(String),
    /// Customer display name is empty or invalid.
    InvalidDisplayName(String),
    /// Slug is empty or contains characters outside `[a-z0-9-]`.
    InvalidSlug(String),
    /// Price is negative, too precise, or out of range.
    InvalidPrice(MoneyError),
    /// Stock count is negative or out of range.
    InvalidStock(i64),
    /// Line quantity is outside the permitted range.
    InvalidQuantity {
        /// The rejected quantity.
        quantity: i64,
        /// The maximum quantity for a single line.
        max: u32,
    },
    /// Color value is not a `#RRGGBB` hex code.
    InvalidColorValue(String),
    /// Color variant name is empty or invalid.
    InvalidColorName(String),
    /// Image URL is empty or invalid.
    InvalidImageUrl(String),
    /// A size label is empty or duplicated.
    InvalidSize(String),
    /// The requested size is not offered by the product.
    UnknownSize {
        /// The product the line refers to.
        product_id: i64,
        /// The requested size.
        size: String,
    },
    /// The requested color is not offered by the product.
    UnknownColor {
        /// The product the line refers to.
        product_id: i64,
        /// The requested color value or name.
        color: String,
    },
    /// A required shipping field is missing or blank.
    MissingShippingField {
        /// The shipping field name.
        field: &'static str,
    },
    /// A shipping field is present but malformed.
    InvalidShippingField {
        /// The shipping field name.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
    /// Email address is malformed.
    InvalidEmail(String),
    /// Order status label is not one of the known statuses.
    InvalidOrderStatus(String),
    /// Payment method label is not one of the known methods.
    InvalidPaymentMethod(String),
    /// The requested order status transition is not permitted.
    InvalidStatusTransition {
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
        /// Why the transition was rejected.
        reason: String,
    },
    /// The client-declared order total is negative or malformed.
    InvalidDeclaredTotal(String),
    /// A listing filter has a minimum price greater than its maximum.
    InvalidPriceRange {
        /// The lower bound.
        min: String,
        /// The upper bound.
        max: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::InvalidDisplayName(msg) => write!(f, "Invalid display name: {msg}"),
            Self::InvalidSlug(msg) => write!(f, "Invalid slug: {msg}"),
            Self::InvalidPrice(err) => write!(f, "Invalid price: {err}"),
            Self::InvalidStock(stock) => {
                write!(f, "Invalid stock: {stock}. Must be zero or greater")
            }
            Self::InvalidQuantity { quantity, max } => {
                write!(
                    f,
                    "Invalid quantity: {quantity}. Must be between 1 and {max}"
                )
            }
            Self::InvalidColorValue(value) => {
                write!(f, "Invalid color value '{value}'. Expected #RRGGBB")
            }
            Self::InvalidColorName(msg) => write!(f, "Invalid color name: {msg}"),
            Self::InvalidImageUrl(msg) => write!(f, "Invalid image URL: {msg}"),
            Self::InvalidSize(msg) => write!(f, "Invalid size: {msg}"),
            Self::UnknownSize { product_id, size } => {
                write!(f, "Product {product_id} is not offered in size '{size}'")
            }
            Self::UnknownColor { product_id, color } => {
                write!(f, "Product {product_id} is not offered in color '{color}'")
            }
            Self::MissingShippingField { field } => {
                write!(f, "Shipping field '{field}' is required")
            }
            Self::InvalidShippingField { field, reason } => {
                write!(f, "Shipping field '{field}' is invalid: {reason}")
            }
            Self::InvalidEmail(email) => write!(f, "Invalid email address: '{email}'"),
            Self::InvalidOrderStatus(status) => write!(
                f,
                "Invalid order status '{status}'. Must be one of: pending, shipped, delivered, cancelled"
            ),
            Self::InvalidPaymentMethod(method) => write!(
                f,
                "Invalid payment method '{method}'. Must be one of: cash_on_delivery, card, bank_transfer"
            ),
            Self::InvalidStatusTransition { from, to, reason } => {
                write!(f, "Cannot move order from '{from}' to '{to}': {reason}")
            }
            Self::InvalidDeclaredTotal(msg) => write!(f, "Invalid order total: {msg}"),
            Self::InvalidPriceRange { min, max } => {
                write!(
                    f,
                    "Invalid price range: minimum {min} is greater than maximum {max}"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}

impl From<MoneyError> for DomainError {
    fn from(err: MoneyError) -> Self {
        Self::InvalidPrice(err)
    }
}
