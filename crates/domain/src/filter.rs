// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Listing filters for products and orders.

use crate::error::DomainError;
use crate::money::Money;
use crate::order_status::OrderStatus;

/// Page size used when the caller does not ask for one.
pub const DEFAULT_PAGE_LIMIT: u32 = 50;

/// Largest page a caller may request.
pub const MAX_PAGE_LIMIT: u32 = 200;

/// A window into a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Maximum number of rows returned.
    pub limit: u32,
    /// Number of rows skipped.
    pub offset: u32,
}

impl Page {
    /// Creates a page, applying the default limit and clamping to the maximum.
    #[must_use]
    pub fn new(limit: Option<u32>, offset: Option<u32>) -> Self {
        Self {
            limit: limit
                .unwrap_or(DEFAULT_PAGE_LIMIT)
                .clamp(1, MAX_PAGE_LIMIT),
            offset: offset.unwrap_or(0),
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Criteria for listing products. Every criterion is optional and they
/// combine with AND.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductFilter {
    /// Only products in this category.
    pub category_id: Option<i64>,
    /// Only products whose name contains this text, ignoring case.
    pub search: Option<String>,
    /// Only products priced at or above this amount.
    pub min_price: Option<Money>,
    /// Only products priced at or below this amount.
    pub max_price: Option<Money>,
    /// Only products with stock available.
    pub in_stock_only: bool,
    /// Paging window.
    pub page: Page,
}

impl ProductFilter {
    /// Validates the filter.
    ///
    /// # Errors
    ///
    /// Returns an error if `min_price` is greater than `max_price`.
    pub fn validate(&self) -> Result<(), DomainError> {
        match (self.min_price, self.max_price) {
            (Some(min), Some(max)) if min > max => Err(DomainError::InvalidPriceRange {
                min: min.to_string(),
                max: max.to_string(),
            }),
            _ => Ok(()),
        }
    }

    /// Returns the search text trimmed, or `None` if it is blank.
    #[must_use]
    pub fn search_text(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Criteria for listing orders.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrderFilter {
    /// Only orders placed by this customer.
    pub customer_id: Option<i64>,
    /// Only orders in this status.
    pub status: Option<OrderStatus>,
    /// Paging window.
    pub page: Page,
}
