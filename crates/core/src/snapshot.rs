// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use storefront_domain::{ColorVariant, Money, MoneyError, ProductImage};

/// A customer's cart as read from storage, joined with the current state of
/// every product it references.
///
/// A customer without a cart has an empty snapshot with `cart_id` set to
/// `None`. That is a normal state, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSnapshot {
    /// The cart owner.
    pub customer_id: i64,
    /// The cart, if one has been created.
    pub cart_id: Option<i64>,
    /// Cart lines in insertion order.
    pub lines: Vec<CartSnapshotLine>,
}

impl CartSnapshot {
    /// Creates a snapshot for a customer who has no cart yet.
    #[must_use]
    pub const fn empty(customer_id: i64) -> Self {
        Self {
            customer_id,
            cart_id: None,
            lines: Vec::new(),
        }
    }

    /// Returns true if the snapshot has no lines.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Sum of every line total at current prices.
    ///
    /// # Errors
    ///
    /// Returns an error on overflow.
    pub fn subtotal(&self) -> Result<Money, MoneyError> {
        self.lines
            .iter()
            .try_fold(Money::ZERO, |acc, line| acc.checked_add(line.line_total()?))
    }
}

/// One cart line with the product data needed to price and display it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSnapshotLine {
    /// The cart item.
    pub cart_item_id: i64,
    /// The product.
    pub product_id: i64,
    /// Current product name.
    pub name: String,
    /// Current product slug.
    pub slug: String,
    /// Current unit price.
    pub unit_price: Money,
    /// Current stock.
    pub stock: u32,
    /// Requested units.
    pub quantity: u32,
    /// Chosen size.
    pub size: Option<String>,
    /// Chosen color hex.
    pub color_value: Option<String>,
    /// Chosen color name.
    pub color_name: Option<String>,
    /// The product's color variants with their images.
    pub colors: Vec<ColorVariant>,
    /// The product's own images.
    pub images: Vec<ProductImage>,
}

impl CartSnapshotLine {
    /// Returns `unit_price * quantity`.
    ///
    /// # Errors
    ///
    /// Returns an error on overflow.
    pub fn line_total(&self) -> Result<Money, MoneyError> {
        self.unit_price.times(self.quantity)
    }

    /// Returns true if current stock covers the requested quantity.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.stock >= self.quantity
    }
}
