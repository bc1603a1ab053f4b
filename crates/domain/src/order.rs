// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::order_status::{OrderStatus, PaymentMethod};
use crate::shipping::ShippingInfo;

/// The product an order line was bought as.
///
/// `name` and `slug` are frozen at checkout. `product_id` becomes `None`
/// if the product is later deleted from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRef {
    /// The product, while it still exists.
    pub product_id: Option<i64>,
    /// Product name at checkout.
    pub name: String,
    /// Product slug at checkout.
    pub slug: String,
}

/// One line of a placed order.
///
/// Every field is written once at checkout and is a historical record,
/// not a live view of the product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    /// The canonical identifier.
    pub order_item_id: i64,
    /// The product bought.
    pub product: ProductRef,
    /// Units bought.
    pub quantity: u32,
    /// Unit price at checkout.
    pub price: Money,
    /// Size chosen, if any.
    pub size: Option<String>,
    /// Color hex chosen, if any.
    pub color: Option<String>,
    /// Color name chosen, if any.
    pub color_name: Option<String>,
    /// Image resolved for the chosen variant at checkout.
    pub image_url: String,
}

impl OrderItem {
    /// Returns `price * quantity`, or `None` on overflow.
    #[must_use]
    pub fn line_total(&self) -> Option<Money> {
        self.price.times(self.quantity).ok()
    }
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// The canonical identifier.
    pub order_id: i64,
    /// The customer who placed the order.
    pub customer_id: i64,
    /// Server-computed total.
    pub total: Money,
    /// Current status.
    pub status: OrderStatus,
    /// How the order is paid.
    pub payment_method: PaymentMethod,
    /// Shipping details captured at checkout.
    pub shipping: ShippingInfo,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
    /// Order lines.
    pub items: Vec<OrderItem>,
}
