// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Checkout planning.
//!
//! Turns a cart snapshot and a checkout request into the exact rows the
//! checkout transaction writes. Prices and images are frozen here, from
//! the snapshot read inside that transaction.

use storefront_domain::{
    Decimal, DomainError, Money, OrderStatus, PaymentMethod, ShippingInfo,
    resolve_variant_image,
};

use crate::error::CoreError;
use crate::snapshot::{CartSnapshot, CartSnapshotLine};

/// What the customer submits at checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    /// Where the order goes.
    pub shipping: ShippingInfo,
    /// The total the client displayed. Advisory only.
    pub declared_total: Option<Decimal>,
    /// Chosen payment method. Defaults to cash on delivery.
    pub payment_method: Option<PaymentMethod>,
}

/// One order item to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedOrderLine {
    /// The cart line this item consumes.
    pub cart_item_id: i64,
    /// The product whose stock is decremented.
    pub product_id: i64,
    /// Product name at checkout.
    pub product_name: String,
    /// Product slug at checkout.
    pub product_slug: String,
    /// Units bought.
    pub quantity: u32,
    /// Unit price at checkout.
    pub unit_price: Money,
    /// Chosen size.
    pub size: Option<String>,
    /// Chosen color hex.
    pub color_value: Option<String>,
    /// Chosen color name.
    pub color_name: Option<String>,
    /// Resolved variant image.
    pub image_url: String,
}

/// Everything the checkout transaction writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderPlan {
    /// The customer placing the order.
    pub customer_id: i64,
    /// Server-computed total.
    pub total: Money,
    /// Initial status. Always pending.
    pub status: OrderStatus,
    /// Payment method.
    pub payment_method: PaymentMethod,
    /// Shipping snapshot.
    pub shipping: ShippingInfo,
    /// Items, in cart order.
    pub lines: Vec<PlannedOrderLine>,
    /// The client's declared total when it differs from `total`.
    pub declared_total_mismatch: Option<Decimal>,
}

/// Validates a checkout request without touching the cart.
///
/// # Errors
///
/// Returns an error if the shipping details are invalid or the declared
/// total is negative.
pub fn validate_order_request(request: &OrderRequest) -> Result<(), CoreError> {
    request.shipping.trimmed().validate()?;

    match request.declared_total {
        Some(declared) if declared.is_sign_negative() && !declared.is_zero() => Err(
            CoreError::DomainViolation(DomainError::InvalidDeclaredTotal(format!(
                "{declared} is negative"
            ))),
        ),
        _ => Ok(()),
    }
}

/// Plans an order from a cart snapshot.
///
/// The request is validated first, then the cart is checked for lines.
/// Stock is not checked here: the checkout transaction asserts it in each
/// conditional decrement.
///
/// # Errors
///
/// Returns an error if:
/// - the shipping details or declared total are invalid
/// - the cart is empty
/// - a line total or the order total overflows
pub fn plan_order(snapshot: &CartSnapshot, request: &OrderRequest) -> Result<OrderPlan, CoreError> {
    validate_order_request(request)?;

    if snapshot.is_empty() {
        return Err(CoreError::EmptyCart {
            customer_id: snapshot.customer_id,
        });
    }

    let lines: Vec<PlannedOrderLine> = snapshot.lines.iter().map(plan_line).collect();

    let total: Money = lines.iter().try_fold(Money::ZERO, |acc, line| {
        line.unit_price
            .times(line.quantity)
            .and_then(|line_total| acc.checked_add(line_total))
    })
    .map_err(|e| CoreError::DomainViolation(DomainError::InvalidPrice(e)))?;

    let declared_total_mismatch: Option<Decimal> = request
        .declared_total
        .filter(|declared| !total.matches(*declared));

    Ok(OrderPlan {
        customer_id: snapshot.customer_id,
        total,
        status: OrderStatus::Pending,
        payment_method: request.payment_method.unwrap_or_default(),
        shipping: request.shipping.trimmed(),
        lines,
        declared_total_mismatch,
    })
}

fn plan_line(line: &CartSnapshotLine) -> PlannedOrderLine {
    let image_url: &str = resolve_variant_image(
        line.color_value.as_deref(),
        line.color_name.as_deref(),
        &line.colors,
        &line.images,
    );

    PlannedOrderLine {
        cart_item_id: line.cart_item_id,
        product_id: line.product_id,
        product_name: line.name.clone(),
        product_slug: line.slug.clone(),
        quantity: line.quantity,
        unit_price: line.unit_price,
        size: line.size.clone(),
        color_value: line.color_value.clone(),
        color_name: line.color_name.clone(),
        image_url: image_url.to_string(),
    }
}
