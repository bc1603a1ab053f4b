// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Checkout and order status transitions.
//!
//! Both run as one `BEGIN IMMEDIATE` transaction: the write lock is taken
//! before the cart or order is read, so the snapshot that prices the order
//! and the stock it decrements cannot move underneath it.

use diesel::SqliteConnection;
use diesel::prelude::*;
use storefront::{
    CartSnapshot, OrderPlan, OrderRequest, StatusTransition, plan_order, plan_status_transition,
    validate_order_request,
};
use storefront_domain::{Order, OrderStatus};
use tracing::{debug, info, warn};

use crate::backend::PersistenceBackend;
use crate::data_models::{column_i32, column_u32, money_cents, now_rfc3339};
use crate::diesel_schema::{cart_items, order_items, orders};
use crate::error::PersistenceError;
use crate::mutations::inventory::{release_stock, reserve_stock};
use crate::queries::carts::load_cart_snapshot;
use crate::queries::orders::{get_order, get_order_item_rows, get_order_row, parse_status};

/// Places an order from the customer's cart.
///
/// In one transaction:
///
/// 1. reads the cart snapshot (current prices, stock, colors, images)
/// 2. plans the order: totals, frozen prices, resolved images
/// 3. decrements stock for every line, asserting availability
/// 4. inserts the order and its items
/// 5. empties the cart
///
/// Any failure rolls back every step; in particular an insufficient-stock
/// failure leaves the cart untouched.
///
/// # Errors
///
/// Returns an error if:
/// - the shipping details or declared total are invalid
/// - the cart is empty
/// - any line's stock is insufficient
/// - the database fails
pub fn place_order(
    conn: &mut SqliteConnection,
    customer_id: i64,
    request: &OrderRequest,
) -> Result<Order, PersistenceError> {
    // Reject malformed requests before taking the write lock.
    validate_order_request(request)?;

    let order_id: i64 = conn.immediate_transaction(|conn| {
        let snapshot: CartSnapshot = load_cart_snapshot(conn, customer_id)?;
        let plan: OrderPlan = plan_order(&snapshot, request)?;

        if let Some(declared) = plan.declared_total_mismatch {
            warn!(
                customer_id,
                declared = %declared,
                computed = %plan.total,
                "Declared order total differs from computed total; using computed total"
            );
        }

        for line in &plan.lines {
            reserve_stock(conn, line.product_id, line.quantity)?;
        }

        let now: String = now_rfc3339()?;
        let order_id: i64 = insert_order(conn, &plan, &now)?;
        insert_order_items(conn, order_id, &plan)?;

        if let Some(cart_id) = snapshot.cart_id {
            let removed: usize = diesel::delete(cart_items::table)
                .filter(cart_items::cart_id.eq(cart_id))
                .execute(conn)?;
            debug!(customer_id, cart_id, removed, "Emptied cart after checkout");
        }

        Ok::<i64, PersistenceError>(order_id)
    })?;

    let order: Order =
        get_order(conn, order_id)?.ok_or(PersistenceError::OrderNotFound(order_id))?;

    info!(
        order_id,
        customer_id,
        total = %order.total,
        items = order.items.len(),
        "Order placed"
    );

    Ok(order)
}

fn insert_order(
    conn: &mut SqliteConnection,
    plan: &OrderPlan,
    now: &str,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(orders::table)
        .values((
            orders::customer_id.eq(plan.customer_id),
            orders::total_cents.eq(money_cents(plan.total)?),
            orders::status.eq(plan.status.as_str()),
            orders::payment_method.eq(plan.payment_method.as_str()),
            orders::shipping_name.eq(&plan.shipping.name),
            orders::shipping_email.eq(&plan.shipping.email),
            orders::shipping_address.eq(&plan.shipping.address),
            orders::shipping_city.eq(&plan.shipping.city),
            orders::shipping_region.eq(&plan.shipping.region),
            orders::shipping_postal_code.eq(&plan.shipping.postal_code),
            orders::shipping_country.eq(&plan.shipping.country),
            orders::shipping_phone.eq(&plan.shipping.phone),
            orders::created_at.eq(now),
            orders::updated_at.eq(now),
        ))
        .execute(conn)?;

    conn.get_last_insert_rowid()
}

fn insert_order_items(
    conn: &mut SqliteConnection,
    order_id: i64,
    plan: &OrderPlan,
) -> Result<(), PersistenceError> {
    for line in &plan.lines {
        diesel::insert_into(order_items::table)
            .values((
                order_items::order_id.eq(order_id),
                order_items::product_id.eq(Some(line.product_id)),
                order_items::product_name.eq(&line.product_name),
                order_items::product_slug.eq(&line.product_slug),
                order_items::quantity.eq(column_i32(line.quantity, "quantity")?),
                order_items::price_cents.eq(money_cents(line.unit_price)?),
                order_items::size.eq(line.size.as_deref()),
                order_items::color.eq(line.color_value.as_deref()),
                order_items::color_name.eq(line.color_name.as_deref()),
                order_items::image_url.eq(&line.image_url),
            ))
            .execute(conn)?;
    }
    Ok(())
}

/// Moves an order to a new status, restocking when an active order is
/// cancelled.
///
/// The restock and the status write commit together, so an order's stock
/// is returned exactly once no matter how many times cancellation is
/// requested.
///
/// # Errors
///
/// Returns an error if:
/// - the order does not exist
/// - the transition is not permitted
/// - the database fails
pub fn set_order_status(
    conn: &mut SqliteConnection,
    order_id: i64,
    target: OrderStatus,
) -> Result<Order, PersistenceError> {
    let transition: StatusTransition = conn.immediate_transaction(|conn| {
        let row = get_order_row(conn, order_id)?.ok_or(PersistenceError::OrderNotFound(order_id))?;
        let current: OrderStatus = parse_status(&row.status)?;
        let transition: StatusTransition = plan_status_transition(current, target)?;

        if transition.restock {
            for item in get_order_item_rows(conn, order_id)? {
                let quantity: u32 = column_u32(item.quantity, "order_items.quantity")?;
                match item.product_id {
                    Some(product_id) => {
                        if !release_stock(conn, product_id, quantity)? {
                            debug!(order_id, product_id, "Product gone; nothing to restock");
                        }
                    }
                    None => {
                        debug!(
                            order_id,
                            item = item.order_item_id,
                            "Product deleted; skipping restock"
                        );
                    }
                }
            }
        }

        if transition.is_change() {
            diesel::update(orders::table)
                .filter(orders::order_id.eq(order_id))
                .filter(orders::status.eq(current.as_str()))
                .set((
                    orders::status.eq(target.as_str()),
                    orders::updated_at.eq(now_rfc3339()?),
                ))
                .execute(conn)?;
        }

        Ok::<StatusTransition, PersistenceError>(transition)
    })?;

    info!(
        order_id,
        from = %transition.from,
        to = %transition.to,
        restocked = transition.restock,
        "Order status updated"
    );

    get_order(conn, order_id)?.ok_or(PersistenceError::OrderNotFound(order_id))
}
