// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Order reads.

use std::collections::HashMap;
use std::str::FromStr;

use diesel::SqliteConnection;
use diesel::prelude::*;
use storefront_domain::{
    Order, OrderFilter, OrderItem, OrderStatus, PaymentMethod, ProductRef, ShippingInfo,
};
use tracing::debug;

use crate::data_models::{column_money, column_u32};
use crate::diesel_schema::{order_items, orders};
use crate::error::PersistenceError;

/// Diesel Queryable struct for order rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = orders)]
pub(crate) struct OrderRow {
    pub(crate) order_id: i64,
    pub(crate) customer_id: i64,
    pub(crate) total_cents: i64,
    pub(crate) status: String,
    pub(crate) payment_method: String,
    pub(crate) shipping_name: String,
    pub(crate) shipping_email: String,
    pub(crate) shipping_address: String,
    pub(crate) shipping_city: String,
    pub(crate) shipping_region: String,
    pub(crate) shipping_postal_code: String,
    pub(crate) shipping_country: String,
    pub(crate) shipping_phone: String,
    pub(crate) created_at: String,
}

/// Diesel Queryable struct for order item rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = order_items)]
pub(crate) struct OrderItemRow {
    pub(crate) order_item_id: i64,
    pub(crate) order_id: i64,
    pub(crate) product_id: Option<i64>,
    pub(crate) product_name: String,
    pub(crate) product_slug: String,
    pub(crate) quantity: i32,
    pub(crate) price_cents: i64,
    pub(crate) size: Option<String>,
    pub(crate) color: Option<String>,
    pub(crate) color_name: Option<String>,
    pub(crate) image_url: String,
}

/// Reads the bare order row.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the order is not found.
pub(crate) fn get_order_row(
    conn: &mut SqliteConnection,
    order_id: i64,
) -> Result<Option<OrderRow>, PersistenceError> {
    orders::table
        .filter(orders::order_id.eq(order_id))
        .select(OrderRow::as_select())
        .first(conn)
        .optional()
        .map_err(PersistenceError::from)
}

/// Reads the items of one order in insertion order.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub(crate) fn get_order_item_rows(
    conn: &mut SqliteConnection,
    order_id: i64,
) -> Result<Vec<OrderItemRow>, PersistenceError> {
    order_items::table
        .filter(order_items::order_id.eq(order_id))
        .select(OrderItemRow::as_select())
        .order(order_items::order_item_id.asc())
        .load(conn)
        .map_err(PersistenceError::from)
}

/// Retrieves an order with its items.
///
/// # Errors
///
/// Returns an error if the database query fails or a stored value is invalid.
/// Returns `Ok(None)` if the order is not found.
pub fn get_order(
    conn: &mut SqliteConnection,
    order_id: i64,
) -> Result<Option<Order>, PersistenceError> {
    debug!(order_id, "Loading order");

    let Some(row) = get_order_row(conn, order_id)? else {
        return Ok(None);
    };
    let items: Vec<OrderItemRow> = get_order_item_rows(conn, order_id)?;

    order_from_rows(row, items).map(Some)
}

/// Lists orders matching a filter, newest first.
///
/// # Errors
///
/// Returns an error if the database query fails or a stored value is invalid.
pub fn list_orders(
    conn: &mut SqliteConnection,
    filter: &OrderFilter,
) -> Result<Vec<Order>, PersistenceError> {
    let mut query = orders::table.select(OrderRow::as_select()).into_boxed();

    if let Some(customer_id) = filter.customer_id {
        query = query.filter(orders::customer_id.eq(customer_id));
    }
    if let Some(status) = filter.status {
        query = query.filter(orders::status.eq(status.as_str()));
    }

    let rows: Vec<OrderRow> = query
        .order((orders::created_at.desc(), orders::order_id.desc()))
        .limit(i64::from(filter.page.limit))
        .offset(i64::from(filter.page.offset))
        .load(conn)?;

    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<i64> = rows.iter().map(|r| r.order_id).collect();
    let item_rows: Vec<OrderItemRow> = order_items::table
        .filter(order_items::order_id.eq_any(&ids))
        .select(OrderItemRow::as_select())
        .order(order_items::order_item_id.asc())
        .load(conn)?;

    let mut items_by_order: HashMap<i64, Vec<OrderItemRow>> = HashMap::new();
    for item in item_rows {
        items_by_order.entry(item.order_id).or_default().push(item);
    }

    debug!(count = rows.len(), "Listed orders");

    rows.into_iter()
        .map(|row| {
            let items: Vec<OrderItemRow> = items_by_order.remove(&row.order_id).unwrap_or_default();
            order_from_rows(row, items)
        })
        .collect()
}

pub(crate) fn parse_status(value: &str) -> Result<OrderStatus, PersistenceError> {
    OrderStatus::from_str(value)
        .map_err(|e| PersistenceError::ReconstructionError(format!("orders.status: {e}")))
}

fn order_from_rows(row: OrderRow, items: Vec<OrderItemRow>) -> Result<Order, PersistenceError> {
    let payment_method: PaymentMethod = PaymentMethod::from_str(&row.payment_method)
        .map_err(|e| PersistenceError::ReconstructionError(format!("orders.payment_method: {e}")))?;

    let items: Vec<OrderItem> = items
        .into_iter()
        .map(|item| {
            Ok(OrderItem {
                order_item_id: item.order_item_id,
                product: ProductRef {
                    product_id: item.product_id,
                    name: item.product_name,
                    slug: item.product_slug,
                },
                quantity: column_u32(item.quantity, "order_items.quantity")?,
                price: column_money(item.price_cents, "order_items.price_cents")?,
                size: item.size,
                color: item.color,
                color_name: item.color_name,
                image_url: item.image_url,
            })
        })
        .collect::<Result<_, PersistenceError>>()?;

    Ok(Order {
        order_id: row.order_id,
        customer_id: row.customer_id,
        total: column_money(row.total_cents, "orders.total_cents")?,
        status: parse_status(&row.status)?,
        payment_method,
        shipping: ShippingInfo {
            name: row.shipping_name,
            email: row.shipping_email,
            address: row.shipping_address,
            city: row.shipping_city,
            region: row.shipping_region,
            postal_code: row.shipping_postal_code,
            country: row.shipping_country,
            phone: row.shipping_phone,
        },
        created_at: row.created_at,
        items,
    })
}
