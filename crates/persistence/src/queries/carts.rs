// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Cart snapshot reads.

use std::collections::HashMap;

use diesel::SqliteConnection;
use diesel::prelude::*;
use storefront::{CartSnapshot, CartSnapshotLine};
use storefront_domain::{CartLineKey, Product};
use tracing::{debug, warn};

use crate::data_models::{column_u32, optional_text};
use crate::diesel_schema::{cart_items, carts};
use crate::error::PersistenceError;
use crate::queries::catalog::get_products_by_ids;

/// Diesel Queryable struct for cart item rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = cart_items)]
pub(crate) struct CartItemRow {
    pub(crate) cart_item_id: i64,
    pub(crate) product_id: i64,
    pub(crate) quantity: i32,
    pub(crate) size: String,
    pub(crate) color_value: String,
    pub(crate) color_name: String,
}

/// Retrieves the id of a customer's cart.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the customer has no cart yet.
pub fn get_cart_id(
    conn: &mut SqliteConnection,
    customer_id: i64,
) -> Result<Option<i64>, PersistenceError> {
    carts::table
        .filter(carts::customer_id.eq(customer_id))
        .select(carts::cart_id)
        .first(conn)
        .optional()
        .map_err(PersistenceError::from)
}

/// Retrieves a cart item if it belongs to the given cart.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the item does not exist or is in another cart.
pub(crate) fn get_cart_item(
    conn: &mut SqliteConnection,
    cart_id: i64,
    cart_item_id: i64,
) -> Result<Option<CartItemRow>, PersistenceError> {
    cart_items::table
        .filter(cart_items::cart_item_id.eq(cart_item_id))
        .filter(cart_items::cart_id.eq(cart_id))
        .select(CartItemRow::as_select())
        .first(conn)
        .optional()
        .map_err(PersistenceError::from)
}

/// Retrieves the line in a cart with the given identity.
///
/// Unchosen options are stored as the empty string.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub(crate) fn find_matching_line(
    conn: &mut SqliteConnection,
    cart_id: i64,
    key: &CartLineKey,
) -> Result<Option<CartItemRow>, PersistenceError> {
    let size: &str = key.size.as_deref().unwrap_or_default();
    let color_value: &str = key.color_value.as_deref().unwrap_or_default();

    cart_items::table
        .filter(cart_items::cart_id.eq(cart_id))
        .filter(cart_items::product_id.eq(key.product_id))
        .filter(cart_items::size.eq(size))
        .filter(cart_items::color_value.eq(color_value))
        .select(CartItemRow::as_select())
        .first(conn)
        .optional()
        .map_err(PersistenceError::from)
}

/// Loads a customer's cart with the current state of every product in it.
///
/// A customer without a cart gets an empty snapshot, not an error.
///
/// # Errors
///
/// Returns an error if the database query fails or a stored value is invalid.
pub fn load_cart_snapshot(
    conn: &mut SqliteConnection,
    customer_id: i64,
) -> Result<CartSnapshot, PersistenceError> {
    let Some(cart_id) = get_cart_id(conn, customer_id)? else {
        debug!(customer_id, "Customer has no cart");
        return Ok(CartSnapshot::empty(customer_id));
    };

    let rows: Vec<CartItemRow> = cart_items::table
        .filter(cart_items::cart_id.eq(cart_id))
        .select(CartItemRow::as_select())
        .order(cart_items::cart_item_id.asc())
        .load(conn)?;

    let product_ids: Vec<i64> = rows.iter().map(|r| r.product_id).collect();
    let products: HashMap<i64, Product> = get_products_by_ids(conn, &product_ids)?
        .into_iter()
        .map(|p| (p.product_id, p))
        .collect();

    let mut lines: Vec<CartSnapshotLine> = Vec::with_capacity(rows.len());
    for row in rows {
        // Cart items cascade with their product, so a miss means a broken row.
        let Some(product) = products.get(&row.product_id) else {
            warn!(
                cart_item_id = row.cart_item_id,
                product_id = row.product_id,
                "Cart item references a missing product"
            );
            continue;
        };

        lines.push(CartSnapshotLine {
            cart_item_id: row.cart_item_id,
            product_id: product.product_id,
            name: product.name.clone(),
            slug: product.slug.clone(),
            unit_price: product.price,
            stock: product.stock,
            quantity: column_u32(row.quantity, "cart_items.quantity")?,
            size: optional_text(row.size),
            color_value: optional_text(row.color_value),
            color_name: optional_text(row.color_name),
            colors: product.colors.clone(),
            images: product.images.clone(),
        });
    }

    debug!(
        customer_id,
        cart_id,
        lines = lines.len(),
        "Loaded cart snapshot"
    );

    Ok(CartSnapshot {
        customer_id,
        cart_id: Some(cart_id),
        lines,
    })
}
