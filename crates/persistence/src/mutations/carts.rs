// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Cart mutations.
//!
//! Every mutation is scoped to the customer's own cart: an item id from
//! another customer's cart is reported as not found.

use diesel::SqliteConnection;
use diesel::prelude::*;
use storefront_domain::{CartLineKey, LineOptions, Product, validate_quantity};
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::data_models::{column_i32, column_u32, now_rfc3339};
use crate::diesel_schema::{cart_items, carts};
use crate::error::PersistenceError;
use crate::queries::carts::{find_matching_line, get_cart_id, get_cart_item};
use crate::queries::catalog::get_product;

/// A line to add to a cart, as the client sent it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CartItemInput {
    pub product_id: i64,
    pub quantity: i64,
    pub size: Option<String>,
    pub color_value: Option<String>,
    pub color_name: Option<String>,
}

/// Adds a line to the customer's cart, creating the cart on first use.
///
/// A line with the same product, size and color as an existing line is
/// merged into it by adding quantities.
///
/// # Returns
///
/// The id of the created or merged cart item.
///
/// # Errors
///
/// Returns an error if the product does not exist, the quantity is out of
/// range, the size or color is not offered, or the database fails.
pub fn add_to_cart(
    conn: &mut SqliteConnection,
    customer_id: i64,
    input: &CartItemInput,
) -> Result<i64, PersistenceError> {
    let quantity: u32 = validate_quantity(input.quantity)?;

    conn.immediate_transaction(|conn| {
        let product: Product = get_product(conn, input.product_id)?
            .ok_or(PersistenceError::ProductNotFound(input.product_id))?;
        let options: LineOptions = LineOptions::resolve(
            &product,
            input.size.as_deref(),
            input.color_value.as_deref(),
            input.color_name.as_deref(),
        )?;

        let cart_id: i64 = get_or_create_cart(conn, customer_id)?;
        let key: CartLineKey = CartLineKey::new(product.product_id, &options);
        let size: &str = options.size.as_deref().unwrap_or_default();
        let color_value: &str = options.color_value.as_deref().unwrap_or_default();
        let color_name: &str = options.color_name.as_deref().unwrap_or_default();

        if let Some(existing) = find_matching_line(conn, cart_id, &key)? {
            let current: u32 = column_u32(existing.quantity, "cart_items.quantity")?;
            let merged: u32 = validate_quantity(i64::from(current) + i64::from(quantity))?;

            diesel::update(cart_items::table)
                .filter(cart_items::cart_item_id.eq(existing.cart_item_id))
                .set((
                    cart_items::quantity.eq(column_i32(merged, "quantity")?),
                    cart_items::color_name.eq(color_name),
                ))
                .execute(conn)?;

            debug!(
                cart_item_id = existing.cart_item_id,
                quantity = merged,
                "Merged cart line"
            );
            return Ok(existing.cart_item_id);
        }

        diesel::insert_into(cart_items::table)
            .values((
                cart_items::cart_id.eq(cart_id),
                cart_items::product_id.eq(product.product_id),
                cart_items::quantity.eq(column_i32(quantity, "quantity")?),
                cart_items::size.eq(size),
                cart_items::color_value.eq(color_value),
                cart_items::color_name.eq(color_name),
            ))
            .execute(conn)?;
        let cart_item_id: i64 = conn.get_last_insert_rowid()?;

        info!(
            customer_id,
            cart_item_id,
            product_id = product.product_id,
            quantity,
            "Added cart line"
        );
        Ok(cart_item_id)
    })
}

/// Sets the quantity of a line in the customer's cart.
///
/// # Errors
///
/// Returns an error if the quantity is out of range, the item is not in
/// the customer's cart, or the database fails.
pub fn update_cart_item_quantity(
    conn: &mut SqliteConnection,
    customer_id: i64,
    cart_item_id: i64,
    quantity: i64,
) -> Result<(), PersistenceError> {
    let quantity: u32 = validate_quantity(quantity)?;
    let cart_id: i64 = owned_cart_item(conn, customer_id, cart_item_id)?;

    diesel::update(cart_items::table)
        .filter(cart_items::cart_item_id.eq(cart_item_id))
        .filter(cart_items::cart_id.eq(cart_id))
        .set(cart_items::quantity.eq(column_i32(quantity, "quantity")?))
        .execute(conn)?;

    debug!(
        customer_id,
        cart_item_id,
        quantity,
        "Updated cart line quantity"
    );
    Ok(())
}

/// Removes one line from the customer's cart.
///
/// # Errors
///
/// Returns an error if the item is not in the customer's cart or the
/// database fails.
pub fn remove_cart_item(
    conn: &mut SqliteConnection,
    customer_id: i64,
    cart_item_id: i64,
) -> Result<(), PersistenceError> {
    let cart_id: i64 = owned_cart_item(conn, customer_id, cart_item_id)?;

    diesel::delete(cart_items::table)
        .filter(cart_items::cart_item_id.eq(cart_item_id))
        .filter(cart_items::cart_id.eq(cart_id))
        .execute(conn)?;

    debug!(customer_id, cart_item_id, "Removed cart line");
    Ok(())
}

/// Removes every line from the customer's cart.
///
/// # Returns
///
/// The number of lines removed.
///
/// # Errors
///
/// Returns an error if the database fails.
pub fn clear_cart(
    conn: &mut SqliteConnection,
    customer_id: i64,
) -> Result<usize, PersistenceError> {
    let Some(cart_id) = get_cart_id(conn, customer_id)? else {
        return Ok(0);
    };

    let removed: usize = diesel::delete(cart_items::table)
        .filter(cart_items::cart_id.eq(cart_id))
        .execute(conn)?;

    debug!(customer_id, removed, "Cleared cart");
    Ok(removed)
}

fn get_or_create_cart(
    conn: &mut SqliteConnection,
    customer_id: i64,
) -> Result<i64, PersistenceError> {
    if let Some(cart_id) = get_cart_id(conn, customer_id)? {
        return Ok(cart_id);
    }

    diesel::insert_into(carts::table)
        .values((
            carts::customer_id.eq(customer_id),
            carts::created_at.eq(now_rfc3339()?),
        ))
        .execute(conn)?;
    let cart_id: i64 = conn.get_last_insert_rowid()?;

    debug!(customer_id, cart_id, "Created cart");
    Ok(cart_id)
}

fn owned_cart_item(
    conn: &mut SqliteConnection,
    customer_id: i64,
    cart_item_id: i64,
) -> Result<i64, PersistenceError> {
    let cart_id: i64 =
        get_cart_id(conn, customer_id)?.ok_or(PersistenceError::CartItemNotFound(cart_item_id))?;

    match get_cart_item(conn, cart_id, cart_item_id)? {
        Some(_) => Ok(cart_id),
        None => Err(PersistenceError::CartItemNotFound(cart_item_id)),
    }
}
