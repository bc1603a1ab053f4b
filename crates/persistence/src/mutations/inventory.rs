// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Inventory ledger.
//!
//! Stock only moves through these two statements. Neither reads stock
//! into the application and writes it back: the arithmetic happens inside
//! the `UPDATE`, and the decrement asserts availability in its `WHERE`
//! clause, so a concurrent writer can never be overwritten.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::{debug, warn};

use crate::data_models::{column_i32, column_u32};
use crate::diesel_schema::products;
use crate::error::PersistenceError;

/// Takes `quantity` units of a product out of stock.
///
/// Runs `UPDATE products SET stock = stock - q WHERE product_id = ? AND
/// stock >= q`. Must run inside the checkout transaction so a failure rolls
/// back every earlier decrement.
///
/// # Errors
///
/// Returns `InsufficientStock` if the row did not match, `ProductNotFound`
/// if the product no longer exists, or a database error.
pub fn reserve_stock(
    conn: &mut SqliteConnection,
    product_id: i64,
    quantity: u32,
) -> Result<(), PersistenceError> {
    let qty: i32 = column_i32(quantity, "quantity")?;

    let affected: usize = diesel::update(products::table)
        .filter(products::product_id.eq(product_id))
        .filter(products::stock.ge(qty))
        .set(products::stock.eq(products::stock - qty))
        .execute(conn)?;

    if affected == 1 {
        debug!(product_id, quantity, "Reserved stock");
        return Ok(());
    }

    let available: Option<i32> = products::table
        .filter(products::product_id.eq(product_id))
        .select(products::stock)
        .first(conn)
        .optional()?;

    match available {
        Some(available) => {
            let available: u32 = column_u32(available, "products.stock")?;
            warn!(
                product_id,
                requested = quantity,
                available,
                "Insufficient stock"
            );
            Err(PersistenceError::InsufficientStock {
                product_id,
                requested: quantity,
                available,
            })
        }
        None => Err(PersistenceError::ProductNotFound(product_id)),
    }
}

/// Returns `quantity` units of a product to stock.
///
/// Returns `false` if the product has since been deleted; there is nothing
/// left to restock in that case.
///
/// # Errors
///
/// Returns an error if the database update fails.
pub fn release_stock(
    conn: &mut SqliteConnection,
    product_id: i64,
    quantity: u32,
) -> Result<bool, PersistenceError> {
    let qty: i32 = column_i32(quantity, "quantity")?;

    let affected: usize = diesel::update(products::table)
        .filter(products::product_id.eq(product_id))
        .set(products::stock.eq(products::stock + qty))
        .execute(conn)?;

    debug!(
        product_id,
        quantity,
        restocked = affected == 1,
        "Released stock"
    );

    Ok(affected == 1)
}
