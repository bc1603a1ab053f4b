// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Customer queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;

use crate::data_models::CustomerData;
use crate::diesel_schema::customers;
use crate::error::PersistenceError;

/// Diesel Queryable struct for customer rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = customers)]
struct CustomerRow {
    customer_id: i64,
    email: String,
    display_name: String,
    role: String,
    created_at: String,
}

impl From<CustomerRow> for CustomerData {
    fn from(row: CustomerRow) -> Self {
        Self {
            customer_id: row.customer_id,
            email: row.email,
            display_name: row.display_name,
            role: row.role,
            created_at: row.created_at,
        }
    }
}

/// Retrieves the customer owning an API token.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no customer has the token.
pub fn get_customer_by_token(
    conn: &mut SqliteConnection,
    api_token: &str,
) -> Result<Option<CustomerData>, PersistenceError> {
    let row: Option<CustomerRow> = customers::table
        .filter(customers::api_token.eq(api_token))
        .select(CustomerRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(CustomerData::from))
}

/// Retrieves a customer by id.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the customer is not found.
pub fn get_customer_by_id(
    conn: &mut SqliteConnection,
    customer_id: i64,
) -> Result<Option<CustomerData>, PersistenceError> {
    debug!(customer_id, "Looking up customer");

    let row: Option<CustomerRow> = customers::table
        .filter(customers::customer_id.eq(customer_id))
        .select(CustomerRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(CustomerData::from))
}

/// Counts customers with the given role.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_customers_with_role(
    conn: &mut SqliteConnection,
    role: &str,
) -> Result<i64, PersistenceError> {
    customers::table
        .filter(customers::role.eq(role))
        .count()
        .get_result(conn)
        .map_err(PersistenceError::from)
}
