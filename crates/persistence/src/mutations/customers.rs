// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use storefront_domain::{validate_display_name, validate_email};
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::data_models::{CustomerData, now_rfc3339};
use crate::diesel_schema::customers;
use crate::error::PersistenceError;

/// Creates a customer.
///
/// The email is normalized to lowercase for case-insensitive uniqueness.
///
/// # Errors
///
/// Returns an error if the email or display name is invalid,
/// `UniqueViolation` if the email or token is taken, or a database error.
pub fn create_customer(
    conn: &mut SqliteConnection,
    email: &str,
    display_name: &str,
    role: &str,
    api_token: &str,
) -> Result<CustomerData, PersistenceError> {
    validate_email(email.trim())?;
    validate_display_name(display_name)?;

    let normalized_email: String = email.trim().to_lowercase();
    let created_at: String = now_rfc3339()?;

    diesel::insert_into(customers::table)
        .values((
            customers::email.eq(&normalized_email),
            customers::display_name.eq(display_name.trim()),
            customers::role.eq(role),
            customers::api_token.eq(api_token),
            customers::created_at.eq(&created_at),
        ))
        .execute(conn)?;

    let customer_id: i64 = conn.get_last_insert_rowid()?;
    info!(customer_id, role, "Customer created");

    Ok(CustomerData {
        customer_id,
        email: normalized_email,
        display_name: display_name.trim().to_string(),
        role: role.to_string(),
        created_at,
    })
}
