// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use num_traits::ToPrimitive;
use storefront_domain::{DomainError, Money};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::error::PersistenceError;

/// A stored customer, without the API token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerData {
    pub customer_id: i64,
    pub email: String,
    pub display_name: String,
    pub role: String,
    pub created_at: String,
}

/// Current UTC time as an RFC 3339 string.
pub(crate) fn now_rfc3339() -> Result<String, PersistenceError> {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .map_err(|e| PersistenceError::SerializationError(e.to_string()))
}

/// Reads a non-negative integer column into a `u32`.
pub(crate) fn column_u32(value: i32, column: &str) -> Result<u32, PersistenceError> {
    value.to_u32().ok_or_else(|| {
        PersistenceError::ReconstructionError(format!("{column} is negative: {value}"))
    })
}

/// Converts a count into the `INTEGER` column type.
pub(crate) fn column_i32(value: u32, column: &str) -> Result<i32, PersistenceError> {
    value
        .to_i32()
        .ok_or_else(|| PersistenceError::Other(format!("{column} value {value} is out of range")))
}

/// Reads a stored minor-unit amount.
pub(crate) fn column_money(cents: i64, column: &str) -> Result<Money, PersistenceError> {
    Money::from_cents(cents)
        .map_err(|e| PersistenceError::ReconstructionError(format!("{column}: {e}")))
}

/// Converts an amount to minor units for storage.
pub(crate) fn money_cents(amount: Money) -> Result<i64, PersistenceError> {
    amount
        .cents()
        .map_err(|e| PersistenceError::from(DomainError::InvalidPrice(e)))
}

/// Maps an empty stored string to `None`.
pub(crate) fn optional_text(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}
