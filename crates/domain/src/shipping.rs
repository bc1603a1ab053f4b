// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::validation::{MAX_TEXT_LENGTH, validate_email};

/// Shipping details captured on an order.
///
/// This is a snapshot taken at checkout. Later edits to the customer's
/// profile never change an existing order's shipping details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ShippingInfo {
    /// Recipient name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// State, province or region. May be empty where not applicable.
    pub region: String,
    /// Postal code.
    pub postal_code: String,
    /// Country.
    pub country: String,
    /// Contact phone number.
    pub phone: String,
}

impl ShippingInfo {
    /// Validates the shipping details.
    ///
    /// Every field except `region` is required.
    ///
    /// # Errors
    ///
    /// Returns the first missing or malformed field.
    pub fn validate(&self) -> Result<(), DomainError> {
        let required: [(&'static str, &str); 7] = [
            ("name", &self.name),
            ("email", &self.email),
            ("address", &self.address),
            ("city", &self.city),
            ("postal_code", &self.postal_code),
            ("country", &self.country),
            ("phone", &self.phone),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(DomainError::MissingShippingField { field });
            }
        }

        let all: [(&'static str, &str); 8] = [
            ("name", &self.name),
            ("email", &self.email),
            ("address", &self.address),
            ("city", &self.city),
            ("region", &self.region),
            ("postal_code", &self.postal_code),
            ("country", &self.country),
            ("phone", &self.phone),
        ];

        for (field, value) in all {
            if value.chars().count() > MAX_TEXT_LENGTH {
                return Err(DomainError::InvalidShippingField {
                    field,
                    reason: format!("cannot exceed {MAX_TEXT_LENGTH} characters"),
                });
            }
        }

        validate_email(self.email.trim()).map_err(|_| DomainError::InvalidShippingField {
            field: "email",
            reason: format!("'{}' is not a valid email address", self.email),
        })?;

        if !self
            .phone
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')' | '.'))
        {
            return Err(DomainError::InvalidShippingField {
                field: "phone",
                reason: String::from("may only contain digits, spaces and + - ( ) ."),
            });
        }

        Ok(())
    }

    /// Returns a copy with surrounding whitespace removed from every field.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            address: self.address.trim().to_string(),
            city: self.city.trim().to_string(),
            region: self.region.trim().to_string(),
            postal_code: self.postal_code.trim().to_string(),
            country: self.country.trim().to_string(),
            phone: self.phone.trim().to_string(),
        }
    }
}
