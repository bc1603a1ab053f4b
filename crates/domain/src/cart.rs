// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Cart line identity and option validation.
//!
//! Two cart lines are the same line when they share product, size and
//! color. Adding a matching line increases its quantity instead of
//! creating a duplicate.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::error::DomainError;

/// Largest quantity a single cart line may hold.
pub const MAX_LINE_QUANTITY: u32 = 999;

/// Validates a requested line quantity.
///
/// # Errors
///
/// Returns an error if the quantity is below 1 or above [`MAX_LINE_QUANTITY`].
pub fn validate_quantity(quantity: i64) -> Result<u32, DomainError> {
    u32::try_from(quantity)
        .ok()
        .filter(|q| (1..=MAX_LINE_QUANTITY).contains(q))
        .ok_or(DomainError::InvalidQuantity {
            quantity,
            max: MAX_LINE_QUANTITY,
        })
}

/// The size and color chosen for a cart line.
///
/// Values are canonical: the size label and color value are taken from the
/// product's own definitions, so equal choices compare equal regardless of
/// the case the client sent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct LineOptions {
    /// Size label, if chosen.
    pub size: Option<String>,
    /// Color hex value, if chosen.
    pub color_value: Option<String>,
    /// Color display name, if chosen.
    pub color_name: Option<String>,
}

impl LineOptions {
    /// Resolves client-supplied options against the product's offer.
    ///
    /// - A size must be one of the product's sizes.
    /// - A color may be given by hex value, by name, or both. When both are
    ///   given the hex value wins and the name is replaced by the variant's
    ///   own name.
    ///
    /// # Errors
    ///
    /// Returns an error if the size or color is not offered.
    pub fn resolve(
        product: &Product,
        size: Option<&str>,
        color_value: Option<&str>,
        color_name: Option<&str>,
    ) -> Result<Self, DomainError> {
        let size: Option<&str> = non_blank(size);
        let color_value: Option<&str> = non_blank(color_value);
        let color_name: Option<&str> = non_blank(color_name);

        let size: Option<String> = match size {
            None => None,
            Some(requested) => Some(
                product
                    .size(requested)
                    .ok_or_else(|| DomainError::UnknownSize {
                        product_id: product.product_id,
                        size: requested.to_string(),
                    })?
                    .to_string(),
            ),
        };

        let variant = match (color_value, color_name) {
            (None, None) => None,
            (Some(value), _) => Some(product.color_by_value(value).ok_or_else(|| {
                DomainError::UnknownColor {
                    product_id: product.product_id,
                    color: value.to_string(),
                }
            })?),
            (None, Some(name)) => Some(product.color_by_name(name).ok_or_else(|| {
                DomainError::UnknownColor {
                    product_id: product.product_id,
                    color: name.to_string(),
                }
            })?),
        };

        Ok(Self {
            size,
            color_value: variant.map(|v| v.value.to_ascii_uppercase()),
            color_name: variant.map(|v| v.name.clone()),
        })
    }
}

/// The identity of a cart line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CartLineKey {
    /// The product.
    pub product_id: i64,
    /// Canonical size label, if any.
    pub size: Option<String>,
    /// Canonical color value, if any.
    pub color_value: Option<String>,
}

impl CartLineKey {
    /// Builds the identity of a line from its product and resolved options.
    #[must_use]
    pub fn new(product_id: i64, options: &LineOptions) -> Self {
        Self {
            product_id,
            size: options.size.clone(),
            color_value: options.color_value.clone(),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
