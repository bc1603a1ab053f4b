// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Catalog types: products, their color variants and images.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::money::Money;
use crate::validation::{
    validate_color_name, validate_color_value, validate_image_url, validate_name,
    validate_sizes, validate_slug,
};

/// An image attached to a product or to one of its color variants.
///
/// `image_id` is `None` until the image has been persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImage {
    /// The canonical identifier, if persisted.
    pub image_id: Option<i64>,
    /// The image URL.
    pub url: String,
}

impl ProductImage {
    /// Creates an image that has not been persisted yet.
    #[must_use]
    pub fn new(url: &str) -> Self {
        Self {
            image_id: None,
            url: url.to_string(),
        }
    }
}

/// A color a product is offered in.
///
/// Variants are owned by exactly one product and are deleted with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorVariant {
    /// The canonical identifier, if persisted.
    pub color_id: Option<i64>,
    /// Display name, e.g. "Dark Green".
    pub name: String,
    /// Hex color code in `#RRGGBB` form.
    pub value: String,
    /// Images showing the product in this color, in display order.
    pub images: Vec<ProductImage>,
}

impl ColorVariant {
    /// Creates a variant that has not been persisted yet.
    #[must_use]
    pub fn new(name: &str, value: &str, images: Vec<ProductImage>) -> Self {
        Self {
            color_id: None,
            name: name.to_string(),
            value: value.to_string(),
            images,
        }
    }

    /// Validates the variant name, hex value and image URLs.
    ///
    /// # Errors
    ///
    /// Returns the first field that fails validation.
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_color_name(&self.name)?;
        validate_color_value(&self.value)?;
        self.images
            .iter()
            .try_for_each(|image| validate_image_url(&image.url))
    }
}

/// A product as stored in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// The canonical identifier.
    pub product_id: i64,
    /// The category, if any.
    pub category_id: Option<i64>,
    /// Display name.
    pub name: String,
    /// Unique URL slug.
    pub slug: String,
    /// Current unit price.
    pub price: Money,
    /// Units available for sale. Never negative.
    pub stock: u32,
    /// Optimistic concurrency version. Incremented on every admin edit.
    pub version: u32,
    /// Size labels offered, in display order. Empty when the product is unsized.
    pub sizes: Vec<String>,
    /// Color variants, in display order.
    pub colors: Vec<ColorVariant>,
    /// Product-level images, in display order.
    pub images: Vec<ProductImage>,
}

impl Product {
    /// Finds a variant by its hex value, ignoring case.
    #[must_use]
    pub fn color_by_value(&self, value: &str) -> Option<&ColorVariant> {
        self.colors
            .iter()
            .find(|c| c.value.eq_ignore_ascii_case(value))
    }

    /// Finds a variant by its display name, ignoring case.
    #[must_use]
    pub fn color_by_name(&self, name: &str) -> Option<&ColorVariant> {
        self.colors
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Finds an offered size, ignoring case, and returns its canonical label.
    #[must_use]
    pub fn size(&self, size: &str) -> Option<&str> {
        self.sizes
            .iter()
            .find(|s| s.eq_ignore_ascii_case(size))
            .map(String::as_str)
    }
}

/// Input for creating a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    /// The category, if any.
    pub category_id: Option<i64>,
    /// Display name.
    pub name: String,
    /// Unique URL slug.
    pub slug: String,
    /// Unit price.
    pub price: Money,
    /// Initial stock.
    pub stock: u32,
    /// Size labels offered.
    pub sizes: Vec<String>,
    /// Color variants.
    pub colors: Vec<ColorVariant>,
    /// Product-level images.
    pub images: Vec<ProductImage>,
}

impl NewProduct {
    /// Validates every field of the new product.
    ///
    /// # Errors
    ///
    /// Returns the first field that fails validation.
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_name(&self.name)?;
        validate_slug(&self.slug)?;
        validate_sizes(&self.sizes)?;
        self.colors.iter().try_for_each(ColorVariant::validate)?;
        self.images
            .iter()
            .try_for_each(|image| validate_image_url(&image.url))
    }
}

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// The canonical identifier.
    pub category_id: i64,
    /// Display name.
    pub name: String,
    /// Unique URL slug.
    pub slug: String,
}
