// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Variant image resolution.
//!
//! Picks the single image URL frozen onto an order line. Lookup order,
//! first match wins:
//!
//! 1. color variant whose hex value equals the selected color (ignoring case)
//! 2. color variant whose name equals the selected color name (ignoring case)
//! 3. the product's first image
//! 4. [`FALLBACK_IMAGE_URL`]
//!
//! A variant only matches in steps 1 and 2 if it has at least one image.

use crate::catalog::{ColorVariant, ProductImage};

/// Placeholder used when neither the variant nor the product has an image.
pub const FALLBACK_IMAGE_URL: &str = "/images/placeholder.png";

/// Resolves the image URL for a line item.
///
/// Blank selections are treated as absent.
#[must_use]
pub fn resolve_variant_image<'a>(
    color_value: Option<&str>,
    color_name: Option<&str>,
    colors: &'a [ColorVariant],
    product_images: &'a [ProductImage],
) -> &'a str {
    let color_value: Option<&str> = color_value.map(str::trim).filter(|v| !v.is_empty());
    let color_name: Option<&str> = color_name.map(str::trim).filter(|n| !n.is_empty());

    let by_value = color_value.and_then(|value| {
        colors
            .iter()
            .filter(|c| c.value.eq_ignore_ascii_case(value))
            .find_map(first_image)
    });
    if let Some(url) = by_value {
        return url;
    }

    let by_name = color_name.and_then(|name| {
        colors
            .iter()
            .filter(|c| c.name.eq_ignore_ascii_case(name))
            .find_map(first_image)
    });
    if let Some(url) = by_name {
        return url;
    }

    product_images
        .first()
        .map_or(FALLBACK_IMAGE_URL, |image| image.url.as_str())
}

fn first_image(color: &ColorVariant) -> Option<&str> {
    color.images.first().map(|image| image.url.as_str())
}
