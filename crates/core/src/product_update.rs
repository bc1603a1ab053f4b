// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Product edit planning.
//!
//! A patch replaces scalar fields it sets and reconciles the image and
//! color collections it carries against what the product currently owns:
//!
//! - entries without an id are inserted
//! - entries with an id the product owns are updated in place
//! - owned ids missing from the patch are deleted
//!
//! Collections the patch leaves as `None` are untouched.

use std::collections::HashSet;

use storefront_domain::{
    ColorVariant, Money, Product, ProductImage, validate_color_name, validate_color_value,
    validate_image_url, validate_name, validate_sizes, validate_slug,
};

use crate::error::CoreError;

/// Admin edit to a product. Unset fields keep their current value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductPatch {
    /// New name.
    pub name: Option<String>,
    /// New slug.
    pub slug: Option<String>,
    /// New category. `Some(None)` removes the category.
    pub category_id: Option<Option<i64>>,
    /// New unit price.
    pub price: Option<Money>,
    /// New stock count.
    pub stock: Option<u32>,
    /// Full replacement size list.
    pub sizes: Option<Vec<String>>,
    /// Desired color variants.
    pub colors: Option<Vec<ColorVariant>>,
    /// Desired product images.
    pub images: Option<Vec<ProductImage>>,
}

/// An image row to insert (`image_id` is `None`) or update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageChange {
    /// Existing image, or `None` for a new one.
    pub image_id: Option<i64>,
    /// URL.
    pub url: String,
    /// Display position.
    pub position: i32,
}

/// Image changes for one owner (a product or a color variant).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageReconciliation {
    /// Rows to insert or update, in display order.
    pub upserts: Vec<ImageChange>,
    /// Owned rows to delete.
    pub deletes: Vec<i64>,
}

/// A color variant row to insert (`color_id` is `None`) or update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorChange {
    /// Existing variant, or `None` for a new one.
    pub color_id: Option<i64>,
    /// Display name.
    pub name: String,
    /// Hex value.
    pub value: String,
    /// Display position.
    pub position: i32,
    /// The variant's own images.
    pub images: ImageReconciliation,
}

/// Color variant changes for a product.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColorReconciliation {
    /// Variants to insert or update, in display order.
    pub upserts: Vec<ColorChange>,
    /// Owned variants to delete. Their images go with them.
    pub deletes: Vec<i64>,
}

/// The resolved product row after the edit plus the child row changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductUpdatePlan {
    /// The product.
    pub product_id: i64,
    /// The version the edit was based on. Asserted by the guarded update.
    pub expected_version: u32,
    /// Name after the edit.
    pub name: String,
    /// Slug after the edit.
    pub slug: String,
    /// Category after the edit.
    pub category_id: Option<i64>,
    /// Price after the edit.
    pub price: Money,
    /// `(observed, new)` stock when the patch sets stock.
    pub stock: Option<(u32, u32)>,
    /// Sizes after the edit.
    pub sizes: Vec<String>,
    /// Product image changes, if the patch carried images.
    pub images: Option<ImageReconciliation>,
    /// Color changes, if the patch carried colors.
    pub colors: Option<ColorReconciliation>,
}

/// Plans an edit of `current` based on `expected_version`.
///
/// Version comparison is left to the guarded write; this only resolves
/// what the write should contain.
///
/// # Errors
///
/// Returns an error if:
/// - a scalar field fails validation
/// - a color or image fails validation
/// - an id in the patch is not owned by the product (or color)
/// - an id appears twice
pub fn plan_product_update(
    current: &Product,
    expected_version: u32,
    patch: ProductPatch,
) -> Result<ProductUpdatePlan, CoreError> {
    if let Some(name) = &patch.name {
        validate_name(name)?;
    }
    if let Some(slug) = &patch.slug {
        validate_slug(slug)?;
    }
    if let Some(sizes) = &patch.sizes {
        validate_sizes(sizes)?;
    }

    let images: Option<ImageReconciliation> = patch
        .images
        .as_deref()
        .map(|desired| reconcile_images(&current.images, desired))
        .transpose()?;

    let colors: Option<ColorReconciliation> = patch
        .colors
        .as_deref()
        .map(|desired| reconcile_colors(&current.colors, desired))
        .transpose()?;

    Ok(ProductUpdatePlan {
        product_id: current.product_id,
        expected_version,
        name: patch.name.unwrap_or_else(|| current.name.clone()),
        slug: patch.slug.unwrap_or_else(|| current.slug.clone()),
        category_id: patch.category_id.unwrap_or(current.category_id),
        price: patch.price.unwrap_or(current.price),
        stock: patch.stock.map(|new| (current.stock, new)),
        sizes: patch.sizes.unwrap_or_else(|| current.sizes.clone()),
        images,
        colors,
    })
}

fn reconcile_images(
    current: &[ProductImage],
    desired: &[ProductImage],
) -> Result<ImageReconciliation, CoreError> {
    let owned: HashSet<i64> = current.iter().filter_map(|i| i.image_id).collect();
    let mut kept: HashSet<i64> = HashSet::new();
    let mut upserts: Vec<ImageChange> = Vec::with_capacity(desired.len());

    for (index, image) in desired.iter().enumerate() {
        validate_image_url(&image.url)?;
        if let Some(id) = image.image_id {
            claim(&owned, &mut kept, "image", id)?;
        }
        upserts.push(ImageChange {
            image_id: image.image_id,
            url: image.url.clone(),
            position: position(index),
        });
    }

    Ok(ImageReconciliation {
        upserts,
        deletes: removed(current.iter().filter_map(|i| i.image_id), &kept),
    })
}

fn reconcile_colors(
    current: &[ColorVariant],
    desired: &[ColorVariant],
) -> Result<ColorReconciliation, CoreError> {
    let owned: HashSet<i64> = current.iter().filter_map(|c| c.color_id).collect();
    let mut kept: HashSet<i64> = HashSet::new();
    let mut upserts: Vec<ColorChange> = Vec::with_capacity(desired.len());

    for (index, color) in desired.iter().enumerate() {
        validate_color_name(&color.name)?;
        validate_color_value(&color.value)?;

        let existing_images: &[ProductImage] = match color.color_id {
            Some(id) => {
                claim(&owned, &mut kept, "color", id)?;
                current
                    .iter()
                    .find(|c| c.color_id == Some(id))
                    .map(|c| c.images.as_slice())
                    .unwrap_or_default()
            }
            None => &[],
        };

        upserts.push(ColorChange {
            color_id: color.color_id,
            name: color.name.trim().to_string(),
            value: color.value.to_ascii_uppercase(),
            position: position(index),
            images: reconcile_images(existing_images, &color.images)?,
        });
    }

    Ok(ColorReconciliation {
        upserts,
        deletes: removed(current.iter().filter_map(|c| c.color_id), &kept),
    })
}

fn claim(
    owned: &HashSet<i64>,
    kept: &mut HashSet<i64>,
    kind: &'static str,
    id: i64,
) -> Result<(), CoreError> {
    if !owned.contains(&id) {
        return Err(CoreError::UnknownEntity { kind, id });
    }
    if !kept.insert(id) {
        return Err(CoreError::DuplicateEntity { kind, id });
    }
    Ok(())
}

fn removed(current: impl Iterator<Item = i64>, kept: &HashSet<i64>) -> Vec<i64> {
    current.filter(|id| !kept.contains(id)).collect()
}

fn position(index: usize) -> i32 {
    i32::try_from(index).unwrap_or(i32::MAX)
}
