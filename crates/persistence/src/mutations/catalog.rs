// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Catalog mutations: categories, product create/delete and the
//! version-guarded product edit.

use diesel::SqliteConnection;
use diesel::prelude::*;
use storefront::{
    ColorReconciliation, ImageChange, ImageReconciliation, ProductPatch, ProductUpdatePlan,
    plan_product_update,
};
use storefront_domain::{Category, NewProduct, Product, validate_name, validate_slug};
use tracing::{info, warn};

use crate::backend::PersistenceBackend;
use crate::data_models::{column_i32, column_u32, money_cents, now_rfc3339};
use crate::diesel_schema::{
    categories, color_variant_images, color_variants, product_images, products,
};
use crate::error::PersistenceError;
use crate::queries::catalog::{get_category, get_product, get_product_row};

/// Creates a category.
///
/// # Errors
///
/// Returns an error if the name or slug is invalid, the slug is taken, or
/// the database fails.
pub fn create_category(
    conn: &mut SqliteConnection,
    name: &str,
    slug: &str,
) -> Result<Category, PersistenceError> {
    validate_name(name)?;
    validate_slug(slug)?;

    diesel::insert_into(categories::table)
        .values((categories::name.eq(name.trim()), categories::slug.eq(slug)))
        .execute(conn)?;

    let category_id: i64 = conn.get_last_insert_rowid()?;
    info!(category_id, slug, "Category created");

    Ok(Category {
        category_id,
        name: name.trim().to_string(),
        slug: slug.to_string(),
    })
}

/// Creates a product with its images and color variants.
///
/// # Errors
///
/// Returns an error if a field is invalid, the category does not exist,
/// the slug is taken, or the database fails.
pub fn create_product(
    conn: &mut SqliteConnection,
    product: &NewProduct,
) -> Result<Product, PersistenceError> {
    product.validate()?;

    let product_id: i64 = conn.immediate_transaction(|conn| {
        if let Some(category_id) = product.category_id {
            ensure_category_exists(conn, category_id)?;
        }

        let now: String = now_rfc3339()?;
        diesel::insert_into(products::table)
            .values((
                products::category_id.eq(product.category_id),
                products::name.eq(product.name.trim()),
                products::slug.eq(&product.slug),
                products::price_cents.eq(money_cents(product.price)?),
                products::stock.eq(column_i32(product.stock, "stock")?),
                products::version.eq(0),
                products::sizes_json.eq(serde_json::to_string(&product.sizes)?),
                products::created_at.eq(&now),
                products::updated_at.eq(&now),
            ))
            .execute(conn)?;
        let product_id: i64 = conn.get_last_insert_rowid()?;

        for (index, image) in product.images.iter().enumerate() {
            insert_product_image(conn, product_id, &image.url, position(index))?;
        }
        for (index, color) in product.colors.iter().enumerate() {
            let color_id: i64 = insert_color(
                conn,
                product_id,
                color.name.trim(),
                &color.value.to_ascii_uppercase(),
                position(index),
            )?;
            for (image_index, image) in color.images.iter().enumerate() {
                insert_color_image(conn, color_id, &image.url, position(image_index))?;
            }
        }

        Ok::<i64, PersistenceError>(product_id)
    })?;

    info!(product_id, slug = %product.slug, "Product created");

    get_product(conn, product_id)?.ok_or(PersistenceError::ProductNotFound(product_id))
}

/// Applies an admin edit to a product, guarded by its version.
///
/// In one transaction:
///
/// 1. reads the product; a missing product is `ProductNotFound`
/// 2. compares the stored version with `expected_version`; a mismatch is
///    `VersionConflict`
/// 3. writes scalars and `version = version + 1` with `WHERE product_id = ?
///    AND version = ?` (and `AND stock = ?` when the edit sets stock)
/// 4. reconciles images and color variants by id
///
/// # Errors
///
/// Returns an error if the product is missing, the version or stock moved,
/// the patch is invalid, or the database fails.
pub fn update_product(
    conn: &mut SqliteConnection,
    product_id: i64,
    expected_version: u32,
    patch: ProductPatch,
) -> Result<Product, PersistenceError> {
    let new_version: u32 = conn.immediate_transaction(|conn| {
        let row = get_product_row(conn, product_id)?
            .ok_or(PersistenceError::ProductNotFound(product_id))?;
        let actual: u32 = column_u32(row.version, "products.version")?;
        if actual != expected_version {
            warn!(
                product_id,
                expected = expected_version,
                actual,
                "Rejected stale product edit"
            );
            return Err(PersistenceError::VersionConflict {
                product_id,
                expected: expected_version,
                actual,
            });
        }

        let current: Product =
            get_product(conn, product_id)?.ok_or(PersistenceError::ProductNotFound(product_id))?;
        let plan: ProductUpdatePlan = plan_product_update(&current, expected_version, patch)?;

        if let Some(category_id) = plan.category_id {
            ensure_category_exists(conn, category_id)?;
        }

        write_guarded_product_row(conn, &plan)?;

        if let Some(images) = &plan.images {
            reconcile_product_images(conn, product_id, images)?;
        }
        if let Some(colors) = &plan.colors {
            reconcile_colors(conn, product_id, colors)?;
        }

        Ok::<u32, PersistenceError>(expected_version + 1)
    })?;

    info!(product_id, version = new_version, "Product updated");

    get_product(conn, product_id)?.ok_or(PersistenceError::ProductNotFound(product_id))
}

/// Deletes a product. Its images, colors and cart lines go with it; order
/// items keep their frozen copy and lose only the link.
///
/// # Errors
///
/// Returns `ProductNotFound` if nothing was deleted, or a database error.
pub fn delete_product(
    conn: &mut SqliteConnection,
    product_id: i64,
) -> Result<(), PersistenceError> {
    let affected: usize = diesel::delete(products::table)
        .filter(products::product_id.eq(product_id))
        .execute(conn)?;

    if affected == 0 {
        return Err(PersistenceError::ProductNotFound(product_id));
    }

    info!(product_id, "Product deleted");
    Ok(())
}

/// Runs the version-guarded `UPDATE` and maps zero affected rows to the
/// conflict that caused it.
fn write_guarded_product_row(
    conn: &mut SqliteConnection,
    plan: &ProductUpdatePlan,
) -> Result<(), PersistenceError> {
    let expected_version: i32 = column_i32(plan.expected_version, "version")?;
    let now: String = now_rfc3339()?;
    let sizes_json: String = serde_json::to_string(&plan.sizes)?;
    let price_cents: i64 = money_cents(plan.price)?;

    let scalars = (
        products::name.eq(plan.name.trim()),
        products::slug.eq(&plan.slug),
        products::category_id.eq(plan.category_id),
        products::price_cents.eq(price_cents),
        products::sizes_json.eq(&sizes_json),
        products::version.eq(products::version + 1),
        products::updated_at.eq(&now),
    );

    let affected: usize = match plan.stock {
        None => diesel::update(products::table)
            .filter(products::product_id.eq(plan.product_id))
            .filter(products::version.eq(expected_version))
            .set(scalars)
            .execute(conn)?,
        Some((observed, new)) => diesel::update(products::table)
            .filter(products::product_id.eq(plan.product_id))
            .filter(products::version.eq(expected_version))
            .filter(products::stock.eq(column_i32(observed, "stock")?))
            .set((scalars, products::stock.eq(column_i32(new, "stock")?)))
            .execute(conn)?,
    };

    if affected == 1 {
        return Ok(());
    }

    let row = get_product_row(conn, plan.product_id)?
        .ok_or(PersistenceError::ProductNotFound(plan.product_id))?;
    let actual_version: u32 = column_u32(row.version, "products.version")?;
    if actual_version != plan.expected_version {
        return Err(PersistenceError::VersionConflict {
            product_id: plan.product_id,
            expected: plan.expected_version,
            actual: actual_version,
        });
    }

    let observed: u32 = plan.stock.map_or(0, |(observed, _)| observed);
    Err(PersistenceError::StockChanged {
        product_id: plan.product_id,
        expected: observed,
        actual: column_u32(row.stock, "products.stock")?,
    })
}

fn reconcile_product_images(
    conn: &mut SqliteConnection,
    product_id: i64,
    images: &ImageReconciliation,
) -> Result<(), PersistenceError> {
    if !images.deletes.is_empty() {
        diesel::delete(product_images::table)
            .filter(product_images::product_id.eq(product_id))
            .filter(product_images::image_id.eq_any(&images.deletes))
            .execute(conn)?;
    }

    for change in &images.upserts {
        match change.image_id {
            Some(image_id) => {
                diesel::update(product_images::table)
                    .filter(product_images::image_id.eq(image_id))
                    .filter(product_images::product_id.eq(product_id))
                    .set((
                        product_images::url.eq(&change.url),
                        product_images::position.eq(change.position),
                    ))
                    .execute(conn)?;
            }
            None => insert_product_image(conn, product_id, &change.url, change.position)?,
        }
    }
    Ok(())
}

fn reconcile_colors(
    conn: &mut SqliteConnection,
    product_id: i64,
    colors: &ColorReconciliation,
) -> Result<(), PersistenceError> {
    if !colors.deletes.is_empty() {
        diesel::delete(color_variants::table)
            .filter(color_variants::product_id.eq(product_id))
            .filter(color_variants::color_id.eq_any(&colors.deletes))
            .execute(conn)?;
    }

    for change in &colors.upserts {
        let color_id: i64 = match change.color_id {
            Some(color_id) => {
                diesel::update(color_variants::table)
                    .filter(color_variants::color_id.eq(color_id))
                    .filter(color_variants::product_id.eq(product_id))
                    .set((
                        color_variants::name.eq(&change.name),
                        color_variants::value.eq(&change.value),
                        color_variants::position.eq(change.position),
                    ))
                    .execute(conn)?;
                color_id
            }
            None => insert_color(
                conn,
                product_id,
                &change.name,
                &change.value,
                change.position,
            )?,
        };
        reconcile_color_images(conn, color_id, &change.images)?;
    }
    Ok(())
}

fn reconcile_color_images(
    conn: &mut SqliteConnection,
    color_id: i64,
    images: &ImageReconciliation,
) -> Result<(), PersistenceError> {
    if !images.deletes.is_empty() {
        diesel::delete(color_variant_images::table)
            .filter(color_variant_images::color_id.eq(color_id))
            .filter(color_variant_images::image_id.eq_any(&images.deletes))
            .execute(conn)?;
    }

    for ImageChange {
        image_id,
        url,
        position,
    } in &images.upserts
    {
        match image_id {
            Some(image_id) => {
                diesel::update(color_variant_images::table)
                    .filter(color_variant_images::image_id.eq(*image_id))
                    .filter(color_variant_images::color_id.eq(color_id))
                    .set((
                        color_variant_images::url.eq(url),
                        color_variant_images::position.eq(*position),
                    ))
                    .execute(conn)?;
            }
            None => insert_color_image(conn, color_id, url, *position)?,
        }
    }
    Ok(())
}

fn insert_product_image(
    conn: &mut SqliteConnection,
    product_id: i64,
    url: &str,
    position: i32,
) -> Result<(), PersistenceError> {
    diesel::insert_into(product_images::table)
        .values((
            product_images::product_id.eq(product_id),
            product_images::url.eq(url),
            product_images::position.eq(position),
        ))
        .execute(conn)?;
    Ok(())
}

fn insert_color(
    conn: &mut SqliteConnection,
    product_id: i64,
    name: &str,
    value: &str,
    position: i32,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(color_variants::table)
        .values((
            color_variants::product_id.eq(product_id),
            color_variants::name.eq(name),
            color_variants::value.eq(value),
            color_variants::position.eq(position),
        ))
        .execute(conn)?;
    conn.get_last_insert_rowid()
}

fn insert_color_image(
    conn: &mut SqliteConnection,
    color_id: i64,
    url: &str,
    position: i32,
) -> Result<(), PersistenceError> {
    diesel::insert_into(color_variant_images::table)
        .values((
            color_variant_images::color_id.eq(color_id),
            color_variant_images::url.eq(url),
            color_variant_images::position.eq(position),
        ))
        .execute(conn)?;
    Ok(())
}

fn ensure_category_exists(
    conn: &mut SqliteConnection,
    category_id: i64,
) -> Result<(), PersistenceError> {
    match get_category(conn, category_id)? {
        Some(_) => Ok(()),
        None => Err(PersistenceError::CategoryNotFound(category_id)),
    }
}

fn position(index: usize) -> i32 {
    i32::try_from(index).unwrap_or(i32::MAX)
}
