// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Catalog queries.
//!
//! Products are read as a full graph: the product row, its images, its
//! color variants and each variant's images. Child rows are loaded in one
//! query per table for any number of products and grouped in memory.

use std::collections::HashMap;

use diesel::SqliteConnection;
use diesel::prelude::*;
use storefront_domain::{Category, ColorVariant, Product, ProductFilter, ProductImage};
use tracing::debug;

use crate::data_models::{column_money, column_u32, money_cents};
use crate::diesel_schema::{
    categories, color_variant_images, color_variants, product_images, products,
};
use crate::error::PersistenceError;

/// Diesel Queryable struct for product rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = products)]
pub(crate) struct ProductRow {
    pub(crate) product_id: i64,
    pub(crate) category_id: Option<i64>,
    pub(crate) name: String,
    pub(crate) slug: String,
    pub(crate) price_cents: i64,
    pub(crate) stock: i32,
    pub(crate) version: i32,
    pub(crate) sizes_json: String,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = product_images)]
struct ProductImageRow {
    image_id: i64,
    product_id: i64,
    url: String,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = color_variants)]
struct ColorVariantRow {
    color_id: i64,
    product_id: i64,
    name: String,
    value: String,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = color_variant_images)]
struct ColorImageRow {
    image_id: i64,
    color_id: i64,
    url: String,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = categories)]
struct CategoryRow {
    category_id: i64,
    name: String,
    slug: String,
}

/// Reads the bare product row.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the product is not found.
pub(crate) fn get_product_row(
    conn: &mut SqliteConnection,
    product_id: i64,
) -> Result<Option<ProductRow>, PersistenceError> {
    products::table
        .filter(products::product_id.eq(product_id))
        .select(ProductRow::as_select())
        .first(conn)
        .optional()
        .map_err(PersistenceError::from)
}

/// Retrieves a product with its images and color variants.
///
/// # Errors
///
/// Returns an error if the database query fails or a stored value is invalid.
/// Returns `Ok(None)` if the product is not found.
pub fn get_product(
    conn: &mut SqliteConnection,
    product_id: i64,
) -> Result<Option<Product>, PersistenceError> {
    debug!(product_id, "Loading product");

    let Some(row) = get_product_row(conn, product_id)? else {
        return Ok(None);
    };
    Ok(load_product_graphs(conn, vec![row])?.pop())
}

/// Retrieves a product by its slug.
///
/// # Errors
///
/// Returns an error if the database query fails or a stored value is invalid.
/// Returns `Ok(None)` if no product has the slug.
pub fn get_product_by_slug(
    conn: &mut SqliteConnection,
    slug: &str,
) -> Result<Option<Product>, PersistenceError> {
    debug!(slug, "Loading product by slug");

    let row: Option<ProductRow> = products::table
        .filter(products::slug.eq(slug))
        .select(ProductRow::as_select())
        .first(conn)
        .optional()?;

    match row {
        Some(row) => Ok(load_product_graphs(conn, vec![row])?.pop()),
        None => Ok(None),
    }
}

/// Retrieves several products by id, in no particular order.
///
/// Ids without a product are skipped.
///
/// # Errors
///
/// Returns an error if the database query fails or a stored value is invalid.
pub fn get_products_by_ids(
    conn: &mut SqliteConnection,
    product_ids: &[i64],
) -> Result<Vec<Product>, PersistenceError> {
    if product_ids.is_empty() {
        return Ok(Vec::new());
    }

    let rows: Vec<ProductRow> = products::table
        .filter(products::product_id.eq_any(product_ids))
        .select(ProductRow::as_select())
        .load(conn)?;

    load_product_graphs(conn, rows)
}

/// Lists products matching a filter, ordered by id.
///
/// # Errors
///
/// Returns an error if the filter is invalid, the database query fails or a
/// stored value is invalid.
pub fn list_products(
    conn: &mut SqliteConnection,
    filter: &ProductFilter,
) -> Result<Vec<Product>, PersistenceError> {
    filter.validate()?;

    let mut query = products::table
        .select(ProductRow::as_select())
        .into_boxed();

    if let Some(category_id) = filter.category_id {
        query = query.filter(products::category_id.eq(category_id));
    }
    if let Some(search) = filter.search_text() {
        // SQLite LIKE ignores ASCII case.
        let pattern: String = format!("%{}%", escape_like(search));
        query = query.filter(products::name.like(pattern).escape('\\'));
    }
    if let Some(min) = filter.min_price {
        query = query.filter(products::price_cents.ge(money_cents(min)?));
    }
    if let Some(max) = filter.max_price {
        query = query.filter(products::price_cents.le(money_cents(max)?));
    }
    if filter.in_stock_only {
        query = query.filter(products::stock.gt(0));
    }

    let rows: Vec<ProductRow> = query
        .order(products::product_id.asc())
        .limit(i64::from(filter.page.limit))
        .offset(i64::from(filter.page.offset))
        .load(conn)?;

    debug!(count = rows.len(), "Listed products");

    load_product_graphs(conn, rows)
}

/// Lists every category, ordered by name.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_categories(conn: &mut SqliteConnection) -> Result<Vec<Category>, PersistenceError> {
    let rows: Vec<CategoryRow> = categories::table
        .select(CategoryRow::as_select())
        .order((categories::name.asc(), categories::category_id.asc()))
        .load(conn)?;

    Ok(rows.into_iter().map(category_from_row).collect())
}

/// Retrieves a category by id.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the category is not found.
pub fn get_category(
    conn: &mut SqliteConnection,
    category_id: i64,
) -> Result<Option<Category>, PersistenceError> {
    let row: Option<CategoryRow> = categories::table
        .filter(categories::category_id.eq(category_id))
        .select(CategoryRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(category_from_row))
}

fn category_from_row(row: CategoryRow) -> Category {
    Category {
        category_id: row.category_id,
        name: row.name,
        slug: row.slug,
    }
}

fn escape_like(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Attaches images and color variants to product rows, keeping row order.
fn load_product_graphs(
    conn: &mut SqliteConnection,
    rows: Vec<ProductRow>,
) -> Result<Vec<Product>, PersistenceError> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<i64> = rows.iter().map(|r| r.product_id).collect();

    let image_rows: Vec<ProductImageRow> = product_images::table
        .filter(product_images::product_id.eq_any(&ids))
        .select(ProductImageRow::as_select())
        .order((product_images::position.asc(), product_images::image_id.asc()))
        .load(conn)?;

    let color_rows: Vec<ColorVariantRow> = color_variants::table
        .filter(color_variants::product_id.eq_any(&ids))
        .select(ColorVariantRow::as_select())
        .order((color_variants::position.asc(), color_variants::color_id.asc()))
        .load(conn)?;

    let color_ids: Vec<i64> = color_rows.iter().map(|c| c.color_id).collect();
    let color_image_rows: Vec<ColorImageRow> = if color_ids.is_empty() {
        Vec::new()
    } else {
        color_variant_images::table
            .filter(color_variant_images::color_id.eq_any(&color_ids))
            .select(ColorImageRow::as_select())
            .order((
                color_variant_images::position.asc(),
                color_variant_images::image_id.asc(),
            ))
            .load(conn)?
    };

    let mut images_by_product: HashMap<i64, Vec<ProductImage>> = HashMap::new();
    for row in image_rows {
        images_by_product
            .entry(row.product_id)
            .or_default()
            .push(ProductImage {
                image_id: Some(row.image_id),
                url: row.url,
            });
    }

    let mut images_by_color: HashMap<i64, Vec<ProductImage>> = HashMap::new();
    for row in color_image_rows {
        images_by_color
            .entry(row.color_id)
            .or_default()
            .push(ProductImage {
                image_id: Some(row.image_id),
                url: row.url,
            });
    }

    let mut colors_by_product: HashMap<i64, Vec<ColorVariant>> = HashMap::new();
    for row in color_rows {
        colors_by_product
            .entry(row.product_id)
            .or_default()
            .push(ColorVariant {
                color_id: Some(row.color_id),
                name: row.name,
                value: row.value,
                images: images_by_color.remove(&row.color_id).unwrap_or_default(),
            });
    }

    rows.into_iter()
        .map(|row| {
            let images: Vec<ProductImage> = images_by_product
                .remove(&row.product_id)
                .unwrap_or_default();
            let colors: Vec<ColorVariant> = colors_by_product
                .remove(&row.product_id)
                .unwrap_or_default();
            product_from_row(row, colors, images)
        })
        .collect()
}

fn product_from_row(
    row: ProductRow,
    colors: Vec<ColorVariant>,
    images: Vec<ProductImage>,
) -> Result<Product, PersistenceError> {
    let sizes: Vec<String> = serde_json::from_str(&row.sizes_json)?;

    Ok(Product {
        product_id: row.product_id,
        category_id: row.category_id,
        name: row.name,
        slug: row.slug,
        price: column_money(row.price_cents, "products.price_cents")?,
        stock: column_u32(row.stock, "products.stock")?,
        version: column_u32(row.version, "products.version")?,
        sizes,
        colors,
        images,
    })
}
