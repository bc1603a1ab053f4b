// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the storefront.
//!
//! This crate owns the `SQLite` database: the catalog, carts, orders and
//! the inventory ledger. It is built on Diesel with embedded migrations.
//!
//! ## Consistency
//!
//! Every operation that moves stock runs in one `BEGIN IMMEDIATE`
//! transaction, so the write lock is held from the first read to the last
//! write:
//!
//! - checkout decrements stock with `stock >= qty` in the `WHERE` clause
//!   and rolls back every line if any line is short
//! - cancelling an active order restocks and flips status together, so
//!   stock is returned once
//! - product edits are guarded by the row version, and a stock-setting
//!   edit also by the stock it observed
//!
//! Other connections wait on the lock for up to five seconds instead of
//! failing immediately.
//!
//! ## Testing
//!
//! - `new_in_memory()` gives every test its own shared-cache database
//! - concurrency tests open two handles on one temporary file

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use storefront::{CartSnapshot, OrderRequest, ProductPatch};
use storefront_domain::{
    Category, NewProduct, Order, OrderFilter, OrderStatus, Product, ProductFilter,
};

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use data_models::CustomerData;
pub use error::PersistenceError;
pub use mutations::CartItemInput;

use backend::PersistenceBackend;
use backend::sqlite::{self, Journal};

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter over one `SQLite` connection.
///
/// Callers that share an adapter between tasks serialize access to it;
/// separate adapters on the same file coordinate through `SQLite` locking.
pub struct Persistence {
    pub(crate) conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via atomic counter.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String = format!("file:memdb_test_{db_id}?mode=memory&cache=shared");

        let conn: SqliteConnection = sqlite::open(&shared_memory_url, Journal::Default)?;
        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let conn: SqliteConnection = sqlite::open(path_str, Journal::Wal)?;
        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        self.conn.verify_foreign_key_enforcement()
    }

    // ========================================================================
    // Customers
    // ========================================================================

    /// Registers a customer.
    ///
    /// # Errors
    ///
    /// Returns an error if a field is invalid, the email or token is taken,
    /// or the database fails.
    pub fn create_customer(
        &mut self,
        email: &str,
        display_name: &str,
        role: &str,
        api_token: &str,
    ) -> Result<CustomerData, PersistenceError> {
        mutations::customers::create_customer(&mut self.conn, email, display_name, role, api_token)
    }

    /// Looks up the customer owning an API token.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_customer_by_token(
        &mut self,
        api_token: &str,
    ) -> Result<Option<CustomerData>, PersistenceError> {
        queries::customers::get_customer_by_token(&mut self.conn, api_token)
    }

    /// Looks up a customer by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_customer_by_id(
        &mut self,
        customer_id: i64,
    ) -> Result<Option<CustomerData>, PersistenceError> {
        queries::customers::get_customer_by_id(&mut self.conn, customer_id)
    }

    /// Counts customers holding a role.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn count_customers_with_role(&mut self, role: &str) -> Result<i64, PersistenceError> {
        queries::customers::count_customers_with_role(&mut self.conn, role)
    }

    // ========================================================================
    // Catalog
    // ========================================================================

    /// Creates a category.
    ///
    /// # Errors
    ///
    /// Returns an error if a field is invalid, the slug is taken, or the
    /// database fails.
    pub fn create_category(
        &mut self,
        name: &str,
        slug: &str,
    ) -> Result<Category, PersistenceError> {
        mutations::catalog::create_category(&mut self.conn, name, slug)
    }

    /// Lists every category.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_categories(&mut self) -> Result<Vec<Category>, PersistenceError> {
        queries::catalog::list_categories(&mut self.conn)
    }

    /// Retrieves a category by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_category(&mut self, category_id: i64) -> Result<Option<Category>, PersistenceError> {
        queries::catalog::get_category(&mut self.conn, category_id)
    }

    /// Creates a product with its images and color variants.
    ///
    /// # Errors
    ///
    /// Returns an error if a field is invalid, the category does not exist,
    /// the slug is taken, or the database fails.
    pub fn create_product(&mut self, product: &NewProduct) -> Result<Product, PersistenceError> {
        mutations::catalog::create_product(&mut self.conn, product)
    }

    /// Retrieves a product by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_product(&mut self, product_id: i64) -> Result<Option<Product>, PersistenceError> {
        queries::catalog::get_product(&mut self.conn, product_id)
    }

    /// Retrieves a product by slug.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_product_by_slug(&mut self, slug: &str) -> Result<Option<Product>, PersistenceError> {
        queries::catalog::get_product_by_slug(&mut self.conn, slug)
    }

    /// Lists products matching a filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the filter is invalid or the database query fails.
    pub fn list_products(
        &mut self,
        filter: &ProductFilter,
    ) -> Result<Vec<Product>, PersistenceError> {
        queries::catalog::list_products(&mut self.conn, filter)
    }

    /// Applies a version-guarded edit to a product.
    ///
    /// # Errors
    ///
    /// Returns `VersionConflict` or `StockChanged` if the product moved since
    /// the caller read it, or another error if the patch is invalid or the
    /// database fails.
    pub fn update_product(
        &mut self,
        product_id: i64,
        expected_version: u32,
        patch: ProductPatch,
    ) -> Result<Product, PersistenceError> {
        mutations::catalog::update_product(&mut self.conn, product_id, expected_version, patch)
    }

    /// Deletes a product.
    ///
    /// # Errors
    ///
    /// Returns `ProductNotFound` if the product does not exist, or a
    /// database error.
    pub fn delete_product(&mut self, product_id: i64) -> Result<(), PersistenceError> {
        mutations::catalog::delete_product(&mut self.conn, product_id)
    }

    // ========================================================================
    // Carts
    // ========================================================================

    /// Reads the customer's cart with current product state.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_cart(&mut self, customer_id: i64) -> Result<CartSnapshot, PersistenceError> {
        queries::carts::load_cart_snapshot(&mut self.conn, customer_id)
    }

    /// Adds a line to the customer's cart, merging with a matching line.
    ///
    /// # Errors
    ///
    /// Returns an error if the product or option is unknown, the quantity is
    /// out of range, or the database fails.
    pub fn add_to_cart(
        &mut self,
        customer_id: i64,
        input: &CartItemInput,
    ) -> Result<i64, PersistenceError> {
        mutations::carts::add_to_cart(&mut self.conn, customer_id, input)
    }

    /// Sets a cart line's quantity.
    ///
    /// # Errors
    ///
    /// Returns an error if the quantity is out of range, the item is not in
    /// the customer's cart, or the database fails.
    pub fn update_cart_item_quantity(
        &mut self,
        customer_id: i64,
        cart_item_id: i64,
        quantity: i64,
    ) -> Result<(), PersistenceError> {
        mutations::carts::update_cart_item_quantity(
            &mut self.conn,
            customer_id,
            cart_item_id,
            quantity,
        )
    }

    /// Removes a cart line.
    ///
    /// # Errors
    ///
    /// Returns an error if the item is not in the customer's cart or the
    /// database fails.
    pub fn remove_cart_item(
        &mut self,
        customer_id: i64,
        cart_item_id: i64,
    ) -> Result<(), PersistenceError> {
        mutations::carts::remove_cart_item(&mut self.conn, customer_id, cart_item_id)
    }

    /// Empties the customer's cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the database fails.
    pub fn clear_cart(&mut self, customer_id: i64) -> Result<usize, PersistenceError> {
        mutations::carts::clear_cart(&mut self.conn, customer_id)
    }

    // ========================================================================
    // Orders
    // ========================================================================

    /// Places an order from the customer's cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the request is invalid, the cart is empty, stock
    /// is insufficient, or the database fails. On error nothing is written.
    pub fn place_order(
        &mut self,
        customer_id: i64,
        request: &OrderRequest,
    ) -> Result<Order, PersistenceError> {
        mutations::orders::place_order(&mut self.conn, customer_id, request)
    }

    /// Retrieves an order with its items.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_order(&mut self, order_id: i64) -> Result<Option<Order>, PersistenceError> {
        queries::orders::get_order(&mut self.conn, order_id)
    }

    /// Lists orders matching a filter, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_orders(&mut self, filter: &OrderFilter) -> Result<Vec<Order>, PersistenceError> {
        queries::orders::list_orders(&mut self.conn, filter)
    }

    /// Moves an order to a new status, restocking on cancellation.
    ///
    /// # Errors
    ///
    /// Returns an error if the order does not exist, the transition is not
    /// permitted, or the database fails.
    pub fn set_order_status(
        &mut self,
        order_id: i64,
        status: OrderStatus,
    ) -> Result<Order, PersistenceError> {
        mutations::orders::set_order_status(&mut self.conn, order_id, status)
    }
}
