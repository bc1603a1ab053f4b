// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::result::DatabaseErrorKind;
use storefront::CoreError;
use storefront_domain::DomainError;

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// A database error occurred.
    DatabaseError(String),
    /// Database connection failed.
    DatabaseConnectionFailed(String),
    /// Database migration failed.
    MigrationFailed(String),
    /// Query execution failed.
    QueryFailed(String),
    /// A stored value could not be turned back into a domain value.
    ReconstructionError(String),
    /// Serialization/deserialization error.
    SerializationError(String),
    /// Initialization error.
    InitializationError(String),
    /// Foreign key enforcement is not enabled.
    ForeignKeyEnforcementNotEnabled,
    /// A unique constraint rejected the write (duplicate slug, email, ...).
    UniqueViolation(String),
    /// A foreign key constraint rejected the write.
    ForeignKeyViolation(String),
    /// The requested product does not exist.
    ProductNotFound(i64),
    /// The requested category does not exist.
    CategoryNotFound(i64),
    /// The requested order does not exist.
    OrderNotFound(i64),
    /// The cart item does not exist or belongs to another customer.
    CartItemNotFound(i64),
    /// The requested resource was not found.
    NotFound(String),
    /// A conditional stock decrement matched no row.
    InsufficientStock {
        /// The product.
        product_id: i64,
        /// Units requested by the order line.
        requested: u32,
        /// Units on hand when the decrement failed.
        available: u32,
    },
    /// The product was edited since the caller read it.
    VersionConflict {
        /// The product.
        product_id: i64,
        /// The version the caller based the edit on.
        expected: u32,
        /// The version currently stored.
        actual: u32,
    },
    /// Stock moved between reading the product and writing an admin edit
    /// that sets stock.
    StockChanged {
        /// The product.
        product_id: i64,
        /// The stock observed when the edit was planned.
        expected: u32,
        /// The stock currently stored.
        actual: u32,
    },
    /// The requested change was rejected by a planning rule.
    InvalidOperation(CoreError),
    /// A general error occurred.
    Other(String),
}

impl PersistenceError {
    /// Returns true if retrying the same request may succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::InsufficientStock { .. }
                | Self::VersionConflict { .. }
                | Self::StockChanged { .. }
        )
    }
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::DatabaseConnectionFailed(msg) => {
                write!(f, "Database connection failed: {msg}")
            }
            Self::MigrationFailed(msg) => write!(f, "Migration failed: {msg}"),
            Self::QueryFailed(msg) => write!(f, "Query failed: {msg}"),
            Self::ReconstructionError(msg) => write!(f, "Stored data is invalid: {msg}"),
            Self::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            Self::InitializationError(msg) => write!(f, "Initialization error: {msg}"),
            Self::ForeignKeyEnforcementNotEnabled => {
                write!(f, "Foreign key enforcement is not enabled")
            }
            Self::UniqueViolation(msg) => write!(f, "Duplicate value: {msg}"),
            Self::ForeignKeyViolation(msg) => write!(f, "Missing referenced row: {msg}"),
            Self::ProductNotFound(id) => write!(f, "Product {id} not found"),
            Self::CategoryNotFound(id) => write!(f, "Category {id} not found"),
            Self::OrderNotFound(id) => write!(f, "Order {id} not found"),
            Self::CartItemNotFound(id) => write!(f, "Cart item {id} not found"),
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
            Self::InsufficientStock {
                product_id,
                requested,
                available,
            } => write!(
                f,
                "Insufficient stock for product {product_id}: requested {requested}, available {available}"
            ),
            Self::VersionConflict {
                product_id,
                expected,
                actual,
            } => write!(
                f,
                "Product {product_id} was modified: expected version {expected}, found {actual}"
            ),
            Self::StockChanged {
                product_id,
                expected,
                actual,
            } => write!(
                f,
                "Stock for product {product_id} changed from {expected} to {actual} during the edit"
            ),
            Self::InvalidOperation(err) => write!(f, "{err}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<diesel::result::Error> for PersistenceError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => Self::NotFound("Record not found".to_string()),
            diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                Self::UniqueViolation(info.message().to_string())
            }
            diesel::result::Error::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
                Self::ForeignKeyViolation(info.message().to_string())
            }
            _ => Self::DatabaseError(err.to_string()),
        }
    }
}

impl From<diesel::ConnectionError> for PersistenceError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::DatabaseConnectionFailed(err.to_string())
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

impl From<CoreError> for PersistenceError {
    fn from(err: CoreError) -> Self {
        Self::InvalidOperation(err)
    }
}

impl From<DomainError> for PersistenceError {
    fn from(err: DomainError) -> Self {
        Self::InvalidOperation(CoreError::DomainViolation(err))
    }
}
