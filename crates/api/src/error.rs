// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use storefront::CoreError;
use storefront_domain::DomainError;
use storefront_persistence::PersistenceError;
use tracing::error;

/// Authentication and authorization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain, core and persistence errors and
/// represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed - the actor does not have permission.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// The request lost a race with another writer. Retrying after a
    /// fresh read may succeed.
    Conflict {
        /// Machine-readable conflict reason (`insufficient_stock`,
        /// `version_conflict`, `stock_changed`, `duplicate`).
        reason: String,
        /// A human-readable description of the conflict.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl ApiError {
    /// Returns true if the caller may retry after re-reading state.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Conflict { reason, .. } => reason != "duplicate",
            _ => false,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::Conflict { reason, message } => {
                write!(f, "Conflict ({reason}): {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::Unauthorized {
                action,
                required_role,
            } => Self::Unauthorized {
                action,
                required_role,
            },
        }
    }
}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        translate_persistence_error(err)
    }
}

fn invalid(field: &str, message: impl Into<String>) -> ApiError {
    ApiError::InvalidInput {
        field: field.to_string(),
        message: message.into(),
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let message: String = err.to_string();
    match err {
        DomainError::InvalidName(_) => invalid("name", message),
        DomainError::InvalidDisplayName(_) => invalid("display_name", message),
        DomainError::InvalidSlug(_) => invalid("slug", message),
        DomainError::InvalidPrice(_) => invalid("price", message),
        DomainError::InvalidStock(_) => invalid("stock", message),
        DomainError::InvalidQuantity { .. } => invalid("quantity", message),
        DomainError::InvalidColorValue(_) => invalid("color", message),
        DomainError::InvalidColorName(_) => invalid("color_name", message),
        DomainError::InvalidImageUrl(_) => invalid("image_url", message),
        DomainError::InvalidSize(_) | DomainError::UnknownSize { .. } => invalid("size", message),
        DomainError::UnknownColor { .. } => invalid("color", message),
        DomainError::MissingShippingField { field }
        | DomainError::InvalidShippingField { field, .. } => {
            invalid(&format!("shipping.{field}"), message)
        }
        DomainError::InvalidEmail(_) => invalid("email", message),
        DomainError::InvalidOrderStatus(_) => invalid("status", message),
        DomainError::InvalidPaymentMethod(_) => invalid("payment_method", message),
        DomainError::InvalidDeclaredTotal(_) => invalid("total", message),
        DomainError::InvalidPriceRange { .. } => invalid("min_price", message),
        DomainError::InvalidStatusTransition { .. } => ApiError::DomainRuleViolation {
            rule: String::from("order_status_transition"),
            message,
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    let message: String = err.to_string();
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::EmptyCart { .. } => ApiError::DomainRuleViolation {
            rule: String::from("non_empty_cart"),
            message,
        },
        CoreError::UnknownEntity { kind, .. } | CoreError::DuplicateEntity { kind, .. } => {
            invalid(kind, message)
        }
    }
}

/// Translates a persistence error into an API error.
///
/// Storage failures are logged here and reported without detail.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    let message: String = err.to_string();
    match err {
        PersistenceError::InvalidOperation(core_err) => translate_core_error(core_err),
        PersistenceError::InsufficientStock { .. } => ApiError::Conflict {
            reason: String::from("insufficient_stock"),
            message,
        },
        PersistenceError::VersionConflict { .. } => ApiError::Conflict {
            reason: String::from("version_conflict"),
            message,
        },
        PersistenceError::StockChanged { .. } => ApiError::Conflict {
            reason: String::from("stock_changed"),
            message,
        },
        PersistenceError::UniqueViolation(_) => ApiError::Conflict {
            reason: String::from("duplicate"),
            message: String::from("A record with the same unique value already exists"),
        },
        PersistenceError::ProductNotFound(_) => not_found("Product", message),
        PersistenceError::CategoryNotFound(_) => not_found("Category", message),
        PersistenceError::OrderNotFound(_) => not_found("Order", message),
        PersistenceError::CartItemNotFound(_) => not_found("Cart item", message),
        PersistenceError::NotFound(_) => not_found("Resource", message),
        PersistenceError::ForeignKeyViolation(_) => invalid("reference", message),
        PersistenceError::DatabaseError(_)
        | PersistenceError::DatabaseConnectionFailed(_)
        | PersistenceError::MigrationFailed(_)
        | PersistenceError::QueryFailed(_)
        | PersistenceError::ReconstructionError(_)
        | PersistenceError::SerializationError(_)
        | PersistenceError::InitializationError(_)
        | PersistenceError::ForeignKeyEnforcementNotEnabled
        | PersistenceError::Other(_) => {
            error!(error = %message, "Persistence failure");
            ApiError::Internal {
                message: String::from("The request could not be completed"),
            }
        }
    }
}

fn not_found(resource_type: &str, message: String) -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: resource_type.to_string(),
        message,
    }
}
