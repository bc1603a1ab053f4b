// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use storefront_domain::DomainError;

/// Errors that can occur while planning a state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// Checkout was requested for a cart with no items.
    EmptyCart {
        /// The customer whose cart is empty.
        customer_id: i64,
    },
    /// A patch referenced a child entity the product does not own.
    UnknownEntity {
        /// What kind of entity, e.g. "image" or "color".
        kind: &'static str,
        /// The identifier supplied by the caller.
        id: i64,
    },
    /// A patch listed the same child entity more than once.
    DuplicateEntity {
        /// What kind of entity.
        kind: &'static str,
        /// The repeated identifier.
        id: i64,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::EmptyCart { customer_id } => {
                write!(f, "Cart for customer {customer_id} is empty")
            }
            Self::UnknownEntity { kind, id } => {
                write!(f, "The product has no {kind} with id {id}")
            }
            Self::DuplicateEntity { kind, id } => {
                write!(f, "The {kind} with id {id} is listed more than once")
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
