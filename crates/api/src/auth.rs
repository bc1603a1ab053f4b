// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication and authorization types and services.

use storefront_domain::Order;
use storefront_persistence::{CustomerData, Persistence};
use tracing::debug;

use crate::error::AuthError;

/// Customer roles for authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Admin role: manages the catalog and every order.
    ///
    /// Admins may:
    /// - create categories
    /// - create, edit and delete products
    /// - list all orders and move them between statuses
    Admin,
    /// Customer role: shops for themselves.
    ///
    /// Customers may manage their own cart, place orders and read their
    /// own orders.
    Customer,
}

impl Role {
    /// Returns the stored label for this role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Customer => "customer",
        }
    }

    /// Parses a stored role label.
    ///
    /// # Errors
    ///
    /// Returns an error if the label is not a known role.
    pub fn parse(role: &str) -> Result<Self, AuthError> {
        match role {
            "admin" => Ok(Self::Admin),
            "customer" => Ok(Self::Customer),
            _ => Err(AuthError::AuthenticationFailed {
                reason: format!("Invalid role: {role}"),
            }),
        }
    }
}

/// An authenticated customer with an associated role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The customer's canonical identifier.
    pub customer_id: i64,
    /// The customer's email.
    pub email: String,
    /// The role assigned to this customer.
    pub role: Role,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    #[must_use]
    pub const fn new(customer_id: i64, email: String, role: Role) -> Self {
        Self {
            customer_id,
            email,
            role,
        }
    }

    /// Returns true if this actor is an admin.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }
}

/// Authorization service for enforcing role-based access control.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Checks that the actor is an admin.
    ///
    /// # Arguments
    ///
    /// * `actor` - The authenticated actor
    /// * `action` - The action being attempted, for the error message
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Admin role.
    pub fn require_admin(actor: &AuthenticatedActor, action: &str) -> Result<(), AuthError> {
        match actor.role {
            Role::Admin => Ok(()),
            Role::Customer => Err(AuthError::Unauthorized {
                action: action.to_string(),
                required_role: String::from("Admin"),
            }),
        }
    }

    /// Checks whether the actor may read an order.
    ///
    /// Admins may read any order; customers only their own.
    #[must_use]
    pub const fn can_view_order(actor: &AuthenticatedActor, order: &Order) -> bool {
        actor.is_admin() || actor.customer_id == order.customer_id
    }
}

/// Authentication service for bearer API tokens.
pub struct AuthenticationService;

impl AuthenticationService {
    /// Resolves a bearer token to the customer owning it.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is unknown or the stored role is invalid.
    pub fn authenticate(
        persistence: &mut Persistence,
        token: &str,
    ) -> Result<AuthenticatedActor, AuthError> {
        let customer: CustomerData = persistence
            .get_customer_by_token(token)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Database error: {e}"),
            })?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Invalid API token"),
            })?;

        let role: Role = Role::parse(&customer.role)?;
        debug!(
            customer_id = customer.customer_id,
            role = role.as_str(),
            "Authenticated"
        );

        Ok(AuthenticatedActor::new(
            customer.customer_id,
            customer.email,
            role,
        ))
    }

    /// Generates a new random API token.
    #[must_use]
    pub fn generate_token() -> String {
        format!(
            "sf_{:016x}{:016x}",
            rand::random::<u64>(),
            rand::random::<u64>()
        )
    }
}
