// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bearer token extraction for the server.
//!
//! This module provides the Axum extractor that resolves the
//! `Authorization: Bearer <token>` header to an authenticated customer.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use storefront_api::{AuthenticatedActor, AuthenticationService};
use tracing::{debug, warn};

use crate::{AppState, HttpError};

/// Extractor for authenticated customers and admins.
///
/// # Usage
///
/// ```ignore
/// async fn my_handler(
///     AuthenticatedCustomer(actor): AuthenticatedCustomer,
/// ) -> Result<Json<Response>, HttpError> {
///     // actor: AuthenticatedActor
///     Ok(Json(Response { ... }))
/// }
/// ```
///
/// # Errors
///
/// Rejects with HTTP 401 if the header is missing, is not a bearer token,
/// or the token does not belong to any customer.
pub struct AuthenticatedCustomer(pub AuthenticatedActor);

impl FromRequestParts<AppState> for AuthenticatedCustomer {
    type Rejection = SessionError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("Authorization")
            .ok_or_else(|| {
                debug!("Missing Authorization header");
                SessionError::MissingAuthorizationHeader
            })?
            .to_str()
            .map_err(|_| {
                warn!("Invalid Authorization header encoding");
                SessionError::InvalidAuthorizationHeader
            })?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                warn!("Authorization header is not a bearer token");
                SessionError::InvalidAuthorizationHeader
            })?;

        let mut persistence = state.persistence.lock().await;
        let actor: AuthenticatedActor = AuthenticationService::authenticate(&mut persistence, token)
            .map_err(|e| {
                warn!(error = %e, "Token authentication failed");
                SessionError::InvalidToken(e.to_string())
            })?;

        debug!(
            customer_id = actor.customer_id,
            role = actor.role.as_str(),
            "Request authenticated"
        );

        Ok(Self(actor))
    }
}

/// Token extraction errors.
#[derive(Debug)]
pub enum SessionError {
    /// Authorization header is missing.
    MissingAuthorizationHeader,
    /// Authorization header format is invalid.
    InvalidAuthorizationHeader,
    /// The token does not belong to any customer.
    InvalidToken(String),
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        let message: String = match self {
            Self::MissingAuthorizationHeader => String::from("Missing Authorization header"),
            Self::InvalidAuthorizationHeader => {
                String::from("Invalid Authorization header format. Expected: 'Bearer <token>'")
            }
            Self::InvalidToken(reason) => reason,
        };

        HttpError {
            status: StatusCode::UNAUTHORIZED,
            kind: "authentication_failed",
            field: None,
            message,
            retryable: false,
        }
        .into_response()
    }
}
