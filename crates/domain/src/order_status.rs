// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Order status states and the inventory semantics of each transition.
//!
//! Statuses fall into two classes that matter for inventory:
//!
//! - **active** statuses keep the order's stock reserved (`pending`, `shipped`)
//! - **restock** statuses release the reservation when entered from an
//!   active status (`cancelled`)
//!
//! `delivered` is neither: the goods have left and the stock is consumed.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Placed, stock reserved, not yet shipped.
    #[default]
    Pending,
    /// Handed to the carrier. Stock still counted as reserved.
    Shipped,
    /// Received by the customer.
    Delivered,
    /// Cancelled. Stock returned to inventory.
    Cancelled,
}

impl OrderStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 4] = [
        Self::Pending,
        Self::Shipped,
        Self::Delivered,
        Self::Cancelled,
    ];

    /// Returns the string representation used for persistence and the API.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }

    /// Returns true if an order in this status holds reserved stock.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Pending | Self::Shipped)
    }

    /// Returns true if entering this status releases reserved stock.
    #[must_use]
    pub const fn is_restock(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Returns true if moving from this status to `target` must return
    /// every line item's quantity to inventory.
    #[must_use]
    pub const fn requires_restock(&self, target: Self) -> bool {
        self.is_active() && target.is_restock()
    }

    /// Validates a transition from this status to `target`.
    ///
    /// Re-entering the current status is always allowed and is a no-op for
    /// inventory.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the order is in a restock status and `target` differs (a cancelled
    ///   order cannot be reopened; its stock has already been released)
    /// - `target` is active and the current status is not (the order would
    ///   claim a reservation it does not hold)
    pub fn validate_transition(&self, target: Self) -> Result<(), DomainError> {
        if *self == target {
            return Ok(());
        }

        if self.is_restock() {
            return Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: target.as_str().to_string(),
                reason: "a cancelled order cannot be reopened".to_string(),
            });
        }

        if !self.is_active() && target.is_active() {
            return Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: target.as_str().to_string(),
                reason: "the order no longer holds reserved stock".to_string(),
            });
        }

        Ok(())
    }
}

impl FromStr for OrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "shipped" => Ok(Self::Shipped),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidOrderStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How the customer pays for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Paid to the courier on delivery. Used when the client does not choose.
    #[default]
    CashOnDelivery,
    /// Card payment.
    Card,
    /// Bank transfer.
    BankTransfer,
}

impl PaymentMethod {
    /// Returns the string representation used for persistence and the API.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CashOnDelivery => "cash_on_delivery",
            Self::Card => "card",
            Self::BankTransfer => "bank_transfer",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cash_on_delivery" | "cod" => Ok(Self::CashOnDelivery),
            "card" => Ok(Self::Card),
            "bank_transfer" => Ok(Self::BankTransfer),
            _ => Err(DomainError::InvalidPaymentMethod(s.to_string())),
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
