// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Order status transitions and the restock decision they carry.

use storefront_domain::OrderStatus;

use crate::error::CoreError;

/// A validated order status change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusTransition {
    /// The status the order is in.
    pub from: OrderStatus,
    /// The status being written.
    pub to: OrderStatus,
    /// True when every line's quantity must be returned to stock.
    pub restock: bool,
}

impl StatusTransition {
    /// Returns true if the status actually changes.
    #[must_use]
    pub fn is_change(&self) -> bool {
        self.from != self.to
    }
}

/// Plans a status change for an order currently in `current`.
///
/// # Errors
///
/// Returns an error if the transition is not permitted.
pub fn plan_status_transition(
    current: OrderStatus,
    target: OrderStatus,
) -> Result<StatusTransition, CoreError> {
    current.validate_transition(target)?;

    Ok(StatusTransition {
        from: current,
        to: target,
        restock: current.requires_restock(target),
    })
}
