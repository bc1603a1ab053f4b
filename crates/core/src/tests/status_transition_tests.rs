// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CoreError, StatusTransition, plan_status_transition};
use storefront_domain::{DomainError, OrderStatus};

#[test]
fn test_cancelling_pending_order_restocks() {
    let transition: StatusTransition =
        plan_status_transition(OrderStatus::Pending, OrderStatus::Cancelled).unwrap();

    assert!(transition.restock);
    assert!(transition.is_change());
}

#[test]
fn test_cancelling_shipped_order_restocks() {
    let transition: StatusTransition =
        plan_status_transition(OrderStatus::Shipped, OrderStatus::Cancelled).unwrap();

    assert!(transition.restock);
}

#[test]
fn test_cancelling_delivered_order_does_not_restock() {
    let transition: StatusTransition =
        plan_status_transition(OrderStatus::Delivered, OrderStatus::Cancelled).unwrap();

    assert!(!transition.restock);
}

#[test]
fn test_recancelling_is_a_no_op() {
    let transition: StatusTransition =
        plan_status_transition(OrderStatus::Cancelled, OrderStatus::Cancelled).unwrap();

    assert!(!transition.restock);
    assert!(!transition.is_change());
}

#[test]
fn test_shipping_never_touches_stock() {
    let transition: StatusTransition =
        plan_status_transition(OrderStatus::Pending, OrderStatus::Shipped).unwrap();

    assert!(!transition.restock);
}

#[test]
fn test_reopening_cancelled_order_is_rejected() {
    let result: Result<StatusTransition, CoreError> =
        plan_status_transition(OrderStatus::Cancelled, OrderStatus::Shipped);

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(
            DomainError::InvalidStatusTransition { .. },
        ))
    ));
}
