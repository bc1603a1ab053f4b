// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::str::FromStr;

use crate::{DomainError, OrderStatus, PaymentMethod};

#[test]
fn test_status_round_trips_through_str() {
    for status in OrderStatus::ALL {
        assert_eq!(OrderStatus::from_str(status.as_str()).unwrap(), status);
    }
}

#[test]
fn test_status_parse_rejects_unknown_label() {
    let result = OrderStatus::from_str("refunded");
    assert!(matches!(result, Err(DomainError::InvalidOrderStatus(_))));
}

#[test]
fn test_active_and_restock_classes() {
    assert!(OrderStatus::Pending.is_active());
    assert!(OrderStatus::Shipped.is_active());
    assert!(!OrderStatus::Delivered.is_active());
    assert!(!OrderStatus::Cancelled.is_active());

    assert!(OrderStatus::Cancelled.is_restock());
    assert!(!OrderStatus::Pending.is_restock());
}

#[test]
fn test_restock_only_from_active_into_restock() {
    assert!(OrderStatus::Pending.requires_restock(OrderStatus::Cancelled));
    assert!(OrderStatus::Shipped.requires_restock(OrderStatus::Cancelled));
    assert!(!OrderStatus::Pending.requires_restock(OrderStatus::Shipped));
    assert!(!OrderStatus::Delivered.requires_restock(OrderStatus::Cancelled));
    assert!(!OrderStatus::Cancelled.requires_restock(OrderStatus::Cancelled));
}

#[test]
fn test_forward_transitions_are_valid() {
    assert!(
        OrderStatus::Pending
            .validate_transition(OrderStatus::Shipped)
            .is_ok()
    );
    assert!(
        OrderStatus::Shipped
            .validate_transition(OrderStatus::Delivered)
            .is_ok()
    );
    assert!(
        OrderStatus::Shipped
            .validate_transition(OrderStatus::Pending)
            .is_ok()
    );
    assert!(
        OrderStatus::Delivered
            .validate_transition(OrderStatus::Cancelled)
            .is_ok()
    );
}

#[test]
fn test_cancelled_cannot_be_reopened() {
    let result = OrderStatus::Cancelled.validate_transition(OrderStatus::Pending);
    assert!(matches!(
        result,
        Err(DomainError::InvalidStatusTransition { .. })
    ));
}

#[test]
fn test_repeating_current_status_is_allowed() {
    for status in OrderStatus::ALL {
        assert!(status.validate_transition(status).is_ok());
    }
}

#[test]
fn test_delivered_cannot_become_active_again() {
    let result = OrderStatus::Delivered.validate_transition(OrderStatus::Shipped);
    assert!(matches!(
        result,
        Err(DomainError::InvalidStatusTransition { .. })
    ));
}

#[test]
fn test_payment_method_defaults_to_cash_on_delivery() {
    assert_eq!(PaymentMethod::default(), PaymentMethod::CashOnDelivery);
    assert_eq!(
        PaymentMethod::from_str("COD").unwrap(),
        PaymentMethod::CashOnDelivery
    );
    assert!(PaymentMethod::from_str("barter").is_err());
}

#[test]
fn test_status_serializes_as_snake_case() {
    let json: String = serde_json::to_string(&OrderStatus::Cancelled).unwrap();
    assert_eq!(json, "\"cancelled\"");
}
