// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use storefront::{CartSnapshot, ProductPatch};
use storefront_domain::Money;

use crate::tests::{
    create_test_customer, create_test_line, create_test_persistence, create_test_product,
};
use crate::{CartItemInput, Persistence, PersistenceError};

#[test]
fn test_customer_without_cart_reads_empty_snapshot() {
    let mut persistence: Persistence = create_test_persistence();
    let customer = create_test_customer(&mut persistence, "ada@example.com");

    let cart: CartSnapshot = persistence.get_cart(customer.customer_id).unwrap();
    assert!(cart.is_empty());
    assert_eq!(cart.cart_id, None);
    assert_eq!(cart.item_count(), 0);
}

#[test]
fn test_add_to_cart_creates_cart_and_line() {
    let mut persistence: Persistence = create_test_persistence();
    let customer = create_test_customer(&mut persistence, "ada@example.com");
    let product_id: i64 = create_test_product(&mut persistence, "field-jacket", 10_000, 5);

    let cart_item_id: i64 = persistence
        .add_to_cart(customer.customer_id, &create_test_line(product_id, 2))
        .unwrap();

    let cart: CartSnapshot = persistence.get_cart(customer.customer_id).unwrap();
    assert!(cart.cart_id.is_some());
    assert_eq!(cart.lines.len(), 1);
    let line = &cart.lines[0];
    assert_eq!(line.cart_item_id, cart_item_id);
    assert_eq!(line.quantity, 2);
    assert_eq!(line.unit_price, Money::from_cents(10_000).unwrap());
    assert_eq!(line.stock, 5);
    assert_eq!(line.size, None);
    assert_eq!(line.color_value, None);
    assert_eq!(cart.subtotal().unwrap(), Money::from_cents(20_000).unwrap());
}

#[test]
fn test_matching_lines_are_merged() {
    let mut persistence: Persistence = create_test_persistence();
    let customer = create_test_customer(&mut persistence, "ada@example.com");
    let product_id: i64 = create_test_product(&mut persistence, "field-jacket", 10_000, 5);

    let line = CartItemInput {
        product_id,
        quantity: 1,
        size: Some(String::from("m")),
        color_value: Some(String::from("#006400")),
        color_name: None,
    };
    let first: i64 = persistence
        .add_to_cart(customer.customer_id, &line)
        .unwrap();

    // Same choice spelled differently still names the same line.
    let again = CartItemInput {
        quantity: 2,
        size: Some(String::from("M")),
        color_value: None,
        color_name: Some(String::from("dark green")),
        ..line
    };
    let second: i64 = persistence
        .add_to_cart(customer.customer_id, &again)
        .unwrap();
    assert_eq!(first, second);

    let cart: CartSnapshot = persistence.get_cart(customer.customer_id).unwrap();
    assert_eq!(cart.lines.len(), 1);
    assert_eq!(cart.lines[0].quantity, 3);
    assert_eq!(cart.lines[0].size.as_deref(), Some("M"));
    assert_eq!(cart.lines[0].color_value.as_deref(), Some("#006400"));
    assert_eq!(cart.lines[0].color_name.as_deref(), Some("Dark Green"));
}

#[test]
fn test_different_variants_are_separate_lines() {
    let mut persistence: Persistence = create_test_persistence();
    let customer = create_test_customer(&mut persistence, "ada@example.com");
    let product_id: i64 = create_test_product(&mut persistence, "field-jacket", 10_000, 5);

    let green = CartItemInput {
        product_id,
        quantity: 1,
        color_value: Some(String::from("#006400")),
        ..CartItemInput::default()
    };
    let white = CartItemInput {
        color_value: Some(String::from("#FFFFFF")),
        ..green.clone()
    };
    for line in [&green, &white] {
        persistence.add_to_cart(customer.customer_id, line).unwrap();
    }

    let cart: CartSnapshot = persistence.get_cart(customer.customer_id).unwrap();
    assert_eq!(cart.lines.len(), 2);
    assert_eq!(cart.item_count(), 2);
}

#[test]
fn test_add_to_cart_rejects_unknown_product_and_options() {
    let mut persistence: Persistence = create_test_persistence();
    let customer = create_test_customer(&mut persistence, "ada@example.com");
    let product_id: i64 = create_test_product(&mut persistence, "field-jacket", 10_000, 5);

    assert_eq!(
        persistence.add_to_cart(customer.customer_id, &create_test_line(999, 1)),
        Err(PersistenceError::ProductNotFound(999))
    );

    let bad_size = CartItemInput {
        size: Some(String::from("XXL")),
        ..create_test_line(product_id, 1)
    };
    assert!(matches!(
        persistence.add_to_cart(customer.customer_id, &bad_size),
        Err(PersistenceError::InvalidOperation(_))
    ));

    let bad_color = CartItemInput {
        color_value: Some(String::from("#123456")),
        ..create_test_line(product_id, 1)
    };
    assert!(matches!(
        persistence.add_to_cart(customer.customer_id, &bad_color),
        Err(PersistenceError::InvalidOperation(_))
    ));

    let cart: CartSnapshot = persistence.get_cart(customer.customer_id).unwrap();
    assert!(cart.is_empty());
}

#[test]
fn test_add_to_cart_rejects_invalid_quantity() {
    let mut persistence: Persistence = create_test_persistence();
    let customer = create_test_customer(&mut persistence, "ada@example.com");
    let product_id: i64 = create_test_product(&mut persistence, "field-jacket", 10_000, 5);

    for quantity in [0, -1, 1_000] {
        let line: CartItemInput = create_test_line(product_id, quantity);
        assert!(matches!(
            persistence.add_to_cart(customer.customer_id, &line),
            Err(PersistenceError::InvalidOperation(_))
        ));
    }
}

#[test]
fn test_merge_past_line_limit_is_rejected() {
    let mut persistence: Persistence = create_test_persistence();
    let customer = create_test_customer(&mut persistence, "ada@example.com");
    let product_id: i64 = create_test_product(&mut persistence, "field-jacket", 10_000, 5);

    persistence
        .add_to_cart(customer.customer_id, &create_test_line(product_id, 999))
        .unwrap();
    assert!(
        persistence
            .add_to_cart(customer.customer_id, &create_test_line(product_id, 1))
            .is_err()
    );
    let cart: CartSnapshot = persistence.get_cart(customer.customer_id).unwrap();
    assert_eq!(cart.lines[0].quantity, 999);
}

#[test]
fn test_update_and_remove_cart_items() {
    let mut persistence: Persistence = create_test_persistence();
    let customer = create_test_customer(&mut persistence, "ada@example.com");
    let product_id: i64 = create_test_product(&mut persistence, "field-jacket", 10_000, 5);
    let cart_item_id: i64 = persistence
        .add_to_cart(customer.customer_id, &create_test_line(product_id, 1))
        .unwrap();

    persistence
        .update_cart_item_quantity(customer.customer_id, cart_item_id, 4)
        .unwrap();
    let cart: CartSnapshot = persistence.get_cart(customer.customer_id).unwrap();
    assert_eq!(cart.lines[0].quantity, 4);

    persistence
        .remove_cart_item(customer.customer_id, cart_item_id)
        .unwrap();
    let cart: CartSnapshot = persistence.get_cart(customer.customer_id).unwrap();
    assert!(cart.is_empty());

    assert_eq!(
        persistence.remove_cart_item(customer.customer_id, cart_item_id),
        Err(PersistenceError::CartItemNotFound(cart_item_id))
    );
}

#[test]
fn test_other_customers_items_are_not_found() {
    let mut persistence: Persistence = create_test_persistence();
    let owner = create_test_customer(&mut persistence, "ada@example.com");
    let other = create_test_customer(&mut persistence, "bob@example.com");
    let product_id: i64 = create_test_product(&mut persistence, "field-jacket", 10_000, 5);
    let cart_item_id: i64 = persistence
        .add_to_cart(owner.customer_id, &create_test_line(product_id, 1))
        .unwrap();
    persistence
        .add_to_cart(other.customer_id, &create_test_line(product_id, 1))
        .unwrap();

    assert_eq!(
        persistence.update_cart_item_quantity(other.customer_id, cart_item_id, 3),
        Err(PersistenceError::CartItemNotFound(cart_item_id))
    );
    assert_eq!(
        persistence.remove_cart_item(other.customer_id, cart_item_id),
        Err(PersistenceError::CartItemNotFound(cart_item_id))
    );
    let cart: CartSnapshot = persistence.get_cart(owner.customer_id).unwrap();
    assert_eq!(cart.lines[0].quantity, 1);
}

#[test]
fn test_clear_cart() {
    let mut persistence: Persistence = create_test_persistence();
    let customer = create_test_customer(&mut persistence, "ada@example.com");
    let jacket: i64 = create_test_product(&mut persistence, "field-jacket", 10_000, 5);
    let scarf: i64 = create_test_product(&mut persistence, "wool-scarf", 2_500, 5);

    assert_eq!(persistence.clear_cart(customer.customer_id).unwrap(), 0);

    persistence
        .add_to_cart(customer.customer_id, &create_test_line(jacket, 1))
        .unwrap();
    persistence
        .add_to_cart(customer.customer_id, &create_test_line(scarf, 1))
        .unwrap();

    assert_eq!(persistence.clear_cart(customer.customer_id).unwrap(), 2);
    let cart: CartSnapshot = persistence.get_cart(customer.customer_id).unwrap();
    assert!(cart.is_empty());
}

#[test]
fn test_snapshot_reflects_current_product_state() {
    let mut persistence: Persistence = create_test_persistence();
    let customer = create_test_customer(&mut persistence, "ada@example.com");
    let product_id: i64 = create_test_product(&mut persistence, "field-jacket", 10_000, 5);
    persistence
        .add_to_cart(customer.customer_id, &create_test_line(product_id, 2))
        .unwrap();

    let patch = ProductPatch {
        price: Some(Money::from_cents(12_500).unwrap()),
        stock: Some(1),
        ..ProductPatch::default()
    };
    persistence.update_product(product_id, 0, patch).unwrap();

    let cart: CartSnapshot = persistence.get_cart(customer.customer_id).unwrap();
    let line = &cart.lines[0];
    assert_eq!(line.unit_price, Money::from_cents(12_500).unwrap());
    assert_eq!(line.stock, 1);
    assert!(!line.is_available());
}

#[test]
fn test_deleting_product_removes_cart_lines() {
    let mut persistence: Persistence = create_test_persistence();
    let customer = create_test_customer(&mut persistence, "ada@example.com");
    let product_id: i64 = create_test_product(&mut persistence, "field-jacket", 10_000, 5);
    persistence
        .add_to_cart(customer.customer_id, &create_test_line(product_id, 2))
        .unwrap();

    persistence.delete_product(product_id).unwrap();
    let cart: CartSnapshot = persistence.get_cart(customer.customer_id).unwrap();
    assert!(cart.is_empty());
}
