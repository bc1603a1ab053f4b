// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authorization tests.
//!
//! Admin-only handlers reject customers; customers only see their own
//! orders.

use crate::{
    ApiError, AuthenticationService, CreateCategoryRequest, ListOrdersRequest,
    UpdateOrderStatusRequest, UpdateProductRequest, add_cart_item, create_category,
    create_product, delete_product, get_order, list_orders, place_order, update_order_status,
    update_product,
};

use super::helpers::{
    create_test_admin, create_test_order_request, create_test_product,
    create_test_product_request, create_test_shopper, setup_test_persistence,
};

fn assert_unauthorized<T: std::fmt::Debug>(result: Result<T, ApiError>) {
    match result {
        Err(ApiError::Unauthorized { required_role, .. }) => assert_eq!(required_role, "Admin"),
        other => panic!("Expected Unauthorized, got {other:?}"),
    }
}

#[test]
fn test_catalog_writes_reject_customer() {
    let mut persistence = setup_test_persistence();
    let admin = create_test_admin(&mut persistence);
    let shopper = create_test_shopper(&mut persistence, "shopper@example.com");
    let product = create_test_product(&mut persistence, &admin, "tee", 2500, 5);

    assert_unauthorized(create_category(
        &mut persistence,
        &shopper,
        &CreateCategoryRequest {
            name: String::from("Shirts"),
            slug: String::from("shirts"),
        },
    ));
    assert_unauthorized(create_product(
        &mut persistence,
        &shopper,
        create_test_product_request("other", 100, 1),
    ));
    assert_unauthorized(update_product(
        &mut persistence,
        &shopper,
        product.id,
        UpdateProductRequest {
            version: product.version,
            name: Some(String::from("Hacked")),
            ..UpdateProductRequest::default()
        },
    ));
    assert_unauthorized(delete_product(&mut persistence, &shopper, product.id));

    let unchanged = persistence.get_product(product.id).unwrap().unwrap();
    assert_eq!(unchanged.name, "Product tee");
}

#[test]
fn test_order_administration_rejects_customer() {
    let mut persistence = setup_test_persistence();
    let admin = create_test_admin(&mut persistence);
    let shopper = create_test_shopper(&mut persistence, "shopper@example.com");
    let product = create_test_product(&mut persistence, &admin, "tee", 2500, 5);

    add_cart_item(
        &mut persistence,
        &shopper,
        crate::AddCartItemRequest {
            product_id: product.id,
            quantity: 1,
            ..crate::AddCartItemRequest::default()
        },
    )
    .unwrap();
    let order = place_order(&mut persistence, &shopper, create_test_order_request()).unwrap();

    assert_unauthorized(list_orders(
        &mut persistence,
        &shopper,
        ListOrdersRequest::default(),
    ));
    assert_unauthorized(update_order_status(
        &mut persistence,
        &shopper,
        order.id,
        &UpdateOrderStatusRequest {
            status: String::from("cancelled"),
        },
    ));
}

#[test]
fn test_customer_cannot_read_another_customers_order() {
    let mut persistence = setup_test_persistence();
    let admin = create_test_admin(&mut persistence);
    let owner = create_test_shopper(&mut persistence, "owner@example.com");
    let snoop = create_test_shopper(&mut persistence, "snoop@example.com");
    let product = create_test_product(&mut persistence, &admin, "tee", 2500, 5);

    add_cart_item(
        &mut persistence,
        &owner,
        crate::AddCartItemRequest {
            product_id: product.id,
            quantity: 1,
            ..crate::AddCartItemRequest::default()
        },
    )
    .unwrap();
    let order = place_order(&mut persistence, &owner, create_test_order_request()).unwrap();

    assert!(get_order(&mut persistence, &owner, order.id).is_ok());
    assert!(get_order(&mut persistence, &admin, order.id).is_ok());
    assert!(matches!(
        get_order(&mut persistence, &snoop, order.id),
        Err(ApiError::ResourceNotFound { .. })
    ));
}

#[test]
fn test_authenticate_resolves_token_and_rejects_unknown() {
    let mut persistence = setup_test_persistence();
    let created = crate::register_customer(
        &mut persistence,
        &crate::RegisterCustomerRequest {
            email: String::from("Token@Example.com"),
            display_name: String::from("Token Holder"),
        },
    )
    .unwrap();

    let actor = AuthenticationService::authenticate(&mut persistence, &created.token).unwrap();
    assert_eq!(actor.customer_id, created.customer.id);
    assert_eq!(actor.email, "token@example.com");
    assert!(!actor.is_admin());

    let result = AuthenticationService::authenticate(&mut persistence, "sf_bogus");
    assert!(matches!(
        result,
        Err(crate::AuthError::AuthenticationFailed { .. })
    ));
}
