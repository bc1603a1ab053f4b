// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use storefront_domain::{Decimal, ShippingInfo};
use storefront_persistence::Persistence;

use crate::{
    AuthenticatedActor, ColorInput, CreateProductRequest, ImageInput, PlaceOrderRequest,
    ProductInfo, RegisterCustomerRequest, RegisterCustomerResponse, Role, create_product,
    register_customer,
};

pub fn setup_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory persistence")
}

pub fn create_test_admin(persistence: &mut Persistence) -> AuthenticatedActor {
    let created: RegisterCustomerResponse = crate::bootstrap_admin(persistence, "admin@example.com")
        .expect("Failed to bootstrap admin")
        .expect("Admin already existed");
    AuthenticatedActor::new(created.customer.id, created.customer.email, Role::Admin)
}

pub fn create_test_shopper(persistence: &mut Persistence, email: &str) -> AuthenticatedActor {
    let request: RegisterCustomerRequest = RegisterCustomerRequest {
        email: email.to_string(),
        display_name: String::from("Test Shopper"),
    };
    let created: RegisterCustomerResponse =
        register_customer(persistence, &request).expect("Failed to register customer");
    AuthenticatedActor::new(created.customer.id, created.customer.email, Role::Customer)
}

pub fn create_test_product_request(
    slug: &str,
    price_cents: i64,
    stock: i64,
) -> CreateProductRequest {
    CreateProductRequest {
        category_id: None,
        name: format!("Product {slug}"),
        slug: slug.to_string(),
        price: Decimal::new(price_cents, 2),
        stock,
        sizes: vec![String::from("M"), String::from("L")],
        colors: vec![ColorInput {
            id: None,
            name: String::from("Navy"),
            value: String::from("#000080"),
            images: vec![ImageInput {
                id: None,
                url: String::from("/navy.jpg"),
            }],
        }],
        images: vec![ImageInput {
            id: None,
            url: String::from("/main.jpg"),
        }],
    }
}

pub fn create_test_product(
    persistence: &mut Persistence,
    admin: &AuthenticatedActor,
    slug: &str,
    price_cents: i64,
    stock: i64,
) -> ProductInfo {
    create_product(
        persistence,
        admin,
        create_test_product_request(slug, price_cents, stock),
    )
    .expect("Failed to create product")
}

pub fn create_test_order_request() -> PlaceOrderRequest {
    PlaceOrderRequest {
        shipping: ShippingInfo {
            name: String::from("Ada Lovelace"),
            email: String::from("ada@example.com"),
            address: String::from("1 Analytical Way"),
            city: String::from("London"),
            region: String::from("Greater London"),
            postal_code: String::from("N1 9GU"),
            country: String::from("UK"),
            phone: String::from("+44 20 7946 0000"),
        },
        total: None,
        payment_method: None,
    }
}
