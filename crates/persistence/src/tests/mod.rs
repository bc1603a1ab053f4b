// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod cart_tests;
mod concurrency_tests;
mod initialization_tests;

use storefront::OrderRequest;
use storefront_domain::{ColorVariant, Money, NewProduct, ProductImage, ShippingInfo};

use crate::{CartItemInput, CustomerData, Persistence};

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory database")
}

pub fn create_test_customer(persistence: &mut Persistence, email: &str) -> CustomerData {
    persistence
        .create_customer(
            email,
            "Test Customer",
            "customer",
            &format!("token-{email}"),
        )
        .expect("Failed to create customer")
}

pub fn create_test_new_product(slug: &str, price_cents: i64, stock: u32) -> NewProduct {
    NewProduct {
        category_id: None,
        name: format!("Product {slug}"),
        slug: slug.to_string(),
        price: Money::from_cents(price_cents).unwrap(),
        stock,
        sizes: vec![String::from("M"), String::from("L")],
        colors: vec![
            ColorVariant::new(
                "Dark Green",
                "#006400",
                vec![ProductImage::new("/a.jpg"), ProductImage::new("/a2.jpg")],
            ),
            ColorVariant::new("White", "#ffffff", vec![ProductImage::new("/b.jpg")]),
        ],
        images: vec![ProductImage::new("/c.jpg")],
    }
}

pub fn create_test_product(
    persistence: &mut Persistence,
    slug: &str,
    price_cents: i64,
    stock: u32,
) -> i64 {
    persistence
        .create_product(&create_test_new_product(slug, price_cents, stock))
        .expect("Failed to create product")
        .product_id
}

pub fn create_test_line(product_id: i64, quantity: i64) -> CartItemInput {
    CartItemInput {
        product_id,
        quantity,
        ..CartItemInput::default()
    }
}

pub fn create_test_shipping() -> ShippingInfo {
    ShippingInfo {
        name: String::from("Ada Lovelace"),
        email: String::from("ada@example.com"),
        address: String::from("12 Analytical Row"),
        city: String::from("London"),
        region: String::new(),
        postal_code: String::from("N1 9GU"),
        country: String::from("UK"),
        phone: String::from("+44 20 7946 0000"),
    }
}

pub fn create_test_request() -> OrderRequest {
    OrderRequest {
        shipping: create_test_shipping(),
        declared_total: None,
        payment_method: None,
    }
}

pub fn stock_of(persistence: &mut Persistence, product_id: i64) -> u32 {
    persistence
        .get_product(product_id)
        .unwrap()
        .expect("Product should exist")
        .stock
}
