// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CartSnapshot, CartSnapshotLine, OrderRequest};
use storefront_domain::{ColorVariant, Money, Product, ProductImage, ShippingInfo};

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

pub fn create_test_colors() -> Vec<ColorVariant> {
    vec![
        ColorVariant {
            color_id: Some(10),
            name: String::from("Dark Green"),
            value: String::from("#006400"),
            images: vec![ProductImage {
                image_id: Some(100),
                url: String::from("/a.jpg"),
            }],
        },
        ColorVariant {
            color_id: Some(11),
            name: String::from("White"),
            value: String::from("#FFFFFF"),
            images: vec![ProductImage {
                image_id: Some(101),
                url: String::from("/b.jpg"),
            }],
        },
    ]
}

pub fn create_test_line(cart_item_id: i64, price_cents: i64, quantity: u32) -> CartSnapshotLine {
    CartSnapshotLine {
        cart_item_id,
        product_id: 1,
        name: String::from("Field Jacket"),
        slug: String::from("field-jacket"),
        unit_price: Money::from_cents(price_cents).unwrap(),
        stock: 5,
        quantity,
        size: None,
        color_value: None,
        color_name: None,
        colors: create_test_colors(),
        images: vec![ProductImage {
            image_id: Some(200),
            url: String::from("/c.jpg"),
        }],
    }
}

pub fn create_test_snapshot(lines: Vec<CartSnapshotLine>) -> CartSnapshot {
    CartSnapshot {
        customer_id: 42,
        cart_id: Some(3),
        lines,
    }
}

pub fn create_test_product() -> Product {
    Product {
        product_id: 1,
        category_id: Some(2),
        name: String::from("Field Jacket"),
        slug: String::from("field-jacket"),
        price: Money::from_cents(10_000).unwrap(),
        stock: 5,
        version: 3,
        sizes: vec![String::from("M"), String::from("L")],
        colors: create_test_colors(),
        images: vec![
            ProductImage {
                image_id: Some(200),
                url: String::from("/c.jpg"),
            },
            ProductImage {
                image_id: Some(201),
                url: String::from("/d.jpg"),
            },
        ],
    }
}
