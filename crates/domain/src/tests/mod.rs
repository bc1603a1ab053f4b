// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod cart;
mod order_status;
mod validation;

use crate::{ColorVariant, Money, Product, ProductImage};

/// Builds a product with two color variants, two sizes and one product image.
pub fn create_test_product() -> Product {
    Product {
        product_id: 7,
        category_id: None,
        name: String::from("Field Jacket"),
        slug: String::from("field-jacket"),
        price: Money::from_cents(10_000).unwrap(),
        stock: 5,
        version: 0,
        sizes: vec![String::from("M"), String::from("L")],
        colors: vec![
            ColorVariant::new(
                "Dark Green",
                "#006400",
                vec![ProductImage::new("/a.jpg"), ProductImage::new("/a2.jpg")],
            ),
            ColorVariant::new("White", "#FFFFFF", vec![ProductImage::new("/b.jpg")]),
            ColorVariant::new("Sand", "#C2B280", Vec::new()),
        ],
        images: vec![ProductImage::new("/c.jpg")],
    }
}
