// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::create_test_product;
use crate::{
    ColorReconciliation, CoreError, ImageReconciliation, ProductPatch, ProductUpdatePlan,
    plan_product_update,
};
use storefront_domain::{ColorVariant, DomainError, Money, Product, ProductImage};

#[test]
fn test_empty_patch_keeps_everything() {
    let product: Product = create_test_product();

    let plan: ProductUpdatePlan =
        plan_product_update(&product, 3, ProductPatch::default()).unwrap();

    assert_eq!(plan.expected_version, 3);
    assert_eq!(plan.name, product.name);
    assert_eq!(plan.price, product.price);
    assert_eq!(plan.category_id, Some(2));
    assert!(plan.stock.is_none());
    assert!(plan.images.is_none());
    assert!(plan.colors.is_none());
}

#[test]
fn test_scalar_fields_are_replaced() {
    let product: Product = create_test_product();
    let patch: ProductPatch = ProductPatch {
        name: Some(String::from("Parka")),
        price: Some(Money::from_cents(12_500).unwrap()),
        category_id: Some(None),
        ..ProductPatch::default()
    };

    let plan: ProductUpdatePlan = plan_product_update(&product, 3, patch).unwrap();

    assert_eq!(plan.name, "Parka");
    assert_eq!(plan.price.to_string(), "125.00");
    assert_eq!(plan.category_id, None);
    assert_eq!(plan.slug, "field-jacket");
}

#[test]
fn test_stock_edit_carries_observed_stock() {
    let product: Product = create_test_product();
    let patch: ProductPatch = ProductPatch {
        stock: Some(20),
        ..ProductPatch::default()
    };

    let plan: ProductUpdatePlan = plan_product_update(&product, 3, patch).unwrap();

    assert_eq!(plan.stock, Some((5, 20)));
}

#[test]
fn test_images_are_reconciled_by_id() {
    let product: Product = create_test_product();
    let patch: ProductPatch = ProductPatch {
        images: Some(vec![
            ProductImage {
                image_id: Some(201),
                url: String::from("/d2.jpg"),
            },
            ProductImage::new("/e.jpg"),
        ]),
        ..ProductPatch::default()
    };

    let plan: ProductUpdatePlan = plan_product_update(&product, 3, patch).unwrap();
    let images: ImageReconciliation = plan.images.unwrap();

    assert_eq!(images.deletes, vec![200]);
    assert_eq!(images.upserts.len(), 2);
    assert_eq!(images.upserts[0].image_id, Some(201));
    assert_eq!(images.upserts[0].position, 0);
    assert_eq!(images.upserts[1].image_id, None);
    assert_eq!(images.upserts[1].position, 1);
}

#[test]
fn test_empty_image_list_deletes_all() {
    let product: Product = create_test_product();
    let patch: ProductPatch = ProductPatch {
        images: Some(Vec::new()),
        ..ProductPatch::default()
    };

    let plan: ProductUpdatePlan = plan_product_update(&product, 3, patch).unwrap();

    assert_eq!(plan.images.unwrap().deletes, vec![200, 201]);
}

#[test]
fn test_colors_reconcile_with_nested_images() {
    let product: Product = create_test_product();
    let mut green: ColorVariant = product.colors[0].clone();
    green.name = String::from("Forest");
    green.images.push(ProductImage::new("/a2.jpg"));
    let navy: ColorVariant = ColorVariant::new("Navy", "#000080", Vec::new());

    let patch: ProductPatch = ProductPatch {
        colors: Some(vec![green, navy]),
        ..ProductPatch::default()
    };

    let plan: ProductUpdatePlan = plan_product_update(&product, 3, patch).unwrap();
    let colors: ColorReconciliation = plan.colors.unwrap();

    assert_eq!(colors.deletes, vec![11]);
    assert_eq!(colors.upserts[0].color_id, Some(10));
    assert_eq!(colors.upserts[0].name, "Forest");
    assert_eq!(colors.upserts[0].images.upserts.len(), 2);
    assert!(colors.upserts[0].images.deletes.is_empty());
    assert_eq!(colors.upserts[1].color_id, None);
    assert_eq!(colors.upserts[1].value, "#000080");
}

#[test]
fn test_foreign_image_id_is_rejected() {
    let product: Product = create_test_product();
    let patch: ProductPatch = ProductPatch {
        images: Some(vec![ProductImage {
            image_id: Some(999),
            url: String::from("/x.jpg"),
        }]),
        ..ProductPatch::default()
    };

    let result: Result<ProductUpdatePlan, CoreError> = plan_product_update(&product, 3, patch);

    assert_eq!(
        result,
        Err(CoreError::UnknownEntity {
            kind: "image",
            id: 999
        })
    );
}

#[test]
fn test_color_image_cannot_move_to_product() {
    let product: Product = create_test_product();
    let patch: ProductPatch = ProductPatch {
        images: Some(vec![ProductImage {
            image_id: Some(100),
            url: String::from("/a.jpg"),
        }]),
        ..ProductPatch::default()
    };

    let result: Result<ProductUpdatePlan, CoreError> = plan_product_update(&product, 3, patch);

    assert!(matches!(result, Err(CoreError::UnknownEntity { id: 100, .. })));
}

#[test]
fn test_repeated_color_id_is_rejected() {
    let product: Product = create_test_product();
    let patch: ProductPatch = ProductPatch {
        colors: Some(vec![product.colors[0].clone(), product.colors[0].clone()]),
        ..ProductPatch::default()
    };

    let result: Result<ProductUpdatePlan, CoreError> = plan_product_update(&product, 3, patch);

    assert_eq!(
        result,
        Err(CoreError::DuplicateEntity {
            kind: "color",
            id: 10
        })
    );
}

#[test]
fn test_invalid_color_value_is_rejected() {
    let product: Product = create_test_product();
    let patch: ProductPatch = ProductPatch {
        colors: Some(vec![ColorVariant::new("Teal", "teal", Vec::new())]),
        ..ProductPatch::default()
    };

    let result: Result<ProductUpdatePlan, CoreError> = plan_product_update(&product, 3, patch);

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::InvalidColorValue(_)))
    ));
}

#[test]
fn test_invalid_slug_is_rejected() {
    let product: Product = create_test_product();
    let patch: ProductPatch = ProductPatch {
        slug: Some(String::from("Not A Slug")),
        ..ProductPatch::default()
    };

    let result: Result<ProductUpdatePlan, CoreError> = plan_product_update(&product, 3, patch);

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::InvalidSlug(_)))
    ));
}
