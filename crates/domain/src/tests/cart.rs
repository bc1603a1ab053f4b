// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::create_test_product;
use crate::{CartLineKey, DomainError, LineOptions, MAX_LINE_QUANTITY, Product, validate_quantity};

#[test]
fn test_quantity_bounds() {
    assert_eq!(validate_quantity(1).unwrap(), 1);
    assert_eq!(
        validate_quantity(i64::from(MAX_LINE_QUANTITY)).unwrap(),
        MAX_LINE_QUANTITY
    );
    assert!(matches!(
        validate_quantity(0),
        Err(DomainError::InvalidQuantity { quantity: 0, .. })
    ));
    assert!(validate_quantity(-3).is_err());
    assert!(validate_quantity(1000).is_err());
}

#[test]
fn test_resolve_canonicalizes_size_and_color() {
    let product: Product = create_test_product();
    let options: LineOptions =
        LineOptions::resolve(&product, Some("m"), Some("#ffffff"), None).unwrap();

    assert_eq!(options.size.as_deref(), Some("M"));
    assert_eq!(options.color_value.as_deref(), Some("#FFFFFF"));
    assert_eq!(options.color_name.as_deref(), Some("White"));
}

#[test]
fn test_resolve_by_name_only() {
    let product: Product = create_test_product();
    let options: LineOptions =
        LineOptions::resolve(&product, None, None, Some("dark green")).unwrap();

    assert_eq!(options.color_value.as_deref(), Some("#006400"));
    assert_eq!(options.color_name.as_deref(), Some("Dark Green"));
}

#[test]
fn test_hex_wins_over_conflicting_name() {
    let product: Product = create_test_product();
    let options: LineOptions =
        LineOptions::resolve(&product, None, Some("#006400"), Some("White")).unwrap();

    assert_eq!(options.color_name.as_deref(), Some("Dark Green"));
}

#[test]
fn test_unknown_size_is_rejected() {
    let product: Product = create_test_product();
    let result = LineOptions::resolve(&product, Some("XXL"), None, None);

    assert!(matches!(result, Err(DomainError::UnknownSize { product_id: 7, .. })));
}

#[test]
fn test_unknown_color_is_rejected() {
    let product: Product = create_test_product();
    let result = LineOptions::resolve(&product, None, Some("#123456"), None);

    assert!(matches!(result, Err(DomainError::UnknownColor { .. })));
}

#[test]
fn test_blank_options_resolve_to_none() {
    let product: Product = create_test_product();
    let options: LineOptions = LineOptions::resolve(&product, Some(" "), Some(""), None).unwrap();

    assert_eq!(options, LineOptions::default());
}

#[test]
fn test_equal_choices_share_a_line_key() {
    let product: Product = create_test_product();
    let a: LineOptions = LineOptions::resolve(&product, Some("L"), Some("#006400"), None).unwrap();
    let b: LineOptions =
        LineOptions::resolve(&product, Some("l"), None, Some("Dark Green")).unwrap();

    assert_eq!(CartLineKey::new(7, &a), CartLineKey::new(7, &b));
    assert_ne!(
        CartLineKey::new(7, &a),
        CartLineKey::new(7, &LineOptions::default())
    );
}
