// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DomainError, ShippingInfo, validate_color_value, validate_email, validate_image_url,
    validate_name, validate_sizes, validate_slug, validate_stock,
};

fn create_test_shipping() -> ShippingInfo {
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

#[test]
fn test_blank_name_is_rejected() {
    assert!(matches!(validate_name("   "), Err(DomainError::InvalidName(_))));
    assert!(validate_name("Field Jacket").is_ok());
}

#[test]
fn test_overlong_name_is_rejected() {
    let name: String = "x".repeat(256);
    assert!(matches!(validate_name(&name), Err(DomainError::InvalidName(_))));
}

#[test]
fn test_slug_shape() {
    assert!(validate_slug("field-jacket-2").is_ok());
    assert!(validate_slug("Field-Jacket").is_err());
    assert!(validate_slug("-jacket").is_err());
    assert!(validate_slug("field--jacket").is_err());
    assert!(validate_slug("").is_err());
}

#[test]
fn test_color_value_requires_hex() {
    assert!(validate_color_value("#006400").is_ok());
    assert!(validate_color_value("#abcdef").is_ok());
    assert!(validate_color_value("006400").is_err());
    assert!(validate_color_value("#00640").is_err());
    assert!(validate_color_value("#GGGGGG").is_err());
}

#[test]
fn test_image_url_forms() {
    assert!(validate_image_url("/images/a.jpg").is_ok());
    assert!(validate_image_url("https://cdn.example.com/a.jpg").is_ok());
    assert!(validate_image_url("a.jpg").is_err());
    assert!(validate_image_url("/a b.jpg").is_err());
}

#[test]
fn test_sizes_must_be_unique_ignoring_case() {
    let sizes: Vec<String> = vec![String::from("M"), String::from("m")];
    assert!(matches!(validate_sizes(&sizes), Err(DomainError::InvalidSize(_))));
}

#[test]
fn test_email_shape() {
    assert!(validate_email("a@b.co").is_ok());
    assert!(validate_email("no-at-sign").is_err());
    assert!(validate_email("a@nodot").is_err());
    assert!(validate_email("a@@b.co").is_err());
}

#[test]
fn test_stock_must_be_non_negative() {
    assert_eq!(validate_stock(0).unwrap(), 0);
    assert!(matches!(validate_stock(-1), Err(DomainError::InvalidStock(-1))));
}

#[test]
fn test_shipping_accepts_empty_region() {
    assert!(create_test_shipping().validate().is_ok());
}

#[test]
fn test_shipping_reports_first_missing_field() {
    let mut shipping: ShippingInfo = create_test_shipping();
    shipping.city = String::from("  ");
    shipping.phone = String::new();

    assert_eq!(
        shipping.validate(),
        Err(DomainError::MissingShippingField { field: "city" })
    );
}

#[test]
fn test_shipping_rejects_bad_email() {
    let mut shipping: ShippingInfo = create_test_shipping();
    shipping.email = String::from("ada");

    assert!(matches!(
        shipping.validate(),
        Err(DomainError::InvalidShippingField { field: "email", .. })
    ));
}

#[test]
fn test_shipping_rejects_letters_in_phone() {
    let mut shipping: ShippingInfo = create_test_shipping();
    shipping.phone = String::from("call me");

    assert!(matches!(
        shipping.validate(),
        Err(DomainError::InvalidShippingField { field: "phone", .. })
    ));
}
