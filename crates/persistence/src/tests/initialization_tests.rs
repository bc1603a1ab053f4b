// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::{create_test_customer, create_test_persistence};
use crate::{Persistence, PersistenceError};

#[test]
fn test_in_memory_databases_are_isolated() {
    let mut first: Persistence = create_test_persistence();
    let mut second: Persistence = create_test_persistence();

    create_test_customer(&mut first, "ada@example.com");

    assert_eq!(first.count_customers_with_role("customer").unwrap(), 1);
    assert_eq!(second.count_customers_with_role("customer").unwrap(), 0);
}

#[test]
fn test_foreign_key_enforcement_is_enabled() {
    let mut persistence: Persistence = create_test_persistence();
    assert!(persistence.verify_foreign_key_enforcement().is_ok());
}

#[test]
fn test_file_database_persists_across_handles() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storefront.db");

    {
        let mut persistence: Persistence = Persistence::new_with_file(&path).unwrap();
        persistence
            .create_category("Outerwear", "outerwear")
            .unwrap();
    }

    let mut reopened: Persistence = Persistence::new_with_file(&path).unwrap();
    let categories = reopened.list_categories().unwrap();
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].slug, "outerwear");
}

#[test]
fn test_customer_email_is_normalized_and_unique() {
    let mut persistence: Persistence = create_test_persistence();

    let customer = persistence
        .create_customer("  Ada@Example.COM ", "Ada", "customer", "token-1")
        .unwrap();
    assert_eq!(customer.email, "ada@example.com");

    let result = persistence.create_customer("ada@example.com", "Ada Again", "customer", "token-2");
    assert!(matches!(result, Err(PersistenceError::UniqueViolation(_))));
}

#[test]
fn test_customer_lookup_by_token() {
    let mut persistence: Persistence = create_test_persistence();
    let created = create_test_customer(&mut persistence, "ada@example.com");

    let found = persistence
        .get_customer_by_token("token-ada@example.com")
        .unwrap()
        .expect("Customer should be found by token");
    assert_eq!(found, created);

    assert!(
        persistence
            .get_customer_by_token("missing")
            .unwrap()
            .is_none()
    );
    assert_eq!(
        persistence.get_customer_by_id(created.customer_id).unwrap(),
        Some(created)
    );
}

#[test]
fn test_customer_with_invalid_email_is_rejected() {
    let mut persistence: Persistence = create_test_persistence();

    let result = persistence.create_customer("not-an-email", "Ada", "customer", "token-1");
    assert!(matches!(result, Err(PersistenceError::InvalidOperation(_))));
}
