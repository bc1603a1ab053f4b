// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Separate connections on one database file, racing on the same stock.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Barrier};
use std::thread;

use storefront_domain::{Order, OrderStatus};

use crate::tests::{
    create_test_customer, create_test_line, create_test_product, create_test_request, stock_of,
};
use crate::{Persistence, PersistenceError};

fn race<T, F>(path: &Path, inputs: Vec<i64>, op: F) -> Vec<Result<T, PersistenceError>>
where
    T: Send + 'static,
    F: Fn(&mut Persistence, i64) -> Result<T, PersistenceError> + Send + Sync + 'static,
{
    let barrier: Arc<Barrier> = Arc::new(Barrier::new(inputs.len()));
    let op: Arc<F> = Arc::new(op);

    let handles: Vec<_> = inputs
        .into_iter()
        .map(|input| {
            let path: PathBuf = path.to_path_buf();
            let barrier: Arc<Barrier> = Arc::clone(&barrier);
            let op: Arc<F> = Arc::clone(&op);
            thread::spawn(move || {
                let mut persistence: Persistence = Persistence::new_with_file(&path).unwrap();
                barrier.wait();
                op(&mut persistence, input)
            })
        })
        .collect();

    handles.into_iter().map(|h| h.join().unwrap()).collect()
}

#[test]
fn test_concurrent_checkouts_never_oversell() {
    let dir = tempfile::tempdir().unwrap();
    let path: PathBuf = dir.path().join("storefront.db");

    let mut setup: Persistence = Persistence::new_with_file(&path).unwrap();
    let product_id: i64 = create_test_product(&mut setup, "field-jacket", 10_000, 5);
    let ada = create_test_customer(&mut setup, "ada@example.com");
    let bob = create_test_customer(&mut setup, "bob@example.com");
    for customer_id in [ada.customer_id, bob.customer_id] {
        setup
            .add_to_cart(customer_id, &create_test_line(product_id, 3))
            .unwrap();
    }

    let results: Vec<Result<Order, PersistenceError>> =
        race(&path, vec![ada.customer_id, bob.customer_id], |persistence, customer_id| {
            persistence.place_order(customer_id, &create_test_request())
        });

    let placed: usize = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(placed, 1);
    assert!(results.iter().any(|r| {
        r == &Err(PersistenceError::InsufficientStock {
            product_id,
            requested: 3,
            available: 2,
        })
    }));

    assert_eq!(stock_of(&mut setup, product_id), 2);
}

#[test]
fn test_concurrent_cancellations_restock_once() {
    let dir = tempfile::tempdir().unwrap();
    let path: PathBuf = dir.path().join("storefront.db");

    let mut setup: Persistence = Persistence::new_with_file(&path).unwrap();
    let product_id: i64 = create_test_product(&mut setup, "field-jacket", 10_000, 5);
    let customer = create_test_customer(&mut setup, "ada@example.com");
    setup
        .add_to_cart(customer.customer_id, &create_test_line(product_id, 4))
        .unwrap();
    let order: Order = setup
        .place_order(customer.customer_id, &create_test_request())
        .unwrap();
    assert_eq!(stock_of(&mut setup, product_id), 1);

    let results: Vec<Result<Order, PersistenceError>> =
        race(&path, vec![order.order_id; 3], |persistence, order_id| {
            persistence.set_order_status(order_id, OrderStatus::Cancelled)
        });

    assert!(results.iter().all(Result::is_ok));
    assert_eq!(stock_of(&mut setup, product_id), 5);
}
