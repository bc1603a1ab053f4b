// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

//! Pure planning of storefront state changes.
//!
//! Nothing here performs I/O. The persistence layer reads the current
//! state inside a transaction, asks this crate what to write, and writes
//! it in the same transaction.

mod error;
mod order_plan;
mod product_update;
mod snapshot;
mod status_transition;

#[cfg(test)]
mod tests;

pub use error::CoreError;
pub use order_plan::{OrderPlan, OrderRequest, PlannedOrderLine, plan_order, validate_order_request};
pub use product_update::{
    ColorChange, ColorReconciliation, ImageChange, ImageReconciliation, ProductPatch,
    ProductUpdatePlan, plan_product_update,
};
pub use snapshot::{CartSnapshot, CartSnapshotLine};
pub use status_transition::{StatusTransition, plan_status_transition};
