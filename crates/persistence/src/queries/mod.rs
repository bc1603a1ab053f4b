// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries.
//!
//! - `catalog`: products with their image and color graph, categories
//! - `carts`: cart snapshots and cart line lookups
//! - `orders`: orders with their items
//! - `customers`: token and id lookups

pub mod carts;
pub mod catalog;
pub mod customers;
pub mod orders;
