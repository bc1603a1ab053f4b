// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations.
//!
//! - `inventory`: the guarded stock decrement and the restock increment
//! - `orders`: checkout and status transitions
//! - `catalog`: categories, product create/delete, versioned product edit
//! - `carts`: cart line add/merge, quantity, removal
//! - `customers`: customer registration

pub mod carts;
pub mod catalog;
pub mod customers;
pub mod inventory;
pub mod orders;

pub use carts::CartItemInput;
