#![forbid(unsafe_code)]

//! Catalog and cart state for the marketui demo.
//!
//! This crate is UI-free. It provides:
//!
//! - [`Item`]: an immutable catalog entry whose identity is its name.
//! - [`Store`]: the capability trait for anything exposing an ordered,
//!   read-only inventory, with [`FixedCatalog`] as the stock implementation.
//! - [`Cart`]: a shared-handle, observable list of added items that
//!   notifies subscribers synchronously on every append.
//!
//! # Architecture
//!
//! `Cart` uses `Rc<RefCell<..>>` for single-threaded shared ownership:
//! every view holds a cheap handle to the same underlying state and
//! mutates it only through [`Cart::add`]. Subscribers are plain callbacks
//! owned by the cart and removed when their [`CartSubscription`] guard is
//! dropped.

pub mod cart;
pub mod item;
pub mod store;

pub use cart::{Cart, CartChange, CartSubscription};
pub use item::Item;
pub use store::{FixedCatalog, Store, demo_catalog};
