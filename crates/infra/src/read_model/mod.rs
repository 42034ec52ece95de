//! Basket storage abstractions.
//!
//! The basket is disposable: it lives for the lifetime of the process and is
//! emptied on checkout.

pub mod product_store;

pub use product_store::{InMemoryProductStore, ProductStore};
