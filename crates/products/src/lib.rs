//! Products domain module.
//!
//! A product is a detected item waiting at the checkout counter. This crate
//! holds the record and the ingestion rules (no IO, no HTTP, no storage).

pub mod product;

pub use product::{Product, REQUIRED_FIELDS};
