//! `vpaygo-core` — shared domain primitives.
//!
//! This crate contains **pure domain** building blocks (no IO, no HTTP).

pub mod error;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use value_object::{is_truthy, FieldValue};
