//! Infrastructure layer: storage adapters for the basket.

pub mod read_model;
