use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::Value;

use vpaygo_core::DomainResult;
use vpaygo_infra::read_model::ProductStore;
use vpaygo_products::Product;

/// Request-scoped access to the basket, shared by every handler.
#[derive(Clone)]
pub struct AppServices {
    store: Arc<dyn ProductStore>,
}

impl AppServices {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    /// Validate an ingestion payload and append it. The store is untouched on error.
    pub fn add_product(&self, payload: &Value, received_at: DateTime<Utc>) -> DomainResult<Product> {
        let product = Product::from_payload(payload, received_at)?;
        self.store.append(product.clone());
        Ok(product)
    }

    pub fn list_products(&self) -> Vec<Product> {
        self.store.list()
    }

    /// Empty the basket, returning how many products were cleared.
    pub fn checkout(&self) -> usize {
        self.store.clear()
    }
}
