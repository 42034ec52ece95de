use std::sync::{Arc, PoisonError, RwLock};

use vpaygo_products::Product;

/// Ordered product list abstraction: append, read everything, clear.
///
/// Each call is atomic on its own. Callers get no ordering guarantee between
/// concurrent appends and clears.
pub trait ProductStore: Send + Sync {
    /// Append a product at the end of the list.
    fn append(&self, product: Product);
    /// Snapshot of all products in insertion order.
    fn list(&self) -> Vec<Product>;
    /// Replace the list with an empty one, returning how many products were dropped.
    fn clear(&self) -> usize;
}

impl<S> ProductStore for Arc<S>
where
    S: ProductStore + ?Sized,
{
    fn append(&self, product: Product) {
        (**self).append(product)
    }

    fn list(&self) -> Vec<Product> {
        (**self).list()
    }

    fn clear(&self) -> usize {
        (**self).clear()
    }
}

/// In-memory product list.
///
/// A poisoned lock is recovered: the data is a plain list and stays usable.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    inner: RwLock<Vec<Product>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProductStore for InMemoryProductStore {
    fn append(&self, product: Product) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(product);
    }

    fn list(&self) -> Vec<Product> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn clear(&self) -> usize {
        let mut items = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *items).len()
    }
}
