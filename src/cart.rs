//! The process-wide cart: an append-only list of products shared by every
//! view through context rather than an ambient global.

use dioxus::prelude::*;

use crate::api::Product;

/// Shared cart state. Provided once at the application root; any view can
/// grab a copy with [`use_cart`]. Appending re-renders every reader
/// through the signal subscription.
///
/// There is deliberately no removal, no clearing, and no deduplication:
/// adding the same product twice yields two entries, and the cart only
/// dies with the page.
#[derive(Clone, Copy)]
pub struct CartStore(Signal<Vec<Product>>);

impl CartStore {
    pub fn new() -> Self {
        Self(Signal::new(Vec::new()))
    }

    /// Appends a product to the end of the cart. Always succeeds.
    pub fn add(&mut self, product: Product) {
        self.0.write().push(product);
    }

    pub fn count(&self) -> usize {
        self.0.read().len()
    }

    /// Snapshot of the cart contents in insertion order.
    pub fn products(&self) -> Vec<Product> {
        self.0.read().clone()
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

/// The cart store provided by the application root.
pub fn use_cart() -> CartStore {
    use_context()
}
