//! The persistence contract the catalog page depends on.

use crate::domain::{Product, ProductDraft, StoreResult};

/// Remote persistence service for the product catalog.
///
/// Implementations are expected to be blocking; callers that need
/// non-blocking dispatch run the store on a worker thread (see the
/// infrastructure layer). `Send` is required for exactly that reason.
pub trait ProductStore: Send {
    /// Retrieves every product in the catalog.
    fn fetch_all(&self) -> StoreResult<Vec<Product>>;

    /// Persists a drafted product; the store assigns the identifier and
    /// returns the complete record.
    fn create(&self, draft: &ProductDraft) -> StoreResult<Product>;

    /// Removes the product with the given identifier.
    fn delete(&self, id: &str) -> StoreResult<()>;
}
