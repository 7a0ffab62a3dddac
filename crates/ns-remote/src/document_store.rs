use crate::StoreResult;

use async_trait::async_trait;
use serde_json::{Map, Value};

/// Field map of a stored document.
pub type Fields = Map<String, Value>;

/// A stored document with its identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub fields: Fields,
}

/// Managed per-document collection store.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Creates a document with a store-assigned id and returns that id.
    async fn create(&self, collection: &str, fields: Fields) -> StoreResult<String>;

    /// Creates or replaces the document at a caller-chosen id.
    async fn put_by_id(&self, collection: &str, id: &str, fields: Fields) -> StoreResult<()>;

    async fn read_by_id(&self, collection: &str, id: &str) -> StoreResult<Option<Fields>>;

    /// Documents whose `owner_field` equals `owner_id`, sorted by the
    /// numeric `order_field`.
    async fn query_by_owner_ordered(
        &self,
        collection: &str,
        owner_field: &str,
        owner_id: &str,
        order_field: &str,
        descending: bool,
    ) -> StoreResult<Vec<Document>>;

    /// Merges `fields` into an existing document; `NotFound` if absent.
    async fn update_by_id(&self, collection: &str, id: &str, fields: Fields) -> StoreResult<()>;

    /// Removes a document. Deleting an id that is already gone succeeds.
    async fn delete_by_id(&self, collection: &str, id: &str) -> StoreResult<()>;
}
