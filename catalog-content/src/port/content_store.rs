//! Persistent content store interface.

use async_trait::async_trait;

use crate::domain::content::{Content, ContentId};
use crate::domain::mapper::ContentInput;

/// Faults raised by a store. A missing record is never one of these; it is
/// reported as `None` (or the nil id for `delete`).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A freshly generated id already exists. Nothing was written.
    #[error("duplicate content id: {0}")]
    DuplicateId(ContentId),

    /// The backing store could not be reached or failed an I/O operation.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// A stored document could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Abstract interface for content persistence.
///
/// Implementations may keep records in memory or in a document store; both
/// must apply the same patch semantics through a
/// [`ContentMapper`](crate::domain::mapper::ContentMapper).
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Assign a fresh id, persist the mapped input and return it.
    async fn create(&self, input: &ContentInput) -> Result<Content, StoreError>;

    /// Get a record by id.
    async fn read(&self, id: ContentId) -> Result<Option<Content>, StoreError>;

    /// Every stored record, in no particular order.
    async fn read_all(&self) -> Result<Vec<Content>, StoreError>;

    /// Patch an existing record. Returns `None` when `id` is unknown.
    async fn update(
        &self,
        id: ContentId,
        input: &ContentInput,
    ) -> Result<Option<Content>, StoreError>;

    /// Remove a record. Returns `id` if something was removed and the nil id otherwise.
    async fn delete(&self, id: ContentId) -> Result<ContentId, StoreError>;

    /// Flush pending writes to durable storage.
    async fn flush(&self) -> Result<(), StoreError>;
}
