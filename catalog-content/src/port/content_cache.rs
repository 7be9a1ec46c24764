use async_trait::async_trait;

use crate::domain::content::{Content, ContentId};

/// In-process cache of entities keyed by id.
///
/// The cache knows nothing about the store; callers populate and evict it.
/// Operations never fail: an implementation backed by something fallible
/// must report failures as misses.
#[async_trait]
pub trait ContentCache: Send + Sync {
    async fn get(&self, id: ContentId) -> Option<Content>;

    /// Unconditionally overwrite the entry for `id`.
    async fn set(&self, id: ContentId, content: Content);

    /// Evict `id`. No-op when absent.
    async fn remove(&self, id: ContentId);
}
