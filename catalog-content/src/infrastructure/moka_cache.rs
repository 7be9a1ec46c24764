//! Bounded in-process content cache backed by `moka`.

use async_trait::async_trait;
use moka::future::Cache;

use crate::domain::content::{Content, ContentId};
use crate::port::content_cache::ContentCache;

/// Concurrent cache holding at most `max_capacity` entities.
///
/// Which entry goes when the bound is reached is up to moka.
#[derive(Clone)]
pub struct MokaContentCache {
    inner: Cache<ContentId, Content>,
}

impl MokaContentCache {
    pub fn new(max_capacity: u64) -> Self {
        Self {
            inner: Cache::new(max_capacity),
        }
    }
}

#[async_trait]
impl ContentCache for MokaContentCache {
    async fn get(&self, id: ContentId) -> Option<Content> {
        self.inner.get(&id).await
    }

    async fn set(&self, id: ContentId, content: Content) {
        self.inner.insert(id, content).await;
    }

    async fn remove(&self, id: ContentId) {
        self.inner.invalidate(&id).await;
    }
}
