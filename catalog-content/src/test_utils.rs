//! Test utilities and mock implementations for unit testing.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::domain::content::{Content, ContentId};
use crate::domain::content_id::ContentIdGenerator;
use crate::domain::mapper::ContentInput;
use crate::port::content_store::{ContentStore, StoreError};

pub fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Always hands out the same id, to provoke collisions.
pub struct FixedIdGenerator(pub ContentId);

impl ContentIdGenerator for FixedIdGenerator {
    fn generate(&self) -> ContentId {
        self.0
    }
}

/// Store whose every call fails as unreachable.
pub struct FailingContentStore;

fn unreachable_store() -> StoreError {
    StoreError::Unavailable("connection refused".to_string())
}

#[async_trait]
impl ContentStore for FailingContentStore {
    async fn create(&self, _input: &ContentInput) -> Result<Content, StoreError> {
        Err(unreachable_store())
    }

    async fn read(&self, _id: ContentId) -> Result<Option<Content>, StoreError> {
        Err(unreachable_store())
    }

    async fn read_all(&self) -> Result<Vec<Content>, StoreError> {
        Err(unreachable_store())
    }

    async fn update(
        &self,
        _id: ContentId,
        _input: &ContentInput,
    ) -> Result<Option<Content>, StoreError> {
        Err(unreachable_store())
    }

    async fn delete(&self, _id: ContentId) -> Result<ContentId, StoreError> {
        Err(unreachable_store())
    }

    async fn flush(&self) -> Result<(), StoreError> {
        Err(unreachable_store())
    }
}

/// Delegating store that counts `read` calls.
pub struct CountingContentStore {
    inner: Arc<dyn ContentStore>,
    reads: AtomicUsize,
}

impl CountingContentStore {
    pub fn new(inner: Arc<dyn ContentStore>) -> Self {
        Self {
            inner,
            reads: AtomicUsize::new(0),
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentStore for CountingContentStore {
    async fn create(&self, input: &ContentInput) -> Result<Content, StoreError> {
        self.inner.create(input).await
    }

    async fn read(&self, id: ContentId) -> Result<Option<Content>, StoreError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.read(id).await
    }

    async fn read_all(&self) -> Result<Vec<Content>, StoreError> {
        self.inner.read_all().await
    }

    async fn update(
        &self,
        id: ContentId,
        input: &ContentInput,
    ) -> Result<Option<Content>, StoreError> {
        self.inner.update(id, input).await
    }

    async fn delete(&self, id: ContentId) -> Result<ContentId, StoreError> {
        self.inner.delete(id).await
    }

    async fn flush(&self) -> Result<(), StoreError> {
        self.inner.flush().await
    }
}
