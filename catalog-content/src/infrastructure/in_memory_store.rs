//! In-memory content store.
//!
//! Keeps records in a process-wide map. Intended for development and tests;
//! an optional artificial latency makes it behave like a slow remote store.

use async_trait::async_trait;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::domain::content::{Content, ContentId};
use crate::domain::content_id::ContentIdGenerator;
use crate::domain::mapper::{ContentInput, ContentMapper, DefaultContentMapper};
use crate::infrastructure::content_id::UuidContentIdGenerator;
use crate::infrastructure::mock_data::generate_mocks;
use crate::port::content_store::{ContentStore, StoreError};

#[derive(Clone)]
pub struct InMemoryContentStore<M = DefaultContentMapper, G = UuidContentIdGenerator> {
    contents: Arc<RwLock<HashMap<ContentId, Content>>>,
    mapper: M,
    id_generator: G,
    latency: Duration,
}

impl InMemoryContentStore {
    /// Empty store with the default mapper and random ids.
    pub fn new() -> Self {
        Self::with_parts(DefaultContentMapper, UuidContentIdGenerator)
    }

    /// Store pre-filled with the mock catalog.
    pub fn seeded() -> Self {
        Self::new().with_seed_data()
    }
}

impl Default for InMemoryContentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<M, G> InMemoryContentStore<M, G>
where
    M: ContentMapper,
    G: ContentIdGenerator,
{
    pub fn with_parts(mapper: M, id_generator: G) -> Self {
        Self {
            contents: Arc::new(RwLock::new(HashMap::new())),
            mapper,
            id_generator,
            latency: Duration::ZERO,
        }
    }

    /// Delay every operation by `latency`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Replace the contents with the mock catalog.
    pub fn with_seed_data(mut self) -> Self {
        let seeded: HashMap<ContentId, Content> = generate_mocks(&self.mapper, &self.id_generator)
            .into_iter()
            .map(|content| (content.id, content))
            .collect();
        self.contents = Arc::new(RwLock::new(seeded));
        self
    }

    pub async fn len(&self) -> usize {
        self.contents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.contents.read().await.is_empty()
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl<M, G> ContentStore for InMemoryContentStore<M, G>
where
    M: ContentMapper,
    G: ContentIdGenerator,
{
    async fn create(&self, input: &ContentInput) -> Result<Content, StoreError> {
        self.simulate_latency().await;

        let id = self.id_generator.generate();
        let content = self.mapper.to_entity(id, input);

        let mut contents = self.contents.write().await;
        match contents.entry(id) {
            Entry::Occupied(_) => Err(StoreError::DuplicateId(id)),
            Entry::Vacant(slot) => {
                slot.insert(content.clone());
                Ok(content)
            }
        }
    }

    async fn read(&self, id: ContentId) -> Result<Option<Content>, StoreError> {
        self.simulate_latency().await;
        Ok(self.contents.read().await.get(&id).cloned())
    }

    async fn read_all(&self) -> Result<Vec<Content>, StoreError> {
        self.simulate_latency().await;
        Ok(self.contents.read().await.values().cloned().collect())
    }

    async fn update(
        &self,
        id: ContentId,
        input: &ContentInput,
    ) -> Result<Option<Content>, StoreError> {
        self.simulate_latency().await;

        let mut contents = self.contents.write().await;
        let Some(existing) = contents.get(&id) else {
            return Ok(None);
        };
        let updated = self.mapper.patch(existing, input);
        contents.insert(id, updated.clone());
        Ok(Some(updated))
    }

    async fn delete(&self, id: ContentId) -> Result<ContentId, StoreError> {
        self.simulate_latency().await;

        match self.contents.write().await.remove(&id) {
            Some(_) => Ok(id),
            None => Ok(ContentId::nil()),
        }
    }

    async fn flush(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
