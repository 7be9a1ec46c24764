//! Cache-aside wrapper around [`ContentManager`].
//!
//! Successful single-entity results are written to the cache, deletes evict.
//! Absent results and faults leave the cache untouched.

use std::sync::Arc;

use crate::domain::content::{Content, ContentId};
use crate::domain::mapper::ContentInput;
use crate::port::content_cache::ContentCache;
use crate::port::content_store::StoreError;

use super::content_manager::ContentManager;

#[derive(Clone)]
pub struct CachedContentService {
    manager: ContentManager,
    cache: Arc<dyn ContentCache>,
}

impl CachedContentService {
    pub fn new(manager: ContentManager, cache: Arc<dyn ContentCache>) -> Self {
        Self { manager, cache }
    }

    pub fn manager(&self) -> &ContentManager {
        &self.manager
    }

    pub fn cache(&self) -> &Arc<dyn ContentCache> {
        &self.cache
    }

    pub async fn get_many(&self) -> Result<Vec<Content>, StoreError> {
        self.manager.get_many().await
    }

    pub async fn get_filtered(
        &self,
        title: Option<&str>,
        genre: Option<&str>,
    ) -> Result<Vec<Content>, StoreError> {
        self.manager.get_filtered(title, genre).await
    }

    /// Served from the cache when possible, otherwise read through and cached.
    pub async fn get(&self, id: ContentId) -> Result<Option<Content>, StoreError> {
        if let Some(cached) = self.cache.get(id).await {
            tracing::debug!("Cache hit for content {}", id);
            return Ok(Some(cached));
        }

        tracing::debug!("Cache miss for content {}", id);
        let content = self.manager.get(id).await?;
        self.remember(content).await
    }

    pub async fn create(&self, input: &ContentInput) -> Result<Content, StoreError> {
        let content = self.manager.create(input).await?;
        self.cache.set(content.id, content.clone()).await;
        Ok(content)
    }

    pub async fn update(
        &self,
        id: ContentId,
        input: &ContentInput,
    ) -> Result<Option<Content>, StoreError> {
        let content = self.manager.update(id, input).await?;
        self.remember(content).await
    }

    /// Evicts `id` once the store call succeeds, whether or not a record was removed.
    pub async fn delete(&self, id: ContentId) -> Result<ContentId, StoreError> {
        let deleted = self.manager.delete(id).await?;
        self.cache.remove(id).await;
        Ok(deleted)
    }

    pub async fn add_genres(
        &self,
        id: ContentId,
        genres: &[String],
    ) -> Result<Option<Content>, StoreError> {
        let content = self.manager.add_genres(id, genres).await?;
        self.remember(content).await
    }

    pub async fn remove_genres(
        &self,
        id: ContentId,
        genres: &[String],
    ) -> Result<Option<Content>, StoreError> {
        let content = self.manager.remove_genres(id, genres).await?;
        self.remember(content).await
    }

    async fn remember(&self, content: Option<Content>) -> Result<Option<Content>, StoreError> {
        if let Some(content) = &content {
            self.cache.set(content.id, content.clone()).await;
        }
        Ok(content)
    }
}
