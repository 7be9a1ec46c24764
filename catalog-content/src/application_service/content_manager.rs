use std::sync::Arc;

use crate::domain::content::{genre_difference, genre_union, Content, ContentId};
use crate::domain::mapper::ContentInput;
use crate::port::content_store::{ContentStore, StoreError};

/// Content use cases on top of a [`ContentStore`].
///
/// The manager holds no cache; see
/// [`CachedContentService`](super::cached_content_service::CachedContentService).
#[derive(Clone)]
pub struct ContentManager {
    store: Arc<dyn ContentStore>,
}

impl ContentManager {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    pub async fn get_many(&self) -> Result<Vec<Content>, StoreError> {
        self.store.read_all().await
    }

    /// All contents whose title contains `title` and that carry the tag
    /// `genre`, both case-insensitive. A blank or missing filter does not
    /// constrain its dimension; otherwise the filter is matched as given.
    pub async fn get_filtered(
        &self,
        title: Option<&str>,
        genre: Option<&str>,
    ) -> Result<Vec<Content>, StoreError> {
        let title = title.filter(|t| !t.trim().is_empty());
        let genre = genre.filter(|g| !g.trim().is_empty());

        let contents = self.store.read_all().await?;
        Ok(contents
            .into_iter()
            .filter(|c| title.map_or(true, |t| c.title_contains(t)))
            .filter(|c| genre.map_or(true, |g| c.has_genre(g)))
            .collect())
    }

    pub async fn create(&self, input: &ContentInput) -> Result<Content, StoreError> {
        tracing::info!("Creating content");
        let content = self.store.create(input).await?;
        tracing::info!("Created content {}", content.id);
        Ok(content)
    }

    pub async fn get(&self, id: ContentId) -> Result<Option<Content>, StoreError> {
        tracing::info!("Getting content {}", id);
        self.store.read(id).await
    }

    pub async fn update(
        &self,
        id: ContentId,
        input: &ContentInput,
    ) -> Result<Option<Content>, StoreError> {
        tracing::info!("Updating content {}", id);
        self.store.update(id, input).await
    }

    pub async fn delete(&self, id: ContentId) -> Result<ContentId, StoreError> {
        tracing::info!("Deleting content {}", id);
        self.store.delete(id).await
    }

    /// Persists `current ∪ genres` as the new genre set.
    pub async fn add_genres(
        &self,
        id: ContentId,
        genres: &[String],
    ) -> Result<Option<Content>, StoreError> {
        let Some(content) = self.store.read(id).await? else {
            return Ok(None);
        };

        let genre_list = genre_union(&content.genre_list, genres);
        tracing::info!("Adding genres {:?} to content {}", genres, id);
        self.store.update(id, &ContentInput::genres(genre_list)).await
    }

    /// Persists `current \ genres` as the new genre set.
    pub async fn remove_genres(
        &self,
        id: ContentId,
        genres: &[String],
    ) -> Result<Option<Content>, StoreError> {
        let Some(content) = self.store.read(id).await? else {
            return Ok(None);
        };

        let genre_list = genre_difference(&content.genre_list, genres);
        tracing::info!("Removing genres {:?} from content {}", genres, id);
        self.store.update(id, &ContentInput::genres(genre_list)).await
    }
}
