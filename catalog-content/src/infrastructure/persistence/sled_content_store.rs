//! Sled-based document store for content.
//!
//! Each record is stored as a JSON document keyed by the hyphenated string
//! form of its id.

use async_trait::async_trait;
use sled::Db;
use std::path::Path;

use crate::domain::content::{Content, ContentId};
use crate::domain::content_id::ContentIdGenerator;
use crate::domain::mapper::{ContentInput, ContentMapper, DefaultContentMapper};
use crate::infrastructure::content_id::UuidContentIdGenerator;
use crate::infrastructure::mock_data::generate_mocks;
use crate::port::content_store::{ContentStore, StoreError};

const CONTENT_TREE_NAME: &str = "contents";

pub struct SledContentStore<M = DefaultContentMapper, G = UuidContentIdGenerator> {
    db: Db,
    mapper: M,
    id_generator: G,
}

impl SledContentStore {
    /// Open or create a sled database at the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let db = sled::open(path.as_ref()).map_err(unavailable)?;
        Ok(Self::with_db(db))
    }

    /// Use an existing sled database instance.
    pub fn with_db(db: Db) -> Self {
        Self::with_parts(db, DefaultContentMapper, UuidContentIdGenerator)
    }
}

impl<M, G> SledContentStore<M, G>
where
    M: ContentMapper,
    G: ContentIdGenerator,
{
    pub fn with_parts(db: Db, mapper: M, id_generator: G) -> Self {
        Self {
            db,
            mapper,
            id_generator,
        }
    }

    /// Insert the mock catalog if the store holds no documents yet.
    /// Returns the number of inserted records.
    pub fn seed_if_empty(&self) -> Result<usize, StoreError> {
        let tree = self.tree()?;
        if !tree.is_empty() {
            return Ok(0);
        }

        let mocks = generate_mocks(&self.mapper, &self.id_generator);
        for content in &mocks {
            tree.insert(document_key(content.id), encode(content)?)
                .map_err(unavailable)?;
        }
        Ok(mocks.len())
    }

    fn tree(&self) -> Result<sled::Tree, StoreError> {
        self.db.open_tree(CONTENT_TREE_NAME).map_err(unavailable)
    }

    fn get_document(
        &self,
        tree: &sled::Tree,
        id: ContentId,
    ) -> Result<Option<Content>, StoreError> {
        match tree.get(document_key(id)).map_err(unavailable)? {
            Some(bytes) => Ok(Some(decode(&bytes)?)),
            None => Ok(None),
        }
    }
}

fn document_key(id: ContentId) -> Vec<u8> {
    id.to_string().into_bytes()
}

fn encode(content: &Content) -> Result<Vec<u8>, StoreError> {
    serde_json::to_vec(content).map_err(|e| StoreError::Serialization(e.to_string()))
}

fn decode(bytes: &[u8]) -> Result<Content, StoreError> {
    serde_json::from_slice(bytes).map_err(|e| StoreError::Serialization(e.to_string()))
}

fn unavailable(err: sled::Error) -> StoreError {
    StoreError::Unavailable(err.to_string())
}

#[async_trait]
impl<M, G> ContentStore for SledContentStore<M, G>
where
    M: ContentMapper,
    G: ContentIdGenerator,
{
    async fn create(&self, input: &ContentInput) -> Result<Content, StoreError> {
        let tree = self.tree()?;
        let id = self.id_generator.generate();
        let content = self.mapper.to_entity(id, input);
        let document = encode(&content)?;

        // Insert only if the key is absent, so a colliding id never overwrites.
        let swapped = tree
            .compare_and_swap(document_key(id), None as Option<&[u8]>, Some(document))
            .map_err(unavailable)?;
        if swapped.is_err() {
            return Err(StoreError::DuplicateId(id));
        }
        Ok(content)
    }

    async fn read(&self, id: ContentId) -> Result<Option<Content>, StoreError> {
        let tree = self.tree()?;
        self.get_document(&tree, id)
    }

    async fn read_all(&self) -> Result<Vec<Content>, StoreError> {
        let tree = self.tree()?;
        let mut contents = Vec::new();
        for entry in tree.iter() {
            let (_, value) = entry.map_err(unavailable)?;
            contents.push(decode(&value)?);
        }
        Ok(contents)
    }

    async fn update(
        &self,
        id: ContentId,
        input: &ContentInput,
    ) -> Result<Option<Content>, StoreError> {
        let tree = self.tree()?;
        let key = document_key(id);

        // Swap against the bytes just read, so a concurrent delete is never undone.
        loop {
            let Some(current) = tree.get(&key).map_err(unavailable)? else {
                return Ok(None);
            };

            let updated = self.mapper.patch(&decode(&current)?, input);
            let swapped = tree
                .compare_and_swap(&key, Some(&current), Some(encode(&updated)?))
                .map_err(unavailable)?;
            if swapped.is_ok() {
                return Ok(Some(updated));
            }
        }
    }

    async fn delete(&self, id: ContentId) -> Result<ContentId, StoreError> {
        let tree = self.tree()?;
        match tree.remove(document_key(id)).map_err(unavailable)? {
            Some(_) => Ok(id),
            None => Ok(ContentId::nil()),
        }
    }

    async fn flush(&self) -> Result<(), StoreError> {
        self.db.flush_async().await.map_err(unavailable)?;
        Ok(())
    }
}
