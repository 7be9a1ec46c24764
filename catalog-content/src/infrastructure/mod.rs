pub mod content_id;
pub mod in_memory_store;
pub mod mock_data;
pub mod moka_cache;
pub mod persistence;

pub use content_id::UuidContentIdGenerator;
pub use in_memory_store::InMemoryContentStore;
pub use moka_cache::MokaContentCache;
pub use persistence::SledContentStore;
