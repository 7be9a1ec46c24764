//! Persistent storage implementations using sled.

pub mod sled_content_store;

pub use sled_content_store::SledContentStore;
