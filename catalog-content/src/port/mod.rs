//! Port layer - Abstract interfaces for infrastructure dependencies
//!
//! The application layer only talks to storage and caching through these
//! traits, so backends can be swapped at construction time.

pub mod content_cache;
pub mod content_store;

pub use content_cache::ContentCache;
pub use content_store::{ContentStore, StoreError};
