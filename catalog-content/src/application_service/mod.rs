pub mod cached_content_service;
pub mod content_manager;

pub use cached_content_service::CachedContentService;
pub use content_manager::ContentManager;
