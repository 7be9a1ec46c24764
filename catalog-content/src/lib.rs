pub mod app;
pub mod application_service;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod port;
pub mod presentation;

#[cfg(test)]
pub(crate) mod test_utils;

pub use app::CatalogApp;
pub use config::{CatalogConfig, StoreBackend};
pub use domain::*;
pub use port::*;
