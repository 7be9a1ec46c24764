//! Integration tests for the catalog.
//!
//! These build the app from configuration and drive it through the
//! cache-aside service, the same way the HTTP handlers do.

use catalog_content::config::{CatalogConfig, StoreBackend};
use catalog_content::domain::mapper::ContentInput;
use catalog_content::CatalogApp;
use tempfile::TempDir;

fn genres(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn memory_config(seed: bool) -> CatalogConfig {
    let mut config = CatalogConfig::default();
    config.store.backend = StoreBackend::Memory;
    config.store.seed_mock_data = seed;
    config
}

fn sled_config(dir: &TempDir, seed: bool) -> CatalogConfig {
    let mut config = CatalogConfig::default();
    config.store.backend = StoreBackend::Sled;
    config.store.data_dir = dir.path().to_path_buf();
    config.store.seed_mock_data = seed;
    config
}

#[tokio::test]
async fn test_seeded_memory_catalog_is_filterable() {
    let app = CatalogApp::new(memory_config(true)).unwrap();
    let service = app.service();

    let all = service.get_many().await.unwrap();
    assert!(!all.is_empty());

    let cast = service.get_filtered(Some("cast"), None).await.unwrap();
    assert!(!cast.is_empty());
    assert!(cast
        .iter()
        .all(|c| c.title.as_deref().unwrap().to_lowercase().contains("cast")));
    assert!(cast
        .iter()
        .any(|c| c.title.as_deref() == Some("Broadcast News")));
}

#[tokio::test]
async fn test_genre_scenario_end_to_end() {
    let app = CatalogApp::new(memory_config(false)).unwrap();
    let service = app.service();

    let created = service
        .create(&ContentInput {
            title: Some("Alpha".to_string()),
            genre_list: Some(genres(&["drama"])),
            ..ContentInput::default()
        })
        .await
        .unwrap();

    let added = service
        .add_genres(created.id, &genres(&["comedy", "DRAMA"]))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(added.genre_list, genres(&["drama", "comedy"]));

    let removed = service
        .remove_genres(created.id, &genres(&["Drama"]))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(removed.genre_list, genres(&["comedy"]));

    // Manager view and cached view agree.
    let from_store = service.manager().get(created.id).await.unwrap().unwrap();
    let from_cache = service.cache().get(created.id).await.unwrap();
    assert_eq!(from_store, removed);
    assert_eq!(from_cache, removed);
}

#[tokio::test]
async fn test_sled_catalog_persists_across_restarts() {
    let dir = TempDir::new().unwrap();

    let id = {
        let app = CatalogApp::new(sled_config(&dir, false)).unwrap();
        let created = app
            .service()
            .create(&ContentInput {
                title: Some("Kept".to_string()),
                ..ContentInput::default()
            })
            .await
            .unwrap();
        app.flush().await.unwrap();
        created.id
    };

    let app = CatalogApp::new(sled_config(&dir, false)).unwrap();
    let read = app.service().get(id).await.unwrap().unwrap();
    assert_eq!(read.title.as_deref(), Some("Kept"));
}

#[tokio::test]
async fn test_sled_seeding_happens_once() {
    let dir = TempDir::new().unwrap();

    let first = {
        let app = CatalogApp::new(sled_config(&dir, true)).unwrap();
        app.flush().await.unwrap();
        app.service().get_many().await.unwrap().len()
    };
    assert!(first > 0);

    let app = CatalogApp::new(sled_config(&dir, true)).unwrap();
    assert_eq!(app.service().get_many().await.unwrap().len(), first);
}

#[tokio::test]
async fn test_delete_twice_through_app() {
    let app = CatalogApp::new(memory_config(true)).unwrap();
    let service = app.service();
    let target = service.get_many().await.unwrap().remove(0);

    assert_eq!(service.get(target.id).await.unwrap(), Some(target.clone()));
    assert_eq!(service.delete(target.id).await.unwrap(), target.id);
    assert!(service.delete(target.id).await.unwrap().is_nil());
    assert!(service.get(target.id).await.unwrap().is_none());
}

#[test]
fn test_router_from_app() {
    let app = CatalogApp::new(memory_config(false)).unwrap();
    let _router = app.router();
    assert_eq!(app.config().store.backend, StoreBackend::Memory);
}
