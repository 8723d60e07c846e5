#![allow(dead_code)]

use axum_test::TestServer;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use pushort::domain::entities::{ShortCode, UrlRecord};
use pushort::domain::repositories::UrlStore;
use pushort::infrastructure::hashing::{HashWorkerPool, PooledCodeGenerator};
use pushort::infrastructure::persistence::MemoryUrlStore;
use pushort::routes::router;
use pushort::state::AppState;
use pushort::utils::url_normalizer::describe_url;

pub const SHORT_DOMAIN: &str = "http://s.test";

pub fn create_test_state() -> (AppState, Arc<MemoryUrlStore>) {
    create_test_state_with(Arc::new(MemoryUrlStore::new()), 10)
}

pub fn create_test_state_with(
    store: Arc<MemoryUrlStore>,
    max_code_attempts: usize,
) -> (AppState, Arc<MemoryUrlStore>) {
    let generator = Arc::new(PooledCodeGenerator::new(HashWorkerPool::new(4)));
    let state = AppState::new(store.clone(), generator, SHORT_DOMAIN, max_code_attempts);
    (state, store)
}

pub fn create_test_server() -> (TestServer, Arc<MemoryUrlStore>) {
    let (state, store) = create_test_state();
    (TestServer::new(router(state)).unwrap(), store)
}

pub async fn insert_link(
    store: &MemoryUrlStore,
    code: &str,
    url: &str,
    expires_time: Option<DateTime<Utc>>,
) {
    let record = UrlRecord::new(describe_url(url), ShortCode::parse(code).unwrap(), expires_time);
    store.insert(&record).await.unwrap();
}

/// Extracts the code from an absolute short URL.
pub fn code_of(short_url: &str) -> &str {
    short_url.rsplit('/').next().unwrap()
}
