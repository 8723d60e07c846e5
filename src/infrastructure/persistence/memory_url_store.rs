//! In-process implementation of the URL store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tokio::sync::RwLock;

use crate::domain::entities::{ShortCode, UrlDescriptor, UrlRecord};
use crate::domain::repositories::{StoreCounts, UrlStore};
use crate::error::AppError;

#[derive(Debug, Default)]
struct Inner {
    /// Primary map; the key is the uniqueness constraint on `short_part`.
    by_code: HashMap<ShortCode, UrlRecord>,
    /// Codes of permanent records grouped by long URL, for reuse lookups.
    permanent_by_url: HashMap<String, Vec<ShortCode>>,
}

impl Inner {
    fn unlink_permanent(&mut self, record: &UrlRecord) {
        if let Some(codes) = self.permanent_by_url.get_mut(record.long_url()) {
            codes.retain(|c| c != &record.short_part);
            if codes.is_empty() {
                self.permanent_by_url.remove(record.long_url());
            }
        }
    }
}

/// URL store kept in process memory.
///
/// Used when no database is configured and in tests. Contents are lost on
/// restart. Expired records are removed by the expiry sweeper like in any
/// other backend.
#[derive(Debug, Default)]
pub struct MemoryUrlStore {
    inner: RwLock<Inner>,
}

impl MemoryUrlStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UrlStore for MemoryUrlStore {
    async fn find(&self, descriptor: &UrlDescriptor) -> Result<Option<UrlRecord>, AppError> {
        let inner = self.inner.read().await;

        let found = inner
            .permanent_by_url
            .get(&descriptor.long_url)
            .into_iter()
            .flatten()
            .filter_map(|code| inner.by_code.get(code))
            .find(|record| descriptor.matches(record))
            .cloned();

        Ok(found)
    }

    async fn find_by_code(&self, code: &ShortCode) -> Result<Option<UrlRecord>, AppError> {
        Ok(self.inner.read().await.by_code.get(code).cloned())
    }

    async fn insert(&self, record: &UrlRecord) -> Result<(), AppError> {
        let mut guard = self.inner.write().await;
        let inner = &mut *guard;

        match inner.by_code.entry(record.short_part.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict(
                "Short code already exists",
                json!({ "short_part": record.short_part }),
            )),
            Entry::Vacant(slot) => {
                slot.insert(record.clone());
                if record.is_permanent() {
                    inner
                        .permanent_by_url
                        .entry(record.long_url().to_string())
                        .or_default()
                        .push(record.short_part.clone());
                }
                Ok(())
            }
        }
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<u64, AppError> {
        let mut inner = self.inner.write().await;

        let expired: Vec<ShortCode> = inner
            .by_code
            .values()
            .filter(|record| record.is_expired_at(now))
            .map(|record| record.short_part.clone())
            .collect();

        for code in &expired {
            if let Some(record) = inner.by_code.remove(code) {
                inner.unlink_permanent(&record);
            }
        }

        Ok(expired.len() as u64)
    }

    async fn count(&self) -> Result<StoreCounts, AppError> {
        let inner = self.inner.read().await;
        let timed = inner
            .by_code
            .values()
            .filter(|record| !record.is_permanent())
            .count();

        Ok(StoreCounts {
            total: inner.by_code.len() as u64,
            timed: timed as u64,
        })
    }

    async fn health_check(&self) -> bool {
        true
    }
}
