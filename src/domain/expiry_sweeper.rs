//! Background removal of expired URL records.
//!
//! Neither PostgreSQL nor the in-memory store expires rows on their own, so
//! a periodic task deletes every record whose `expires_time` has been reached.
//! Expiry is tied to the absolute instant stored on the record, never to the
//! time of insertion.

use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, error, info};

use crate::domain::repositories::UrlStore;

/// Runs one purge pass and returns the number of removed records.
///
/// Errors are logged and reported as zero removals so the sweeper keeps
/// running.
pub async fn sweep_once(store: &dyn UrlStore) -> u64 {
    match store.purge_expired(Utc::now()).await {
        Ok(0) => {
            debug!("Expiry sweep: nothing to purge");
            0
        }
        Ok(purged) => {
            info!(purged, "Expiry sweep removed expired links");
            metrics::counter!("shortener_expired_purged_total").increment(purged);
            purged
        }
        Err(e) => {
            error!(error = %e, "Expiry sweep failed");
            0
        }
    }
}

/// Purges expired records every `period` until the task is aborted.
pub async fn run_expiry_sweeper(store: Arc<dyn UrlStore>, period: Duration) {
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        sweep_once(store.as_ref()).await;
    }
}

/// Spawns [`run_expiry_sweeper`] on the runtime.
pub fn spawn_expiry_sweeper(store: Arc<dyn UrlStore>, period: Duration) -> JoinHandle<()> {
    info!(period_secs = period.as_secs(), "Expiry sweeper started");
    tokio::spawn(run_expiry_sweeper(store, period))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUrlStore;
    use crate::error::AppError;
    use serde_json::json;

    #[tokio::test]
    async fn test_sweep_once_reports_purged() {
        let mut store = MockUrlStore::new();
        store
            .expect_purge_expired()
            .times(1)
            .returning(|_| Ok(3));

        assert_eq!(sweep_once(&store).await, 3);
    }

    #[tokio::test]
    async fn test_sweep_once_swallows_errors() {
        let mut store = MockUrlStore::new();
        store
            .expect_purge_expired()
            .times(1)
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        assert_eq!(sweep_once(&store).await, 0);
    }

    #[tokio::test]
    async fn test_sweep_uses_current_time() {
        let before = Utc::now();
        let mut store = MockUrlStore::new();
        store
            .expect_purge_expired()
            .withf(move |now| *now >= before)
            .times(1)
            .returning(|_| Ok(0));

        assert_eq!(sweep_once(&store).await, 0);
    }
}
