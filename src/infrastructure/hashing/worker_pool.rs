//! Bounded pool for CPU-bound work.

use serde_json::json;
use std::sync::Arc;
use tokio::sync::Semaphore;

use crate::error::AppError;

/// Runs blocking jobs on tokio's blocking threads, at most `size` at a time.
///
/// Jobs beyond the limit wait for a permit asynchronously, so callers never
/// block the request-handling workers.
#[derive(Debug, Clone)]
pub struct HashWorkerPool {
    permits: Arc<Semaphore>,
    size: usize,
}

impl HashWorkerPool {
    /// Creates a pool running at most `size` jobs concurrently.
    ///
    /// A `size` of zero is raised to one.
    pub fn new(size: usize) -> Self {
        let size = size.max(1);
        Self {
            permits: Arc::new(Semaphore::new(size)),
            size,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of jobs that could start right now without waiting.
    pub fn available(&self) -> usize {
        self.permits.available_permits()
    }

    /// Runs `job` on a blocking thread once a slot is free.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the job panics or the pool is closed.
    pub async fn run<F, T>(&self, job: F) -> Result<T, AppError>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        if self.available() == 0 {
            tracing::debug!(size = self.size, "Hash workers busy, waiting for a slot");
        }

        let permit = self.permits.clone().acquire_owned().await.map_err(|e| {
            AppError::internal("Hash worker pool closed", json!({ "reason": e.to_string() }))
        })?;

        tokio::task::spawn_blocking(move || {
            let _permit = permit;
            job()
        })
        .await
        .map_err(|e| AppError::internal("Hash worker failed", json!({ "reason": e.to_string() })))
    }
}
