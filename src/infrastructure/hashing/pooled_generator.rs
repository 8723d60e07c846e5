//! BLAKE2b code generator backed by the hash worker pool.

use async_trait::async_trait;

use super::worker_pool::HashWorkerPool;
use crate::domain::entities::ShortCode;
use crate::domain::generator::CodeGenerator;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;

/// [`CodeGenerator`] that hashes on a [`HashWorkerPool`].
#[derive(Debug, Clone)]
pub struct PooledCodeGenerator {
    pool: HashWorkerPool,
}

impl PooledCodeGenerator {
    pub fn new(pool: HashWorkerPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CodeGenerator for PooledCodeGenerator {
    async fn generate(&self, long_url: &str, randomize: bool) -> Result<ShortCode, AppError> {
        let url = long_url.to_string();
        self.pool
            .run(move || generate_code(&url, randomize))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_deterministic_generation() {
        let generator = PooledCodeGenerator::new(HashWorkerPool::new(2));

        let first = generator.generate("http://example.com", false).await.unwrap();
        let second = generator.generate("http://example.com", false).await.unwrap();

        assert_eq!(first.as_str(), "2a55966625");
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_randomized_generation_differs() {
        let generator = PooledCodeGenerator::new(HashWorkerPool::new(2));

        let a = generator.generate("http://example.com", true).await.unwrap();
        let b = generator.generate("http://example.com", true).await.unwrap();

        assert_ne!(a, b);
    }
}
