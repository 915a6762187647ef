//! Deterministic offline embedder.
//!
//! Maps text to a fixed-dimension bag-of-tokens vector via token
//! hashing. No model, no network — the same text always produces the
//! same vector, and texts sharing tokens land near each other. Good
//! enough for tests and keyless local runs; real deployments use an
//! embedding model behind the same trait.

use async_trait::async_trait;
use groundbot_core::error::GatewayError;
use groundbot_core::gateway::EmbeddingGateway;

/// Default dimension, matching small sentence-embedding models.
pub const DEFAULT_DIMENSION: usize = 384;

pub struct HashEmbedder {
    dimension: usize,
}

impl HashEmbedder {
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }

    fn embed_one(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.dimension];
        for token in text.to_lowercase().split_whitespace() {
            let hash: u32 = token
                .bytes()
                .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u32));
            vector[(hash as usize) % self.dimension] += 1.0;
        }

        // L2-normalize so cosine similarity behaves like the real thing.
        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for x in &mut vector {
                *x /= norm;
            }
        }
        vector
    }
}

impl Default for HashEmbedder {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSION)
    }
}

#[async_trait]
impl EmbeddingGateway for HashEmbedder {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, GatewayError> {
        Ok(texts.iter().map(|t| self.embed_one(t)).collect())
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}
