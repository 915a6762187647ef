//! In-memory vector store — cosine-ranked, tenant-filtered.
//!
//! Useful for tests and single-process deployments. The tenant filter
//! is applied inside the store before ranking, matching the contract of
//! the external vector databases this trait fronts.

use async_trait::async_trait;
use groundbot_core::document::{ScoredChunk, TenantId};
use groundbot_core::error::GatewayError;
use groundbot_core::gateway::{VectorRecord, VectorStoreGateway};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// An in-memory vector index keyed by record id.
///
/// Upserts replace records with the same id, so re-ingesting a document
/// under the same key is idempotent. Reads take the lock shared; the
/// index is read-mostly (writes only happen during ingestion).
pub struct InMemoryVectorStore {
    dimension: usize,
    records: RwLock<HashMap<String, VectorRecord>>,
}

impl InMemoryVectorStore {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored records (across all tenants).
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl VectorStoreGateway for InMemoryVectorStore {
    async fn upsert(&self, records: Vec<VectorRecord>) -> Result<(), GatewayError> {
        for record in &records {
            if record.vector.len() != self.dimension {
                return Err(GatewayError::DimensionMismatch {
                    expected: self.dimension,
                    got: record.vector.len(),
                });
            }
        }

        let mut store = self.records.write().await;
        for record in records {
            store.insert(record.id.clone(), record);
        }
        Ok(())
    }

    async fn query(
        &self,
        vector: &[f32],
        top_k: usize,
        tenant_id: &TenantId,
    ) -> Result<Vec<ScoredChunk>, GatewayError> {
        if vector.len() != self.dimension {
            return Err(GatewayError::DimensionMismatch {
                expected: self.dimension,
                got: vector.len(),
            });
        }

        let store = self.records.read().await;

        let mut scored: Vec<ScoredChunk> = store
            .values()
            .filter(|r| &r.tenant_id == tenant_id)
            .map(|r| ScoredChunk {
                text: r.text.clone(),
                score: cosine_similarity(&r.vector, vector),
            })
            .collect();

        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(top_k);
        Ok(scored)
    }
}

/// Cosine similarity in [-1, 1]; 0.0 for mismatched lengths, empty
/// input, or a zero-norm vector.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;

    for (x, y) in a.iter().zip(b.iter()) {
        let x = *x as f64;
        let y = *y as f64;
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom < 1e-10 {
        return 0.0;
    }

    (dot / denom) as f32
}
