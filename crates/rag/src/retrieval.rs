//! Retrieval service and scope gate.
//!
//! One retrieval path for every caller: embed the query, then issue a
//! tenant-filtered store query. The scope gate is a pure threshold
//! decision on the top hit — it decides whether the knowledge base is
//! strong enough to answer at all.

use std::sync::Arc;

use groundbot_core::document::{ScoredChunk, TenantId};
use groundbot_core::error::Result;
use groundbot_core::gateway::{EmbeddingGateway, VectorStoreGateway};
use tracing::debug;

/// Ranked retrieval over a tenant's knowledge base.
///
/// Collaborators are injected at construction; there is exactly one of
/// these per process, shared across requests.
pub struct RetrievalService {
    embedder: Arc<dyn EmbeddingGateway>,
    store: Arc<dyn VectorStoreGateway>,
}

impl RetrievalService {
    pub fn new(embedder: Arc<dyn EmbeddingGateway>, store: Arc<dyn VectorStoreGateway>) -> Self {
        Self { embedder, store }
    }

    /// Retrieve up to `top_k` chunks for `query`, ranked by descending
    /// similarity, strictly restricted to `tenant_id`. The tenant
    /// filter is applied by the store, never client-side.
    pub async fn retrieve(
        &self,
        tenant_id: &TenantId,
        query: &str,
        top_k: usize,
    ) -> Result<Vec<ScoredChunk>> {
        let embeddings = self.embedder.embed(&[query.to_string()]).await?;
        let query_vector = embeddings.into_iter().next().unwrap_or_default();

        let ranked = self.store.query(&query_vector, top_k, tenant_id).await?;

        debug!(
            tenant = %tenant_id,
            hits = ranked.len(),
            top_score = ranked.first().map(|c| c.score).unwrap_or(0.0),
            "Retrieval completed"
        );

        Ok(ranked)
    }
}

/// Decide whether retrieved evidence is strong enough to answer from
/// the knowledge base.
///
/// False for an empty ranking; otherwise the top hit's score must meet
/// `threshold`. Pure function, no mutation.
pub fn is_within_scope(ranked: &[ScoredChunk], threshold: f32) -> bool {
    match ranked.first() {
        Some(top) => top.score >= threshold,
        None => false,
    }
}
