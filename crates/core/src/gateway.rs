//! Collaborator traits — the seams to external services.
//!
//! The runtime consumes four collaborators: an embedding model, a
//! vector store, an LLM completion endpoint, and a document text
//! extractor. Each is a trait so implementations can be swapped via
//! configuration and substituted with scripted doubles in tests —
//! there are no lazily-initialized global clients anywhere.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::document::{DocumentId, ScoredChunk, TenantId};
use crate::error::GatewayError;

/// A record as stored in the vector index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorRecord {
    /// Unique key: `{tenant}-{doc}-{seq}`.
    pub id: String,
    pub vector: Vec<f32>,
    pub tenant_id: TenantId,
    pub doc_id: DocumentId,
    pub text: String,
}

/// Text → fixed-dimension vector.
///
/// The dimension is fixed per model version and must match the vector
/// store's configured dimension. Deterministic for a fixed model.
#[async_trait]
pub trait EmbeddingGateway: Send + Sync {
    /// Embed a batch of texts, one vector per input.
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, GatewayError>;

    /// The dimensionality of every vector this gateway produces.
    fn dimension(&self) -> usize;
}

/// Tenant-filtered upsert/query over vector records.
///
/// Tenant filtering is mandatory and happens inside the store — results
/// are never filtered client-side after an unfiltered query.
#[async_trait]
pub trait VectorStoreGateway: Send + Sync {
    async fn upsert(&self, records: Vec<VectorRecord>) -> Result<(), GatewayError>;

    /// Rank records for one tenant by similarity to `vector`, descending,
    /// at most `top_k` results.
    async fn query(
        &self,
        vector: &[f32],
        top_k: usize,
        tenant_id: &TenantId,
    ) -> Result<Vec<ScoredChunk>, GatewayError>;
}

/// The LLM completion collaborator.
///
/// One call per loop iteration. Transport and auth failures surface as
/// `GatewayError` and abort the in-flight answer; they are never
/// swallowed into an empty response.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        temperature: f32,
    ) -> Result<String, GatewayError>;
}

/// Raw document bytes → plain text.
///
/// Per-page or per-region decode failures are tolerated and skipped,
/// never fatal: a partially readable document still ingests.
pub trait TextExtractor: Send + Sync {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, GatewayError>;
}
