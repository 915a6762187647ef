//! Domain types for tenants, documents, and retrieval results.
//!
//! A tenant is the isolation boundary: one knowledge base per tenant,
//! and no retrieval ever crosses tenant boundaries. Documents are
//! ingested into overlapping chunks, which are the unit of embedding
//! and retrieval.

use serde::{Deserialize, Serialize};

/// Identifies a tenant (a "bot"). All index records and queries are
/// scoped to exactly one tenant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantId(pub String);

impl TenantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TenantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifies one ingested document. Generated at ingest time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(pub String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A bounded, overlapping span of source-document tokens.
///
/// Immutable once created. `sequence_index` is monotonic within a
/// document, and the id `{tenant}-{doc}-{seq}` is globally unique per
/// ingestion run, so concurrent uploads cannot overwrite each other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    pub id: String,
    pub tenant_id: TenantId,
    pub doc_id: DocumentId,
    pub text: String,
    pub sequence_index: usize,
}

impl Chunk {
    pub fn new(
        tenant_id: TenantId,
        doc_id: DocumentId,
        text: impl Into<String>,
        sequence_index: usize,
    ) -> Self {
        let id = format!("{}-{}-{}", tenant_id, doc_id, sequence_index);
        Self {
            id,
            tenant_id,
            doc_id,
            text: text.into(),
            sequence_index,
        }
    }
}

/// One ranked retrieval hit: chunk text plus similarity score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredChunk {
    pub text: String,
    pub score: f32,
}

/// The result of ingesting one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestReceipt {
    pub tenant_id: TenantId,
    pub doc_id: DocumentId,
    pub chunk_count: usize,
}
