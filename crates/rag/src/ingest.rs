//! Ingestion pipeline: extract → chunk → embed → upsert.
//!
//! Each ingestion run gets a fresh document id, and every vector record
//! is keyed `{tenant}-{doc}-{seq}`, so concurrent uploads for the same
//! tenant never overwrite each other's vectors.

use std::sync::Arc;

use groundbot_core::document::{Chunk, DocumentId, IngestReceipt, TenantId};
use groundbot_core::error::Result;
use groundbot_core::gateway::{EmbeddingGateway, TextExtractor, VectorRecord, VectorStoreGateway};
use tracing::info;
use uuid::Uuid;

use crate::chunker;

/// The blocking ingestion pipeline for one process.
pub struct IngestPipeline {
    extractor: Arc<dyn TextExtractor>,
    embedder: Arc<dyn EmbeddingGateway>,
    store: Arc<dyn VectorStoreGateway>,
    chunk_size: usize,
    chunk_overlap: usize,
}

impl IngestPipeline {
    pub fn new(
        extractor: Arc<dyn TextExtractor>,
        embedder: Arc<dyn EmbeddingGateway>,
        store: Arc<dyn VectorStoreGateway>,
        chunk_size: usize,
        chunk_overlap: usize,
    ) -> Self {
        Self {
            extractor,
            embedder,
            store,
            chunk_size,
            chunk_overlap,
        }
    }

    /// Ingest one document for a tenant.
    ///
    /// An empty or whitespace-only document yields a zero-chunk receipt
    /// without calling the embedding or vector-store gateways.
    pub async fn ingest(&self, tenant_id: &TenantId, bytes: &[u8]) -> Result<IngestReceipt> {
        let doc_id = DocumentId::new(Uuid::new_v4().to_string());

        let text = self.extractor.extract_text(bytes)?;
        let chunks = chunker::chunk(&text, self.chunk_size, self.chunk_overlap)?;

        if chunks.is_empty() {
            info!(tenant = %tenant_id, doc = %doc_id, "Document produced no chunks");
            return Ok(IngestReceipt {
                tenant_id: tenant_id.clone(),
                doc_id,
                chunk_count: 0,
            });
        }

        let embeddings = self.embedder.embed(&chunks).await?;

        let records: Vec<VectorRecord> = chunks
            .into_iter()
            .zip(embeddings)
            .enumerate()
            .map(|(seq, (text, vector))| {
                let chunk = Chunk::new(tenant_id.clone(), doc_id.clone(), text, seq);
                VectorRecord {
                    id: chunk.id,
                    vector,
                    tenant_id: chunk.tenant_id,
                    doc_id: chunk.doc_id,
                    text: chunk.text,
                }
            })
            .collect();

        let chunk_count = records.len();
        self.store.upsert(records).await?;

        info!(tenant = %tenant_id, doc = %doc_id, chunks = chunk_count, "Document ingested");

        Ok(IngestReceipt {
            tenant_id: tenant_id.clone(),
            doc_id,
            chunk_count,
        })
    }
}
