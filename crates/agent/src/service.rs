//! The answer service — the top-level entry point for one tenant
//! question.
//!
//! Wires retrieval, the scope gate, and the reasoning loop together:
//! retrieve evidence for the question, decline if the knowledge base is
//! out of scope, otherwise hand the question to the loop. Also exposes
//! document ingestion for the same tenant boundary.

use std::sync::Arc;

use groundbot_config::AppConfig;
use groundbot_core::document::{IngestReceipt, TenantId};
use groundbot_core::error::Result;
use groundbot_core::gateway::{
    CompletionGateway, EmbeddingGateway, TextExtractor, VectorStoreGateway,
};
use groundbot_rag::{IngestPipeline, RetrievalService, is_within_scope};
use tracing::info;

use crate::prompt::DECLINE_ANSWER;
use crate::runtime::AgentRuntime;

pub struct AnswerService {
    retrieval: Arc<RetrievalService>,
    ingest_pipeline: IngestPipeline,
    runtime: AgentRuntime,
    top_k: usize,
    similarity_threshold: f32,
    max_iterations: u32,
}

impl AnswerService {
    /// Build the service from configuration and injected gateways.
    /// Every collaborator is constructed once here and shared for the
    /// life of the process.
    pub fn new(
        config: &AppConfig,
        completion: Arc<dyn CompletionGateway>,
        embedder: Arc<dyn EmbeddingGateway>,
        store: Arc<dyn VectorStoreGateway>,
        extractor: Arc<dyn TextExtractor>,
    ) -> Self {
        let retrieval = Arc::new(RetrievalService::new(embedder.clone(), store.clone()));
        let ingest_pipeline = IngestPipeline::new(
            extractor,
            embedder,
            store,
            config.chunking.chunk_size,
            config.chunking.chunk_overlap,
        );
        let registry = Arc::new(groundbot_tools::default_registry(retrieval.clone()));
        let runtime = AgentRuntime::new(completion, registry, config.temperature);

        Self {
            retrieval,
            ingest_pipeline,
            runtime,
            top_k: config.retrieval.top_k,
            similarity_threshold: config.retrieval.similarity_threshold,
            max_iterations: config.agent.max_iterations,
        }
    }

    /// Answer one question for one tenant.
    ///
    /// Retrieval runs first; if the best hit falls below the similarity
    /// threshold the fixed decline sentence is returned without any
    /// model call. Otherwise the reasoning loop runs to completion.
    pub async fn answer(&self, tenant_id: &TenantId, question: &str) -> Result<String> {
        let ranked = self
            .retrieval
            .retrieve(tenant_id, question, self.top_k)
            .await?;

        if !is_within_scope(&ranked, self.similarity_threshold) {
            info!(tenant = %tenant_id, "Question out of scope, declining");
            return Ok(DECLINE_ANSWER.to_string());
        }

        self.runtime
            .generate_answer(tenant_id, question, self.top_k, self.max_iterations)
            .await
    }

    /// Ingest one document into the tenant's knowledge base.
    pub async fn ingest(&self, tenant_id: &TenantId, bytes: &[u8]) -> Result<IngestReceipt> {
        self.ingest_pipeline.ingest(tenant_id, bytes).await
    }
}
