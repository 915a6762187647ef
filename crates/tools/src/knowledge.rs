//! Knowledge search tool — the tenant-bound retrieval capability.
//!
//! Wraps the retrieval service so the agent can pull evidence from the
//! calling tenant's knowledge base mid-loop. The tenant and top_k come
//! from the invocation context, never from ambient state.

use async_trait::async_trait;
use groundbot_core::error::ToolError;
use groundbot_core::tool::{Tool, ToolContext};
use groundbot_rag::RetrievalService;
use std::sync::Arc;
use tracing::debug;

pub struct KnowledgeSearchTool {
    retrieval: Arc<RetrievalService>,
}

impl KnowledgeSearchTool {
    pub fn new(retrieval: Arc<RetrievalService>) -> Self {
        Self { retrieval }
    }
}

#[async_trait]
impl Tool for KnowledgeSearchTool {
    fn name(&self) -> &str {
        "knowledge_search"
    }

    fn description(&self) -> &str {
        "Search the knowledge base for information relevant to a question. Returns document passages sorted by relevance."
    }

    async fn invoke(&self, ctx: &ToolContext, input: &str) -> Result<String, ToolError> {
        // The model sometimes emits an empty Action Input; fall back to
        // the user's original question.
        let query = if input.trim().is_empty() {
            ctx.query.as_str()
        } else {
            input.trim()
        };

        let ranked = self
            .retrieval
            .retrieve(&ctx.tenant_id, query, ctx.top_k)
            .await
            .map_err(|e| ToolError::ExecutionFailed {
                tool_name: "knowledge_search".into(),
                reason: e.to_string(),
            })?;

        debug!(tenant = %ctx.tenant_id, hits = ranked.len(), "knowledge_search completed");

        if ranked.is_empty() {
            return Ok("No relevant passages found in the knowledge base.".into());
        }

        let formatted: Vec<String> = ranked
            .iter()
            .enumerate()
            .map(|(i, hit)| format!("[{}] (score {:.2}) {}", i + 1, hit.score, hit.text))
            .collect();

        Ok(formatted.join("\n"))
    }
}
