//! Built-in tool implementations for Groundbot.
//!
//! Tools are what the reasoning loop can dispatch to: searching the
//! tenant's knowledge base and looking up external facts. Additional
//! capabilities register through the same [`ToolRegistry`].

pub mod knowledge;
pub mod weather;

use std::sync::Arc;

use groundbot_core::tool::ToolRegistry;
use groundbot_rag::RetrievalService;

pub use knowledge::KnowledgeSearchTool;
pub use weather::WeatherTool;

/// Create the default tool registry: knowledge search bound to the
/// given retrieval service, plus the weather lookup.
pub fn default_registry(retrieval: Arc<RetrievalService>) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Box::new(KnowledgeSearchTool::new(retrieval)));
    registry.register(Box::new(WeatherTool));
    registry
}
