//! Tools and the tool registry.
//!
//! A tool is a capability the reasoning loop can dispatch to when the
//! model emits an `Action:` line: knowledge retrieval, external
//! lookups, anything registered at startup.

use async_trait::async_trait;
use std::collections::BTreeMap;

use crate::document::TenantId;
use crate::error::ToolError;

/// The full context a tool invocation receives.
///
/// Every field is passed explicitly — tools never read tenant or query
/// state from ambient request-scoped storage.
#[derive(Debug, Clone)]
pub struct ToolContext {
    /// The tenant whose knowledge base this call is scoped to.
    pub tenant_id: TenantId,
    /// The user's original question.
    pub query: String,
    /// How many retrieval results the caller asked for.
    pub top_k: usize,
}

/// A tool's catalog entry, as rendered into the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSpec {
    pub name: String,
    pub description: String,
}

/// The core Tool trait.
///
/// Input and output are plain text: the ReAct grammar carries a
/// free-text `Action Input` and feeds the result back as a free-text
/// `Observation`. A tool may fail; the loop folds the failure into the
/// transcript rather than aborting.
#[async_trait]
pub trait Tool: Send + Sync {
    /// The unique name of this tool (e.g., "knowledge_search").
    fn name(&self) -> &str;

    /// A description of what this tool does (rendered into the prompt).
    fn description(&self) -> &str;

    /// Execute the tool with the given input string.
    async fn invoke(&self, ctx: &ToolContext, input: &str) -> Result<String, ToolError>;
}

/// A registry of available tools.
///
/// The loop uses this to render the tool catalog into the prompt and
/// to look up tools by exact name when the model requests an action.
/// Backed by a `BTreeMap` so catalog order is deterministic — the
/// prompt builder must produce identical output for identical inputs.
pub struct ToolRegistry {
    tools: BTreeMap<String, Box<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: BTreeMap::new(),
        }
    }

    /// Register a tool, replacing any earlier tool with the same name.
    pub fn register(&mut self, tool: Box<dyn Tool>) {
        let name = tool.name().to_string();
        self.tools.insert(name, tool);
    }

    /// Look up a tool by exact name. An absent name is `None`, not a
    /// panic — the loop turns it into the unknown-tool answer.
    pub fn get(&self, name: &str) -> Option<&dyn Tool> {
        self.tools.get(name).map(|t| t.as_ref())
    }

    /// The catalog of registered tools, sorted by name.
    pub fn catalog(&self) -> Vec<ToolSpec> {
        self.tools
            .values()
            .map(|t| ToolSpec {
                name: t.name().to_string(),
                description: t.description().to_string(),
            })
            .collect()
    }

    /// The registered tool names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.tools.keys().map(|s| s.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
