//! The ReAct reasoning loop.
//!
//! Each iteration makes exactly one completion call and dispatches at
//! most one tool. The transcript accumulates raw model turns and their
//! observations; its length is bounded by the iteration cap. Tool
//! failures are folded back into the transcript as observations, an
//! unknown tool name ends the call immediately, and a completion
//! failure propagates to the caller.

use std::sync::Arc;

use groundbot_core::document::TenantId;
use groundbot_core::error::Result;
use groundbot_core::gateway::CompletionGateway;
use groundbot_core::tool::{ToolContext, ToolRegistry};
use tracing::{debug, warn};

use crate::parser::{ModelTurn, parse_model_turn};
use crate::prompt::{self, SYSTEM_PROMPT};

/// One transcript entry: a raw model turn and the observation its
/// action produced.
#[derive(Debug, Clone)]
struct ScratchpadEntry {
    model_turn: String,
    observation: String,
}

/// The accumulating thought/action/observation record for one call.
/// Not persisted; dropped when the call returns.
#[derive(Debug, Default)]
struct Transcript {
    entries: Vec<ScratchpadEntry>,
}

impl Transcript {
    fn push(&mut self, model_turn: String, observation: String) {
        self.entries.push(ScratchpadEntry {
            model_turn,
            observation,
        });
    }

    /// Render the scratchpad text exactly as the prompt embeds it.
    fn render(&self) -> String {
        self.entries
            .iter()
            .map(|e| format!("\n{}\nObservation: {}\n", e.model_turn, e.observation))
            .collect()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// The reasoning loop runtime. One per process, shared across calls;
/// all per-call state lives on the stack of [`Self::generate_answer`].
pub struct AgentRuntime {
    completion: Arc<dyn CompletionGateway>,
    tools: Arc<ToolRegistry>,
    temperature: f32,
    history: String,
}

impl AgentRuntime {
    pub fn new(
        completion: Arc<dyn CompletionGateway>,
        tools: Arc<ToolRegistry>,
        temperature: f32,
    ) -> Self {
        Self {
            completion,
            tools,
            temperature,
            history: String::new(),
        }
    }

    /// Supply prior conversation history to render into every prompt.
    pub fn with_history(mut self, history: impl Into<String>) -> Self {
        self.history = history.into();
        self
    }

    /// Run the loop for one question.
    ///
    /// Terminates on a final answer, on an unknown tool name, or when
    /// `iteration_cap` model calls have been made. On cap exhaustion the
    /// last raw model output is returned as a degraded answer.
    pub async fn generate_answer(
        &self,
        tenant_id: &TenantId,
        query: &str,
        top_k: usize,
        iteration_cap: u32,
    ) -> Result<String> {
        let catalog = self.tools.catalog();
        let ctx = ToolContext {
            tenant_id: tenant_id.clone(),
            query: query.to_string(),
            top_k,
        };

        let mut transcript = Transcript::default();
        let mut last_raw = String::new();

        for iteration in 1..=iteration_cap {
            let user_prompt =
                prompt::render(&catalog, &self.history, query, &transcript.render());

            let raw = self
                .completion
                .complete(SYSTEM_PROMPT, &user_prompt, self.temperature)
                .await?;
            let raw = raw.trim().to_string();

            debug!(
                tenant = %tenant_id,
                iteration,
                transcript_len = transcript.len(),
                "Model turn received"
            );

            match parse_model_turn(&raw) {
                ModelTurn::Action { name, input } => {
                    let Some(tool) = self.tools.get(&name) else {
                        warn!(tenant = %tenant_id, tool = %name, "Unknown tool requested");
                        return Ok(format!("Error: unknown tool {name}"));
                    };

                    let observation = match tool.invoke(&ctx, &input).await {
                        Ok(observation) => observation,
                        Err(e) => {
                            warn!(tenant = %tenant_id, tool = %name, error = %e, "Tool failed");
                            format!("Error while executing tool {name}: {e}")
                        }
                    };

                    transcript.push(raw.clone(), observation);
                    last_raw = raw;
                }
                ModelTurn::Final { answer } => {
                    debug!(tenant = %tenant_id, iteration, "Final answer produced");
                    return Ok(answer);
                }
                ModelTurn::Other { raw } => {
                    debug!(tenant = %tenant_id, iteration, "Unstructured turn, passing through");
                    return Ok(raw);
                }
            }
        }

        warn!(
            tenant = %tenant_id,
            iteration_cap,
            "Iteration cap reached without a final answer"
        );
        Ok(last_raw)
    }
}
