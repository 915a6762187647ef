//! Scripted test doubles for the reasoning loop.

use std::sync::Mutex;

use async_trait::async_trait;
use groundbot_core::error::GatewayError;
use groundbot_core::gateway::CompletionGateway;

/// A completion gateway that replays a fixed script of responses and
/// records every prompt it was given.
pub struct ScriptedCompletion {
    responses: Vec<String>,
    failure: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedCompletion {
    pub fn new(responses: Vec<&str>) -> Self {
        Self {
            responses: responses.into_iter().map(String::from).collect(),
            failure: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// A gateway whose every call fails with a network error.
    pub fn failing(message: &str) -> Self {
        Self {
            responses: Vec::new(),
            failure: Some(message.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().map(|p| p.len()).unwrap_or(0)
    }

    /// The user prompt passed to the nth call (zero-based).
    pub fn prompt(&self, n: usize) -> String {
        self.prompts
            .lock()
            .ok()
            .and_then(|p| p.get(n).cloned())
            .unwrap_or_default()
    }
}

#[async_trait]
impl CompletionGateway for ScriptedCompletion {
    async fn complete(
        &self,
        _system_prompt: &str,
        user_prompt: &str,
        _temperature: f32,
    ) -> Result<String, GatewayError> {
        let call = {
            let mut prompts = self
                .prompts
                .lock()
                .map_err(|_| GatewayError::Network("poisoned prompt log".into()))?;
            prompts.push(user_prompt.to_string());
            prompts.len() - 1
        };

        if let Some(message) = &self.failure {
            return Err(GatewayError::Network(message.clone()));
        }

        match self.responses.get(call) {
            Some(response) => Ok(response.clone()),
            None => panic!("scripted completion exhausted after {call} calls"),
        }
    }
}
