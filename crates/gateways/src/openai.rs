//! OpenAI-compatible gateway implementation.
//!
//! Works with OpenAI, OpenRouter, Ollama, vLLM, and any endpoint that
//! exposes `/v1/chat/completions` and `/v1/embeddings`. Implements both
//! [`CompletionGateway`] and [`EmbeddingGateway`].

use async_trait::async_trait;
use groundbot_core::error::GatewayError;
use groundbot_core::gateway::{CompletionGateway, EmbeddingGateway};
use serde::Deserialize;
use tracing::{debug, warn};

/// An OpenAI-compatible HTTP gateway.
pub struct OpenAiGateway {
    base_url: String,
    api_key: String,
    model: String,
    embedding_model: String,
    embedding_dimension: usize,
    client: reqwest::Client,
}

impl OpenAiGateway {
    /// Create a new gateway against an OpenAI-compatible endpoint.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
        embedding_model: impl Into<String>,
        embedding_dimension: usize,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .unwrap_or_default();

        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: model.into(),
            embedding_model: embedding_model.into(),
            embedding_dimension,
            client,
        }
    }

    /// Create an OpenAI gateway with the stock models this runtime
    /// defaults to (gpt-4o-mini + text-embedding-3-small, 1536 dims).
    pub fn openai(api_key: impl Into<String>) -> Self {
        Self::new(
            "https://api.openai.com/v1",
            api_key,
            "gpt-4o-mini",
            "text-embedding-3-small",
            1536,
        )
    }

    fn check_status(status: u16, body: String) -> Result<String, GatewayError> {
        match status {
            200 => Ok(body),
            429 => Err(GatewayError::RateLimited {
                retry_after_secs: 5,
            }),
            401 | 403 => Err(GatewayError::AuthenticationFailed(
                "API key rejected by endpoint".into(),
            )),
            _ => {
                warn!(status, body = %body, "Gateway returned error");
                Err(GatewayError::ApiError {
                    status_code: status,
                    message: body,
                })
            }
        }
    }
}

#[async_trait]
impl CompletionGateway for OpenAiGateway {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        temperature: f32,
    ) -> Result<String, GatewayError> {
        let url = format!("{}/chat/completions", self.base_url);

        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system_prompt },
                { "role": "user", "content": user_prompt },
            ],
            "temperature": temperature,
            "stream": false,
        });

        debug!(model = %self.model, "Sending completion request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response.text().await.unwrap_or_default();
        let text = Self::check_status(status, text)?;

        let api_response: ChatResponse =
            serde_json::from_str(&text).map_err(|e| GatewayError::ApiError {
                status_code: 200,
                message: format!("Unparseable completion response: {e}"),
            })?;

        let choice = api_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| GatewayError::ApiError {
                status_code: 200,
                message: "No choices in response".into(),
            })?;

        Ok(choice.message.content.unwrap_or_default())
    }
}

#[async_trait]
impl EmbeddingGateway for OpenAiGateway {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, GatewayError> {
        let url = format!("{}/embeddings", self.base_url);

        let body = serde_json::json!({
            "model": self.embedding_model,
            "input": texts,
            "encoding_format": "float",
        });

        debug!(
            model = %self.embedding_model,
            count = texts.len(),
            "Embedding batch"
        );

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response.text().await.unwrap_or_default();
        let text = Self::check_status(status, text)?;

        let api_resp: EmbeddingResponse =
            serde_json::from_str(&text).map_err(|e| GatewayError::ApiError {
                status_code: 200,
                message: format!("Unparseable embedding response: {e}"),
            })?;

        let embeddings: Vec<Vec<f32>> = api_resp.data.into_iter().map(|d| d.embedding).collect();

        for emb in &embeddings {
            if emb.len() != self.embedding_dimension {
                return Err(GatewayError::DimensionMismatch {
                    expected: self.embedding_dimension,
                    got: emb.len(),
                });
            }
        }

        Ok(embeddings)
    }

    fn dimension(&self) -> usize {
        self.embedding_dimension
    }
}

// Wire DTOs, only what the two calls read back.

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openai_constructor() {
        let gateway = OpenAiGateway::openai("sk-test");
        assert!(gateway.base_url.contains("api.openai.com"));
        assert_eq!(gateway.dimension(), 1536);
    }

    #[test]
    fn trailing_slash_stripped() {
        let gateway =
            OpenAiGateway::new("http://localhost:11434/v1/", "key", "m", "e", 384);
        assert_eq!(gateway.base_url, "http://localhost:11434/v1");
    }

    #[test]
    fn status_429_maps_to_rate_limited() {
        let err = OpenAiGateway::check_status(429, String::new()).unwrap_err();
        assert!(matches!(err, GatewayError::RateLimited { .. }));
    }

    #[test]
    fn status_401_maps_to_auth_failure() {
        let err = OpenAiGateway::check_status(401, String::new()).unwrap_err();
        assert!(matches!(err, GatewayError::AuthenticationFailed(_)));
    }

    #[test]
    fn status_500_maps_to_api_error() {
        let err = OpenAiGateway::check_status(500, "boom".into()).unwrap_err();
        match err {
            GatewayError::ApiError {
                status_code,
                message,
            } => {
                assert_eq!(status_code, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("Expected ApiError, got {other:?}"),
        }
    }

    #[test]
    fn parse_chat_response() {
        let data = r#"{"choices":[{"message":{"role":"assistant","content":"Final Answer: hi"}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(data).unwrap();
        assert_eq!(
            parsed.choices[0].message.content.as_deref(),
            Some("Final Answer: hi")
        );
    }

    #[test]
    fn parse_embedding_response() {
        let data = r#"{
            "data": [
                {"embedding": [0.25, -0.5], "index": 0},
                {"embedding": [0.75, 0.1], "index": 1}
            ],
            "model": "text-embedding-3-small"
        }"#;
        let parsed: EmbeddingResponse = serde_json::from_str(data).unwrap();
        assert_eq!(parsed.data.len(), 2);
        assert_eq!(parsed.data[0].embedding, vec![0.25, -0.5]);
    }
}
