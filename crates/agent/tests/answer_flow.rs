//! End-to-end answer flow: ingest documents for two tenants, then ask
//! questions through the full service — retrieval, scope gate, and the
//! reasoning loop — with a scripted completion gateway.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use groundbot_agent::{AnswerService, DECLINE_ANSWER};
use groundbot_config::AppConfig;
use groundbot_core::document::TenantId;
use groundbot_core::error::GatewayError;
use groundbot_core::gateway::CompletionGateway;
use groundbot_gateways::{HashEmbedder, InMemoryVectorStore, PlainTextExtractor};

/// Replays a fixed script of completions, in order.
struct Script {
    responses: Mutex<Vec<String>>,
    calls: Mutex<usize>,
}

impl Script {
    fn new(responses: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.iter().map(|s| s.to_string()).collect()),
            calls: Mutex::new(0),
        })
    }

    fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl CompletionGateway for Script {
    async fn complete(
        &self,
        _system_prompt: &str,
        _user_prompt: &str,
        _temperature: f32,
    ) -> Result<String, GatewayError> {
        let mut calls = self.calls.lock().unwrap();
        let index = *calls;
        *calls += 1;
        let responses = self.responses.lock().unwrap();
        Ok(responses
            .get(index)
            .cloned()
            .unwrap_or_else(|| panic!("script exhausted after {index} calls")))
    }
}

fn service(script: Arc<Script>) -> AnswerService {
    let mut config = AppConfig::default();
    // Small windows so short fixture documents produce multiple chunks.
    config.chunking.chunk_size = 10;
    config.chunking.chunk_overlap = 2;
    // The hash embedder's cosine scores are lower than a real model's.
    config.retrieval.similarity_threshold = 0.15;

    AnswerService::new(
        &config,
        script,
        Arc::new(HashEmbedder::new(384)),
        Arc::new(InMemoryVectorStore::new(384)),
        Arc::new(PlainTextExtractor),
    )
}

const ACME_DOC: &str = "Refunds are processed within 14 days of the request. \
    Customers on the enterprise plan can request expedited refunds through \
    their account manager. All refunds are returned to the original payment \
    method used at purchase time.";

#[tokio::test]
async fn ingest_then_answer() {
    let script = Script::new(&[
        "Thought: Do I need to use a tool? Yes\n\
         Action: knowledge_search\n\
         Action Input: refund processing time",
        "Thought: Do I need to use a tool? No\n\
         Final Answer: Refunds are processed within 14 days.",
    ]);
    let service = service(script.clone());
    let acme = TenantId::new("acme");

    let receipt = service.ingest(&acme, ACME_DOC.as_bytes()).await.unwrap();
    assert!(receipt.chunk_count > 0);

    let answer = service
        .answer(&acme, "How long do refunds take?")
        .await
        .unwrap();

    assert_eq!(answer, "Refunds are processed within 14 days.");
    assert_eq!(script.call_count(), 2);
}

#[tokio::test]
async fn out_of_scope_question_is_declined_without_model_calls() {
    let script = Script::new(&[]);
    let service = service(script.clone());
    let acme = TenantId::new("acme");

    service.ingest(&acme, ACME_DOC.as_bytes()).await.unwrap();

    let answer = service
        .answer(&acme, "zebra quantum xylophone metallurgy")
        .await
        .unwrap();

    assert_eq!(answer, DECLINE_ANSWER);
    assert_eq!(script.call_count(), 0);
}

#[tokio::test]
async fn tenants_do_not_see_each_other() {
    let script = Script::new(&[]);
    let service = service(script.clone());
    let acme = TenantId::new("acme");
    let globex = TenantId::new("globex");

    service.ingest(&acme, ACME_DOC.as_bytes()).await.unwrap();

    // Globex has no documents, so the same question is out of scope.
    let answer = service
        .answer(&globex, "How long do refunds take?")
        .await
        .unwrap();

    assert_eq!(answer, DECLINE_ANSWER);
    assert_eq!(script.call_count(), 0);
}

#[tokio::test]
async fn empty_document_yields_zero_chunks() {
    let script = Script::new(&[]);
    let service = service(script);
    let acme = TenantId::new("acme");

    let receipt = service.ingest(&acme, b"   \n\t  ").await.unwrap();
    assert_eq!(receipt.chunk_count, 0);
}
