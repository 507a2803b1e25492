//! Mock LLM client for testing.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::evaluator::{CompletionRequest, CompletionResponse, LlmClient, LlmError, LlmUsage};

/// Mock implementation of the LlmClient trait.
///
/// Provides controllable behavior for testing:
/// - Script replies in order through a queue
/// - Fall back to a configurable default reply when the queue is empty
/// - Inject errors for specific requests
/// - Record requests for assertions
///
/// # Example
///
/// ```rust,ignore
/// use ticketlint_core::testing::MockLlmClient;
///
/// let client = MockLlmClient::new();
/// client.queue_reply(r#"{"completeness": false, "unmet_rules": ["priority must be set"]}"#).await;
///
/// let response = client.complete(CompletionRequest::new("audit this ticket")).await?;
/// assert!(response.text.contains("priority"));
///
/// // Check what was sent
/// let requests = client.recorded_requests().await;
/// assert_eq!(requests.len(), 1);
/// ```
#[derive(Debug)]
pub struct MockLlmClient {
    /// Scripted replies, consumed front to back.
    replies: Arc<RwLock<VecDeque<Result<String, LlmError>>>>,
    /// Reply returned once the queue is empty.
    default_reply: Arc<RwLock<String>>,
    /// Recorded completion requests.
    requests: Arc<RwLock<Vec<CompletionRequest>>>,
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MockLlmClient {
    /// Create a new mock client that reports every ticket as complete.
    pub fn new() -> Self {
        Self {
            replies: Arc::new(RwLock::new(VecDeque::new())),
            default_reply: Arc::new(RwLock::new(
                r#"{"type": "other", "completeness": true, "unmet_rules": [], "remarks": "ok"}"#
                    .to_string(),
            )),
            requests: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Set the reply returned when the scripted queue is empty.
    pub async fn set_default_reply(&self, reply: &str) {
        *self.default_reply.write().await = reply.to_string();
    }

    /// Queue a reply for the next unscripted request.
    pub async fn queue_reply(&self, reply: &str) {
        self.replies.write().await.push_back(Ok(reply.to_string()));
    }

    /// Queue an error for the next unscripted request.
    pub async fn queue_error(&self, error: LlmError) {
        self.replies.write().await.push_back(Err(error));
    }

    /// Get the recorded completion requests.
    pub async fn recorded_requests(&self) -> Vec<CompletionRequest> {
        self.requests.read().await.clone()
    }

    /// Get the number of requests received.
    pub async fn request_count(&self) -> usize {
        self.requests.read().await.len()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    fn provider(&self) -> &str {
        "mock"
    }

    fn model(&self) -> &str {
        "mock-model"
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        // Record the request
        self.requests.write().await.push(request);

        let scripted = self.replies.write().await.pop_front();
        let text = match scripted {
            Some(Ok(reply)) => reply,
            Some(Err(error)) => return Err(error),
            None => self.default_reply.read().await.clone(),
        };

        Ok(CompletionResponse {
            text,
            usage: LlmUsage {
                input_tokens: 200,
                output_tokens: 100,
            },
            model: "mock-model".to_string(),
        })
    }
}
