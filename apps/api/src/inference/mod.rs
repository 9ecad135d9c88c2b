//! Inference client: the single point of entry for all Replicate calls.
//!
//! No other module may talk to the inference provider directly; handlers and
//! the word cache reach it through the [`TextGenerator`] trait so tests can
//! substitute a mock.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

pub mod parse;

const REPLICATE_API_URL: &str = "https://api.replicate.com/v1/predictions";
/// The model used for all generation calls.
/// Pinned to a specific version hash to prevent accidental drift.
pub const MODEL: &str = "ibm-granite/granite-3.3-8b-instruct";
const MODEL_VERSION: &str = "618ecbe80773609e96ea19d8c96e708f6f2b368bb89be8fad509983194466bf8";
const USER_AGENT: &str = concat!("factoid-api/", env!("CARGO_PKG_VERSION"));

/// Sampling parameters for fact generation (first batch).
pub const FACTS_SAMPLING: SamplingParams = SamplingParams {
    top_k: 40,
    top_p: 0.9,
    temperature: 0.6,
    presence_penalty: 0.3,
    frequency_penalty: 0.3,
    max_tokens: 180,
};

/// Looser sampling for the "unpopular facts" second batch, trading a little
/// coherence for novelty so it does not repeat the first batch.
pub const MORE_FACTS_SAMPLING: SamplingParams = SamplingParams {
    top_k: 50,
    top_p: 0.95,
    temperature: 0.75,
    presence_penalty: 0.5,
    frequency_penalty: 0.5,
    max_tokens: 180,
};

/// Sampling parameters for random-word batch generation.
pub const WORDS_SAMPLING: SamplingParams = SamplingParams {
    top_k: 40,
    top_p: 0.9,
    temperature: 0.8,
    presence_penalty: 0.5,
    frequency_penalty: 0.5,
    max_tokens: 80,
};

/// Failure kinds for an inference call, decided at the provider boundary.
/// Downstream code switches on these variants, never on message content.
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("inference timed out after {0}ms")]
    Timeout(u64),

    #[error("authentication rejected: {0}")]
    Auth(String),

    #[error("rate limited")]
    RateLimited,

    #[error("model unavailable: {0}")]
    Unavailable(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("inference returned no text")]
    Empty,
}

/// Numeric knobs passed through to the model, flattened into the prediction
/// input beside the prompt.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SamplingParams {
    pub top_k: u32,
    pub top_p: f64,
    pub temperature: f64,
    pub presence_penalty: f64,
    pub frequency_penalty: f64,
    pub max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct PredictionRequest<'a> {
    version: &'a str,
    input: PredictionInput<'a>,
}

#[derive(Debug, Serialize)]
struct PredictionInput<'a> {
    prompt: &'a str,
    #[serde(flatten)]
    sampling: SamplingParams,
}

#[derive(Debug, Deserialize)]
struct Prediction {
    status: String,
    #[serde(default)]
    output: Option<Vec<String>>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ReplicateError {
    detail: String,
}

/// A single bounded text-generation call. Implemented by [`InferenceClient`]
/// in production and by mocks in tests; `AppState` carries it as
/// `Arc<dyn TextGenerator>`.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, sampling: SamplingParams)
        -> Result<String, InferenceError>;
}

/// The inference client used by all endpoints.
/// Wraps the Replicate predictions API in synchronous (`Prefer: wait`) mode.
/// One call per request; failures surface once, no automatic retries.
#[derive(Clone)]
pub struct InferenceClient {
    client: Client,
    api_token: String,
    timeout: Duration,
}

impl InferenceClient {
    pub fn new(api_token: String, timeout_ms: u64) -> Self {
        Self {
            client: Client::builder()
                .user_agent(USER_AGENT)
                .build()
                .expect("Failed to build HTTP client"),
            api_token,
            timeout: Duration::from_millis(timeout_ms),
        }
    }

    async fn run(&self, prompt: &str, sampling: SamplingParams) -> Result<String, InferenceError> {
        let request_body = PredictionRequest {
            version: MODEL_VERSION,
            input: PredictionInput { prompt, sampling },
        };

        let response = self
            .client
            .post(REPLICATE_API_URL)
            .bearer_auth(&self.api_token)
            .header("Prefer", "wait")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Replicate error bodies carry a human-readable `detail` field
            let message = serde_json::from_str::<ReplicateError>(&body)
                .map(|e| e.detail)
                .unwrap_or(body);
            return Err(classify_status(status.as_u16(), message));
        }

        let prediction: Prediction = response.json().await?;

        if prediction.status == "failed" || prediction.status == "canceled" {
            let message = prediction
                .error
                .unwrap_or_else(|| format!("prediction {}", prediction.status));
            return Err(InferenceError::Unavailable(message));
        }

        let text = prediction
            .output
            .map(|chunks| chunks.concat())
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(InferenceError::Empty);
        }

        debug!("Inference call succeeded ({} chars)", text.len());

        Ok(text)
    }
}

#[async_trait]
impl TextGenerator for InferenceClient {
    async fn generate(
        &self,
        prompt: &str,
        sampling: SamplingParams,
    ) -> Result<String, InferenceError> {
        match tokio::time::timeout(self.timeout, self.run(prompt, sampling)).await {
            Ok(result) => result,
            Err(_) => Err(InferenceError::Timeout(self.timeout.as_millis() as u64)),
        }
    }
}

fn classify_status(status: u16, message: String) -> InferenceError {
    match status {
        401 | 403 => InferenceError::Auth(message),
        429 => InferenceError::RateLimited,
        404 | 422 => InferenceError::Unavailable(message),
        s if s >= 500 => InferenceError::Unavailable(message),
        s => InferenceError::Api { status: s, message },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_auth_statuses() {
        assert!(matches!(
            classify_status(401, "bad token".into()),
            InferenceError::Auth(_)
        ));
        assert!(matches!(
            classify_status(403, "forbidden".into()),
            InferenceError::Auth(_)
        ));
    }

    #[test]
    fn classifies_rate_limit() {
        assert!(matches!(
            classify_status(429, String::new()),
            InferenceError::RateLimited
        ));
    }

    #[test]
    fn classifies_model_unavailable() {
        assert!(matches!(
            classify_status(404, "version not found".into()),
            InferenceError::Unavailable(_)
        ));
        assert!(matches!(
            classify_status(503, "overloaded".into()),
            InferenceError::Unavailable(_)
        ));
    }

    #[test]
    fn unclassified_statuses_stay_generic() {
        assert!(matches!(
            classify_status(418, "teapot".into()),
            InferenceError::Api { status: 418, .. }
        ));
    }
}
