use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{chatbot::ports::Embedder, common::entities::app_errors::CoreError};

/// Client for an external sentence-embedding server.
///
/// Sends `{"model": .., "texts": [..]}` and expects `{"embeddings": [[..], ..]}`
/// with one vector per text.
#[derive(Debug, Clone)]
pub struct HttpEmbedder {
    url: String,
    model: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    texts: &'a [String],
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    embeddings: Vec<Vec<f32>>,
}

impl HttpEmbedder {
    pub fn new(url: String, model: String, timeout_secs: u64) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build embedding HTTP client: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Self { url, model, client })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Embedder for HttpEmbedder {
    async fn embed(&self, texts: Vec<String>) -> Result<Vec<Vec<f32>>, CoreError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let request = EmbeddingRequest {
            model: &self.model,
            texts: &texts,
        };

        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Embedding request failed: {}", e);
                CoreError::ExternalServiceError(format!("Embedding API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Embedding API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "Embedding API returned error: {} - {}",
                status, error_text
            )));
        }

        let body: EmbeddingResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse embedding response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse embedding response: {}", e))
        })?;

        if body.embeddings.len() != texts.len() {
            return Err(CoreError::ExternalServiceError(format!(
                "Embedding API returned {} vectors for {} texts",
                body.embeddings.len(),
                texts.len()
            )));
        }

        Ok(body.embeddings)
    }
}
