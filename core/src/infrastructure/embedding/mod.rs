pub mod hashing;
pub mod http;

pub use hashing::HashingEmbedder;
pub use http::HttpEmbedder;

use tracing::info;

use crate::domain::{
    chatbot::ports::Embedder,
    common::{EmbeddingConfig, EmbeddingProvider, entities::app_errors::CoreError},
};

/// Embedding backend selected by configuration.
#[derive(Debug, Clone)]
pub enum EmbeddingClient {
    Hashing(HashingEmbedder),
    Http(HttpEmbedder),
}

impl EmbeddingClient {
    pub fn from_config(config: &EmbeddingConfig) -> Result<Self, CoreError> {
        match config.provider {
            EmbeddingProvider::Hashing => {
                if config.dimension == 0 {
                    return Err(CoreError::Invalid);
                }
                info!(dimension = config.dimension, "Using hashing embedder");
                Ok(Self::Hashing(HashingEmbedder::new(config.dimension)))
            }
            EmbeddingProvider::Http => {
                let Some(url) = config.url.clone().filter(|url| !url.trim().is_empty()) else {
                    tracing::error!("HTTP embedding provider selected without an embedding url");
                    return Err(CoreError::Invalid);
                };
                info!(url = %url, model = %config.model, "Using HTTP embedder");
                Ok(Self::Http(HttpEmbedder::new(
                    url,
                    config.model.clone(),
                    config.timeout_secs,
                )?))
            }
        }
    }
}

impl Embedder for EmbeddingClient {
    async fn embed(&self, texts: Vec<String>) -> Result<Vec<Vec<f32>>, CoreError> {
        match self {
            EmbeddingClient::Hashing(embedder) => embedder.embed(texts).await,
            EmbeddingClient::Http(embedder) => embedder.embed(texts).await,
        }
    }
}
