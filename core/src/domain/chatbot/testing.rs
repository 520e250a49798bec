use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use crate::domain::{chatbot::ports::Embedder, common::entities::app_errors::CoreError};

/// Deterministic embedder for tests. Known texts map to fixed vectors,
/// anything else gets `fallback`.
#[derive(Clone, Default)]
pub struct StubEmbedder {
    vectors: HashMap<String, Vec<f32>>,
    fallback: Vec<f32>,
    fail: bool,
    calls: Arc<AtomicUsize>,
    pub seen: Arc<std::sync::Mutex<Vec<String>>>,
}

impl StubEmbedder {
    pub fn new(fallback: Vec<f32>) -> Self {
        Self {
            fallback,
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn with(mut self, text: &str, vector: Vec<f32>) -> Self {
        self.vectors.insert(text.to_string(), vector);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Embedder for StubEmbedder {
    async fn embed(&self, texts: Vec<String>) -> Result<Vec<Vec<f32>>, CoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().extend(texts.iter().cloned());

        if self.fail {
            return Err(CoreError::ExternalServiceError("stub failure".to_string()));
        }

        Ok(texts
            .iter()
            .map(|text| {
                self.vectors
                    .get(text)
                    .cloned()
                    .unwrap_or_else(|| self.fallback.clone())
            })
            .collect())
    }
}

/// Embedder that returns a fixed number of vectors regardless of input.
pub struct ShortEmbedder(pub usize);

impl Embedder for ShortEmbedder {
    async fn embed(&self, _texts: Vec<String>) -> Result<Vec<Vec<f32>>, CoreError> {
        Ok(vec![vec![1.0]; self.0])
    }
}
