use std::path::PathBuf;

pub mod entities;
pub mod services;

pub const DEFAULT_SIMILARITY_THRESHOLD: f32 = 0.2;
pub const DEFAULT_EMBEDDING_DIMENSION: usize = 384;

#[derive(Clone, Debug)]
pub struct FruitopiaConfig {
    pub fruit_data: FruitDataConfig,
    pub embedding: EmbeddingConfig,
    pub chatbot: ChatbotConfig,
}

#[derive(Clone, Debug)]
pub struct FruitDataConfig {
    pub data_dir: PathBuf,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmbeddingProvider {
    Hashing,
    Http,
}

#[derive(Clone, Debug)]
pub struct EmbeddingConfig {
    pub provider: EmbeddingProvider,
    pub url: Option<String>,
    pub model: String,
    pub dimension: usize,
    pub timeout_secs: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: EmbeddingProvider::Hashing,
            url: None,
            model: "all-MiniLM-L6-v2".to_string(),
            dimension: DEFAULT_EMBEDDING_DIMENSION,
            timeout_secs: 10,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ChatbotConfig {
    pub similarity_threshold: f32,
    pub training_data_path: Option<PathBuf>,
    /// Seed for template selection. `None` seeds from OS entropy.
    pub response_seed: Option<u64>,
}

impl Default for ChatbotConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            training_data_path: None,
            response_seed: None,
        }
    }
}
