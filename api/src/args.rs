use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use fruitopia_core::domain::common::{
    ChatbotConfig, DEFAULT_EMBEDDING_DIMENSION, DEFAULT_SIMILARITY_THRESHOLD, EmbeddingConfig,
    EmbeddingProvider, FruitDataConfig, FruitopiaConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "fruitopia", version, about = "Fruit nutrition chatbot and recommendation API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub fruit_data: FruitDataArgs,

    #[command(flatten)]
    pub embedding: EmbeddingArgs,

    #[command(flatten)]
    pub chatbot: ChatbotArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "host", env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "port", env = "PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/api`.
    #[arg(long = "root-path", env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000,http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct FruitDataArgs {
    #[arg(long = "fruit-data-dir", env = "FRUIT_DATA_DIR", default_value = "data/fruits")]
    pub fruit_data_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EmbeddingProviderArg {
    Hashing,
    Http,
}

impl From<EmbeddingProviderArg> for EmbeddingProvider {
    fn from(provider: EmbeddingProviderArg) -> Self {
        match provider {
            EmbeddingProviderArg::Hashing => EmbeddingProvider::Hashing,
            EmbeddingProviderArg::Http => EmbeddingProvider::Http,
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct EmbeddingArgs {
    #[arg(
        long = "embedding-provider",
        env = "EMBEDDING_PROVIDER",
        value_enum,
        default_value_t = EmbeddingProviderArg::Hashing
    )]
    pub embedding_provider: EmbeddingProviderArg,

    /// Endpoint of the sentence embedding server, required by the `http` provider.
    #[arg(long = "embedding-url", env = "EMBEDDING_URL")]
    pub embedding_url: Option<String>,

    #[arg(long = "embedding-model", env = "EMBEDDING_MODEL", default_value = "all-MiniLM-L6-v2")]
    pub embedding_model: String,

    #[arg(
        long = "embedding-dimension",
        env = "EMBEDDING_DIMENSION",
        default_value_t = DEFAULT_EMBEDDING_DIMENSION
    )]
    pub embedding_dimension: usize,

    #[arg(
        long = "embedding-timeout-secs",
        env = "EMBEDDING_TIMEOUT_SECS",
        default_value_t = 10
    )]
    pub embedding_timeout_secs: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ChatbotArgs {
    #[arg(
        long = "similarity-threshold",
        env = "SIMILARITY_THRESHOLD",
        default_value_t = DEFAULT_SIMILARITY_THRESHOLD
    )]
    pub similarity_threshold: f32,

    /// JSON file with `intents` and `responses`. The built-in corpus is used when unset.
    #[arg(long = "training-data-path", env = "TRAINING_DATA_PATH")]
    pub training_data_path: Option<PathBuf>,

    /// Fixed seed for response template selection.
    #[arg(long = "response-seed", env = "RESPONSE_SEED")]
    pub response_seed: Option<u64>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "RUST_LOG", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            server: ServerArgs {
                host: "0.0.0.0".to_string(),
                port: 3333,
                root_path: String::new(),
                allowed_origins: vec!["http://localhost:3000".to_string()],
            },
            fruit_data: FruitDataArgs {
                fruit_data_dir: PathBuf::from("data/fruits"),
            },
            embedding: EmbeddingArgs {
                embedding_provider: EmbeddingProviderArg::Hashing,
                embedding_url: None,
                embedding_model: EmbeddingConfig::default().model,
                embedding_dimension: DEFAULT_EMBEDDING_DIMENSION,
                embedding_timeout_secs: 10,
            },
            chatbot: ChatbotArgs {
                similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
                training_data_path: None,
                response_seed: None,
            },
            log: LogArgs {
                filter: "info".to_string(),
                json: false,
            },
        }
    }
}

impl From<Args> for FruitopiaConfig {
    fn from(args: Args) -> Self {
        Self {
            fruit_data: FruitDataConfig {
                data_dir: args.fruit_data.fruit_data_dir,
            },
            embedding: EmbeddingConfig {
                provider: args.embedding.embedding_provider.into(),
                url: args.embedding.embedding_url,
                model: args.embedding.embedding_model,
                dimension: args.embedding.embedding_dimension,
                timeout_secs: args.embedding.embedding_timeout_secs,
            },
            chatbot: ChatbotConfig {
                similarity_threshold: args.chatbot.similarity_threshold,
                training_data_path: args.chatbot.training_data_path,
                response_seed: args.chatbot.response_seed,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let args = Args::try_parse_from([
            "fruitopia",
            "--port",
            "8080",
            "--root-path",
            "/api",
            "--allowed-origins",
            "http://a.test,http://b.test",
            "--embedding-provider",
            "http",
            "--embedding-url",
            "http://embedder.test/embed",
            "--similarity-threshold",
            "0.35",
            "--response-seed",
            "42",
        ])
        .unwrap();

        assert_eq!(args.server.port, 8080);
        assert_eq!(args.server.root_path, "/api");
        assert_eq!(
            args.server.allowed_origins,
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
        assert_eq!(args.embedding.embedding_provider, EmbeddingProviderArg::Http);
        assert_eq!(args.chatbot.response_seed, Some(42));
    }

    #[test]
    fn test_into_core_config() {
        let mut args = Args::default();
        args.fruit_data.fruit_data_dir = PathBuf::from("/tmp/fruits");
        args.chatbot.similarity_threshold = 0.5;

        let config = FruitopiaConfig::from(args);

        assert_eq!(config.fruit_data.data_dir, PathBuf::from("/tmp/fruits"));
        assert_eq!(config.embedding.provider, EmbeddingProvider::Hashing);
        assert_eq!(config.embedding.dimension, DEFAULT_EMBEDDING_DIMENSION);
        assert_eq!(config.chatbot.similarity_threshold, 0.5);
        assert_eq!(config.chatbot.training_data_path, None);
    }
}
