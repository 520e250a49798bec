use rand::{SeedableRng, rngs::StdRng};
use tracing::{info, warn};

use crate::{
    domain::{
        chatbot::{
            corpus::IntentCorpus, intent_classifier::IntentClassifier,
            ports::TrainingDataRepository, templates::ResponseTemplates,
        },
        common::{FruitopiaConfig, entities::app_errors::CoreError, services::Service},
        fruit::{catalog::FruitCatalog, ports::FruitRepository},
    },
    infrastructure::{
        chat_session::InMemoryChatSessionRepository, corpus::JsonTrainingDataRepository,
        embedding::EmbeddingClient, fruit::JsonFruitRepository,
    },
};

pub type FruitopiaService = Service<EmbeddingClient, InMemoryChatSessionRepository>;

/// Builds every startup component. Only configuration errors are fatal; data
/// that cannot be loaded degrades to an empty catalog or the built-in corpus.
pub async fn create_service(config: FruitopiaConfig) -> Result<FruitopiaService, CoreError> {
    let embedder = EmbeddingClient::from_config(&config.embedding)?;

    let fruit_repository = JsonFruitRepository::new(config.fruit_data.data_dir.clone());
    let records = fruit_repository.load_all().await.unwrap_or_else(|e| {
        warn!("Fruit data unavailable, starting with an empty catalog: {}", e);
        Vec::new()
    });
    let catalog = FruitCatalog::new(records);

    let (corpus, templates) = match &config.chatbot.training_data_path {
        Some(path) => load_training_data(JsonTrainingDataRepository::new(path)).await,
        None => (IntentCorpus::default(), ResponseTemplates::default()),
    };

    let threshold = config.chatbot.similarity_threshold;
    let classifier = IntentClassifier::build(&corpus, &embedder, threshold)
        .await
        .unwrap_or_else(|e| {
            warn!("Failed to embed the intent corpus, every query will be `default`: {}", e);
            IntentClassifier::empty(threshold)
        });

    let rng = match config.chatbot.response_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    info!(
        fruits = catalog.len(),
        intents = classifier.intent_count(),
        examples = classifier.len(),
        "Fruitopia service initialised"
    );

    Ok(Service::new(
        catalog,
        embedder,
        InMemoryChatSessionRepository::new(),
        classifier,
        templates,
        rng,
    ))
}

/// Corpus and templates from a training data source. The built-in corpus is
/// kept when the source is unreadable or declares no examples; file templates
/// are merged over the built-in ones.
pub async fn load_training_data<T: TrainingDataRepository>(
    repository: T,
) -> (IntentCorpus, ResponseTemplates) {
    let mut templates = ResponseTemplates::default();

    let data = match repository.load().await {
        Ok(data) => data,
        Err(e) => {
            warn!("Using built-in training data: {}", e);
            return (IntentCorpus::default(), templates);
        }
    };

    templates.merge(data.responses);

    let corpus = if data.corpus.is_empty() {
        warn!("Training data declares no intent examples, using the built-in corpus");
        IntentCorpus::default()
    } else {
        data.corpus
    };

    (corpus, templates)
}
