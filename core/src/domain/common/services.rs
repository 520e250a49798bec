use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;

use crate::domain::{
    chatbot::{
        entity_extractor::EntityExtractor,
        intent_classifier::IntentClassifier,
        ports::{ChatSessionRepository, Embedder},
        response_generator::ResponseGenerator,
        templates::ResponseTemplates,
    },
    fruit::catalog::FruitCatalog,
};

/// Composition of every read-only component built at startup plus the
/// session store. Cloning is cheap; clones share the same state.
#[derive(Clone)]
pub struct Service<E, CS>
where
    E: Embedder,
    CS: ChatSessionRepository,
{
    pub(crate) catalog: Arc<FruitCatalog>,
    pub(crate) embedder: E,
    pub(crate) session_repository: CS,
    pub(crate) classifier: Arc<IntentClassifier>,
    pub(crate) extractor: Arc<EntityExtractor>,
    pub(crate) generator: Arc<ResponseGenerator>,
    pub(crate) rng: Arc<Mutex<StdRng>>,
}

impl<E, CS> Service<E, CS>
where
    E: Embedder,
    CS: ChatSessionRepository,
{
    pub fn new(
        catalog: FruitCatalog,
        embedder: E,
        session_repository: CS,
        classifier: IntentClassifier,
        templates: ResponseTemplates,
        rng: StdRng,
    ) -> Self {
        let catalog = Arc::new(catalog);
        let extractor = EntityExtractor::from_catalog(&catalog);
        let generator = ResponseGenerator::new(catalog.clone(), templates);

        Self {
            catalog,
            embedder,
            session_repository,
            classifier: Arc::new(classifier),
            extractor: Arc::new(extractor),
            generator: Arc::new(generator),
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    pub fn catalog(&self) -> &FruitCatalog {
        &self.catalog
    }

    pub fn classifier(&self) -> &IntentClassifier {
        &self.classifier
    }
}
