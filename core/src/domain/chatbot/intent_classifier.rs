use tracing::{debug, warn};

use crate::domain::{
    chatbot::{
        corpus::IntentCorpus,
        entities::{DEFAULT_INTENT, IntentExample},
        ports::Embedder,
        preprocessing::normalize,
    },
    common::entities::app_errors::CoreError,
};

/// Nearest-neighbour intent classifier over a precomputed example matrix.
///
/// `examples[i]` holds both the label and the embedding of the i-th corpus
/// utterance, so labels and vectors cannot drift apart.
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    examples: Vec<IntentExample>,
    intent_count: usize,
    threshold: f32,
}

impl IntentClassifier {
    /// A classifier with no examples. It answers `default` for every query.
    pub fn empty(threshold: f32) -> Self {
        Self {
            examples: Vec::new(),
            intent_count: 0,
            threshold,
        }
    }

    pub fn from_examples(examples: Vec<IntentExample>, threshold: f32) -> Self {
        let mut labels = examples
            .iter()
            .map(|example| example.intent.as_str())
            .collect::<Vec<_>>();
        labels.sort_unstable();
        labels.dedup();
        let intent_count = labels.len();

        Self {
            examples,
            intent_count,
            threshold,
        }
    }

    /// Normalises and embeds every corpus utterance in one batch.
    pub async fn build<E: Embedder>(
        corpus: &IntentCorpus,
        embedder: &E,
        threshold: f32,
    ) -> Result<Self, CoreError> {
        if corpus.is_empty() {
            return Ok(Self::empty(threshold));
        }

        let (labels, utterances): (Vec<&str>, Vec<&str>) = corpus.examples().unzip();
        let normalized = utterances.iter().map(|u| normalize(u)).collect::<Vec<_>>();

        let embeddings = embedder.embed(normalized).await?;
        if embeddings.len() != labels.len() {
            return Err(CoreError::ExternalServiceError(format!(
                "embedder returned {} vectors for {} examples",
                embeddings.len(),
                labels.len()
            )));
        }

        let examples = labels
            .into_iter()
            .zip(utterances)
            .zip(embeddings)
            .map(|((intent, utterance), embedding)| IntentExample {
                intent: intent.to_string(),
                utterance: utterance.to_string(),
                embedding,
            })
            .collect();

        Ok(Self::from_examples(examples, threshold))
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    pub fn intent_count(&self) -> usize {
        self.intent_count
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Classifies a raw query. Never fails: an empty corpus, an embedding
    /// error or a low similarity all resolve to `default`.
    pub async fn classify<E: Embedder>(&self, query: &str, embedder: &E) -> String {
        if self.examples.is_empty() {
            return DEFAULT_INTENT.to_string();
        }

        let embedding = match embedder.embed(vec![normalize(query)]).await {
            Ok(mut vectors) if !vectors.is_empty() => vectors.swap_remove(0),
            Ok(_) => {
                warn!("Embedder returned no vector for the query");
                return DEFAULT_INTENT.to_string();
            }
            Err(e) => {
                warn!("Failed to embed query, falling back to default intent: {}", e);
                return DEFAULT_INTENT.to_string();
            }
        };

        self.classify_embedding(&embedding)
    }

    pub fn classify_embedding(&self, embedding: &[f32]) -> String {
        match self.best_match(embedding) {
            Some((example, similarity)) if similarity >= self.threshold => {
                debug!(intent = %example.intent, similarity, "Intent matched");
                example.intent.clone()
            }
            Some((example, similarity)) => {
                debug!(
                    nearest = %example.intent,
                    similarity,
                    threshold = self.threshold,
                    "Similarity below threshold"
                );
                DEFAULT_INTENT.to_string()
            }
            None => DEFAULT_INTENT.to_string(),
        }
    }

    /// Most similar example. On equal scores the earliest example wins.
    pub fn best_match(&self, embedding: &[f32]) -> Option<(&IntentExample, f32)> {
        let mut best: Option<(&IntentExample, f32)> = None;

        for example in &self.examples {
            let similarity = cosine_similarity(embedding, &example.embedding);
            match best {
                Some((_, best_similarity)) if similarity <= best_similarity => {}
                _ => best = Some((example, similarity)),
            }
        }

        best
    }
}

/// Cosine similarity, or 0.0 when either vector has zero length or norm.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot = a.iter().zip(b).map(|(x, y)| x * y).sum::<f32>();
    let norm_a = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chatbot::testing::{ShortEmbedder, StubEmbedder};

    fn example(intent: &str, embedding: Vec<f32>) -> IntentExample {
        IntentExample {
            intent: intent.to_string(),
            utterance: intent.to_string(),
            embedding,
        }
    }

    fn classifier() -> IntentClassifier {
        IntentClassifier::from_examples(
            vec![
                example("greet", vec![1.0, 0.0, 0.0]),
                example("goodbye", vec![0.0, 1.0, 0.0]),
                example("comparison", vec![0.0, 1.0, 0.0]),
            ],
            0.2,
        )
    }

    #[test]
    fn test_cosine_similarity() {
        assert!((cosine_similarity(&[1.0, 0.0], &[1.0, 0.0]) - 1.0).abs() < 1e-6);
        assert!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).abs() < 1e-6);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]), 0.0);
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
    }

    #[test]
    fn test_identical_embedding_returns_its_intent() {
        assert_eq!(classifier().classify_embedding(&[1.0, 0.0, 0.0]), "greet");
    }

    #[test]
    fn test_ties_go_to_first_example() {
        assert_eq!(classifier().classify_embedding(&[0.0, 2.0, 0.0]), "goodbye");
    }

    #[test]
    fn test_below_threshold_returns_default() {
        let classifier = classifier();

        assert_eq!(classifier.classify_embedding(&[0.0, 0.0, 1.0]), DEFAULT_INTENT);
        assert_eq!(classifier.classify_embedding(&[0.1, 0.0, 1.0]), DEFAULT_INTENT);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let classifier =
            IntentClassifier::from_examples(vec![example("greet", vec![1.0, 0.0])], 1.0);

        assert_eq!(classifier.classify_embedding(&[3.0, 0.0]), "greet");
    }

    #[test]
    fn test_intent_count_is_distinct_labels() {
        let classifier = IntentClassifier::from_examples(
            vec![
                example("greet", vec![1.0]),
                example("greet", vec![0.5]),
                example("goodbye", vec![0.1]),
            ],
            0.2,
        );

        assert_eq!(classifier.len(), 3);
        assert_eq!(classifier.intent_count(), 2);
    }

    #[tokio::test]
    async fn test_empty_classifier_returns_default_without_embedding() {
        let embedder = StubEmbedder::new(vec![1.0]);

        let intent = IntentClassifier::empty(0.2).classify("hello", &embedder).await;

        assert_eq!(intent, DEFAULT_INTENT);
        assert_eq!(embedder.calls(), 0);
    }

    #[tokio::test]
    async fn test_embedding_failure_returns_default() {
        let intent = classifier()
            .classify("hello", &StubEmbedder::failing())
            .await;

        assert_eq!(intent, DEFAULT_INTENT);
    }

    #[tokio::test]
    async fn test_classify_normalizes_query() {
        let embedder =
            StubEmbedder::new(vec![0.0, 0.0, 1.0]).with("tell mango", vec![1.0, 0.0, 0.0]);

        let intent = classifier().classify("Tell me about MANGO!", &embedder).await;

        assert_eq!(intent, "greet");
    }

    #[tokio::test]
    async fn test_build_keeps_labels_in_lockstep() {
        let corpus = IntentCorpus::new(vec![
            ("greet".to_string(), vec!["Hello!".to_string(), "hi".to_string()]),
            ("goodbye".to_string(), vec!["bye".to_string()]),
        ]);
        let embedder = StubEmbedder::new(vec![1.0, 0.0]).with("bye", vec![0.0, 1.0]);

        let classifier = IntentClassifier::build(&corpus, &embedder, 0.2).await.unwrap();

        assert_eq!(classifier.len(), 3);
        assert_eq!(classifier.intent_count(), 2);
        assert_eq!(classifier.examples[2].intent, "goodbye");
        assert_eq!(classifier.examples[2].embedding, vec![0.0, 1.0]);
        assert_eq!(embedder.calls(), 1);
        assert_eq!(*embedder.seen.lock().unwrap(), vec!["hello", "hi", "bye"]);
    }

    #[tokio::test]
    async fn test_build_rejects_mismatched_vector_count() {
        let corpus = IntentCorpus::new(vec![(
            "greet".to_string(),
            vec!["hello".to_string(), "hi".to_string()],
        )]);

        let result = IntentClassifier::build(&corpus, &ShortEmbedder(1), 0.2).await;

        assert!(matches!(result, Err(CoreError::ExternalServiceError(_))));
    }

    #[tokio::test]
    async fn test_build_empty_corpus_skips_embedding() {
        let embedder = StubEmbedder::new(vec![1.0]);

        let classifier = IntentClassifier::build(&IntentCorpus::new(vec![]), &embedder, 0.2)
            .await
            .unwrap();

        assert!(classifier.is_empty());
        assert_eq!(embedder.calls(), 0);
    }
}
