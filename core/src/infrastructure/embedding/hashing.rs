use sha2::{Digest, Sha256};

use crate::domain::{chatbot::ports::Embedder, common::entities::app_errors::CoreError};

const WORD_WEIGHT: f32 = 1.0;
const TRIGRAM_WEIGHT: f32 = 0.5;

/// Offline sentence embedder based on signed feature hashing.
///
/// Each word and each character trigram of the space-padded text is hashed
/// with SHA-256; the first eight bytes pick a bucket and the ninth byte picks
/// the sign. The result is L2-normalised, so identical text always maps to
/// the identical unit vector. Text with no words, such as a query made only
/// of stop words, maps to a fixed sentinel feature.
#[derive(Debug, Clone)]
pub struct HashingEmbedder {
    dimension: usize,
}

impl HashingEmbedder {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension: dimension.max(1),
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn embed_text(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0; self.dimension];

        if text.trim().is_empty() {
            self.add_feature(&mut vector, "e", "", WORD_WEIGHT);
            return Self::normalized(vector);
        }

        for word in text.split_whitespace() {
            self.add_feature(&mut vector, "w", word, WORD_WEIGHT);
        }

        let padded = format!(" {} ", text.split_whitespace().collect::<Vec<_>>().join(" "));
        let chars = padded.chars().collect::<Vec<_>>();
        if chars.len() > 2 {
            for window in chars.windows(3) {
                let trigram = window.iter().collect::<String>();
                self.add_feature(&mut vector, "c", &trigram, TRIGRAM_WEIGHT);
            }
        }

        Self::normalized(vector)
    }

    fn normalized(mut vector: Vec<f32>) -> Vec<f32> {
        let norm = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            vector.iter_mut().for_each(|x| *x /= norm);
        }

        vector
    }

    fn add_feature(&self, vector: &mut [f32], kind: &str, feature: &str, weight: f32) {
        let digest = Sha256::new()
            .chain_update(kind.as_bytes())
            .chain_update([0u8])
            .chain_update(feature.as_bytes())
            .finalize();

        let bucket = digest[..8]
            .iter()
            .fold(0u64, |acc, byte| (acc << 8) | u64::from(*byte));
        let index = (bucket % self.dimension as u64) as usize;
        let sign = if digest[8] & 1 == 0 { 1.0 } else { -1.0 };

        vector[index] += sign * weight;
    }
}

impl Embedder for HashingEmbedder {
    async fn embed(&self, texts: Vec<String>) -> Result<Vec<Vec<f32>>, CoreError> {
        Ok(texts.iter().map(|text| self.embed_text(text)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        chatbot::{
            corpus::IntentCorpus,
            intent_classifier::{IntentClassifier, cosine_similarity},
            preprocessing::normalize,
        },
        common::{DEFAULT_EMBEDDING_DIMENSION, DEFAULT_SIMILARITY_THRESHOLD},
    };

    #[test]
    fn test_identical_text_identical_unit_vector() {
        let embedder = HashingEmbedder::new(384);

        let first = embedder.embed_text("fruits eat");
        let second = embedder.embed_text("fruits eat");

        assert_eq!(first, second);
        assert_eq!(first.len(), 384);
        let norm = first.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_empty_text_maps_to_sentinel_unit_vector() {
        let embedder = HashingEmbedder::new(16);

        let empty = embedder.embed_text("");

        assert_eq!(empty, embedder.embed_text("   "));
        assert_eq!(empty.iter().filter(|x| **x != 0.0).count(), 1);
        assert!((cosine_similarity(&empty, &empty) - 1.0).abs() < 1e-5);
        assert_ne!(empty, embedder.embed_text("e"));
    }

    #[tokio::test]
    async fn test_every_builtin_example_classifies_as_its_intent() {
        let embedder = HashingEmbedder::new(DEFAULT_EMBEDDING_DIMENSION);
        let corpus = IntentCorpus::default();
        let classifier = IntentClassifier::build(&corpus, &embedder, DEFAULT_SIMILARITY_THRESHOLD)
            .await
            .unwrap();

        let examples = corpus.examples().collect::<Vec<_>>();
        for (position, (intent, utterance)) in examples.iter().enumerate() {
            let normalized = normalize(utterance);
            let expected = examples[..position]
                .iter()
                .find(|(_, earlier)| normalize(earlier) == normalized)
                .map(|(earlier_intent, _)| *earlier_intent)
                .unwrap_or(intent);

            let classified = classifier.classify(utterance, &embedder).await;

            assert_eq!(classified, expected, "example {utterance:?}");
        }
    }

    #[tokio::test]
    async fn test_stop_word_query_matches_stop_word_example() {
        let embedder = HashingEmbedder::new(DEFAULT_EMBEDDING_DIMENSION);
        let classifier = IntentClassifier::build(
            &IntentCorpus::default(),
            &embedder,
            DEFAULT_SIMILARITY_THRESHOLD,
        )
        .await
        .unwrap();

        assert_eq!(classifier.classify("what is", &embedder).await, "fruit_info");
        assert_eq!(classifier.classify("What is it?", &embedder).await, "fruit_info");
    }

    #[test]
    fn test_shared_words_are_closer_than_unrelated_text() {
        let embedder = HashingEmbedder::new(384);
        let query = embedder.embed_text("diabetes fruits eat");

        let related = cosine_similarity(&query, &embedder.embed_text("fruits eat"));
        let unrelated = cosine_similarity(&query, &embedder.embed_text("good morning"));

        assert!(related > unrelated);
        assert!(related > 0.2);
    }

    #[tokio::test]
    async fn test_embed_keeps_input_order() {
        let embedder = HashingEmbedder::new(32);

        let vectors = embedder
            .embed(vec!["hello".to_string(), "bye".to_string()])
            .await
            .unwrap();

        assert_eq!(vectors.len(), 2);
        assert_eq!(vectors[0], embedder.embed_text("hello"));
        assert_eq!(vectors[1], embedder.embed_text("bye"));
    }
}
