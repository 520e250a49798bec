use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domain::common::entities::app_errors::CoreError;

/// Ordered mapping from intent label to example utterances.
///
/// Order matters: the classifier breaks similarity ties by the first example
/// seen, so iteration follows the order intents were declared in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentCorpus {
    intents: Vec<(String, Vec<String>)>,
}

impl IntentCorpus {
    pub fn new(intents: Vec<(String, Vec<String>)>) -> Self {
        Self { intents }
    }

    pub fn intents(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.intents
            .iter()
            .map(|(intent, examples)| (intent.as_str(), examples.as_slice()))
    }

    /// Flattened `(intent, utterance)` pairs in corpus order.
    pub fn examples(&self) -> impl Iterator<Item = (&str, &str)> {
        self.intents.iter().flat_map(|(intent, examples)| {
            examples
                .iter()
                .map(move |example| (intent.as_str(), example.as_str()))
        })
    }

    pub fn intent_count(&self) -> usize {
        self.intents.len()
    }

    pub fn example_count(&self) -> usize {
        self.intents.iter().map(|(_, examples)| examples.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.example_count() == 0
    }
}

impl Default for IntentCorpus {
    fn default() -> Self {
        Self::new(
            BUILTIN_INTENTS
                .iter()
                .map(|(intent, examples)| {
                    (
                        intent.to_string(),
                        examples.iter().map(|example| example.to_string()).collect(),
                    )
                })
                .collect(),
        )
    }
}

/// Contents of a training data file:
/// `{"intents": {label: [utterance]}, "responses": {label: [template]}}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingData {
    pub corpus: IntentCorpus,
    pub responses: Vec<(String, Vec<String>)>,
}

#[derive(Deserialize)]
struct RawTrainingData {
    #[serde(default)]
    intents: Map<String, Value>,
    #[serde(default)]
    responses: Map<String, Value>,
}

impl TrainingData {
    pub fn from_json(content: &str) -> Result<Self, CoreError> {
        let raw: RawTrainingData = serde_json::from_str(content)
            .map_err(|e| CoreError::DataLoadError(format!("invalid training data: {e}")))?;

        Ok(Self {
            corpus: IntentCorpus::new(string_lists(raw.intents)),
            responses: string_lists(raw.responses),
        })
    }
}

/// Keeps the string entries of every list value, preserving key order.
fn string_lists(map: Map<String, Value>) -> Vec<(String, Vec<String>)> {
    map.into_iter()
        .filter_map(|(label, value)| match value {
            Value::Array(entries) => Some((
                label,
                entries
                    .into_iter()
                    .filter_map(|entry| match entry {
                        Value::String(text) => Some(text),
                        _ => None,
                    })
                    .collect(),
            )),
            _ => None,
        })
        .collect()
}

const BUILTIN_INTENTS: [(&str, &[&str]); 17] = [
    (
        "greet",
        &[
            "hello",
            "hi",
            "hey",
            "good morning",
            "good afternoon",
            "good evening",
            "howdy",
            "greetings",
            "what's up",
            "hey there",
            "hi there",
            "hello there",
            "good day",
            "nice to meet you",
            "pleased to meet you",
        ],
    ),
    (
        "goodbye",
        &[
            "bye",
            "goodbye",
            "see you later",
            "farewell",
            "take care",
            "bye bye",
            "see you",
            "good night",
            "have a good day",
            "see you soon",
            "talk to you later",
            "catch you later",
            "until next time",
        ],
    ),
    (
        "recommend_fruits",
        &[
            "what fruits should I eat",
            "recommend fruits for me",
            "suggest fruits",
            "which fruits are good for",
            "fruits for health",
            "fruit recommendations",
            "I have a condition",
            "I'm suffering from",
            "I need fruits for",
            "what should I eat",
            "healthy fruits",
            "best fruits for",
        ],
    ),
    (
        "fruit_info",
        &[
            "tell me about",
            "what is",
            "information about",
            "details on",
            "facts about",
            "nutrition of",
            "benefits of",
            "calories in",
            "how many calories",
            "nutritional value",
            "what's in",
            "explain",
        ],
    ),
    (
        "disease_specific",
        &[
            "diabetes",
            "diabetic",
            "blood sugar",
            "high blood pressure",
            "hypertension",
            "heart disease",
            "cholesterol",
            "weight loss",
            "obesity",
            "cancer",
            "immune system",
            "digestion",
            "constipation",
            "inflammation",
            "arthritis",
            "bone health",
            "anemia",
            "thyroid",
            "kidney",
            "liver",
            "asthma",
            "depression",
            "memory",
            "brain health",
            "skin health",
            "hair health",
            "eyesight",
            "vision",
        ],
    ),
    (
        "quantity_amount",
        &[
            "how much",
            "how many",
            "quantity",
            "amount",
            "serving size",
            "portion",
            "daily amount",
            "recommended daily",
            "per day",
        ],
    ),
    (
        "seasonal_availability",
        &[
            "when is in season",
            "available now",
            "fresh now",
            "current season",
            "best time for",
            "when to buy",
            "seasonal fruits",
        ],
    ),
    (
        "recipes_cooking",
        &[
            "how to cook",
            "recipes with",
            "how to prepare",
            "cooking tips",
            "fruit salad",
            "smoothie recipe",
            "juice recipe",
            "fruit dessert",
        ],
    ),
    (
        "allergy_warnings",
        &[
            "allergic to",
            "allergy",
            "can't eat",
            "avoid",
            "intolerant to",
            "sensitive to",
            "reaction to",
            "not good for me",
        ],
    ),
    (
        "shopping_cart",
        &[
            "add to cart",
            "buy",
            "purchase",
            "order",
            "shopping list",
            "I want to buy",
            "where to buy",
            "price of",
        ],
    ),
    (
        "comparison",
        &[
            "vs",
            "versus",
            "better than",
            "which is better",
            "compare",
            "difference between",
            "which has more",
            "which is healthier",
        ],
    ),
    (
        "general_health",
        &[
            "healthy eating",
            "nutrition tips",
            "diet advice",
            "weight management",
            "energy boost",
            "immunity boost",
            "detox",
            "anti-aging",
            "beauty",
        ],
    ),
    (
        "organic_natural",
        &[
            "organic",
            "natural",
            "pesticide free",
            "GMO free",
            "conventional vs organic",
            "farming methods",
            "sustainable",
            "environmentally friendly",
        ],
    ),
    (
        "storage_preservation",
        &[
            "how to store",
            "storage tips",
            "how long does it last",
            "keep fresh",
            "ripening",
            "refrigerator",
            "room temperature",
            "freezer",
        ],
    ),
    (
        "origin_geography",
        &[
            "where does it come from",
            "origin",
            "country of origin",
            "imported",
            "local",
            "grown in",
            "cultivated in",
            "native to",
        ],
    ),
    (
        "fun_facts",
        &[
            "interesting facts",
            "fun facts",
            "did you know",
            "trivia",
            "history of",
            "origin story",
            "unique facts",
        ],
    ),
    (
        "meal_planning",
        &[
            "meal ideas",
            "breakfast ideas",
            "snack ideas",
            "lunch ideas",
            "dinner ideas",
            "meal prep",
            "weekly meal plan",
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_corpus_order_and_counts() {
        let corpus = IntentCorpus::default();

        assert_eq!(corpus.intent_count(), 17);
        assert_eq!(corpus.intents().next().map(|(intent, _)| intent), Some("greet"));
        assert_eq!(corpus.examples().next(), Some(("greet", "hello")));
        assert_eq!(corpus.example_count(), corpus.examples().count());
        assert!(corpus.intents().all(|(intent, _)| intent != "default"));
    }

    #[test]
    fn test_training_data_keeps_declaration_order() {
        let data = TrainingData::from_json(
            r#"{
                "intents": { "zeta": ["last letter"], "alpha": ["first letter", 3] },
                "responses": { "zeta": ["Z!"], "broken": "not a list" }
            }"#,
        )
        .unwrap();

        let labels = data.corpus.intents().map(|(intent, _)| intent).collect::<Vec<_>>();
        assert_eq!(labels, vec!["zeta", "alpha"]);
        assert_eq!(data.corpus.example_count(), 2);
        assert_eq!(
            data.responses,
            vec![("zeta".to_string(), vec!["Z!".to_string()])]
        );
    }

    #[test]
    fn test_training_data_missing_sections_default_empty() {
        let data = TrainingData::from_json("{}").unwrap();

        assert!(data.corpus.is_empty());
        assert!(data.responses.is_empty());
    }

    #[test]
    fn test_training_data_rejects_malformed_json() {
        let result = TrainingData::from_json("{ intents: ");

        assert!(matches!(result, Err(CoreError::DataLoadError(_))));
    }
}
