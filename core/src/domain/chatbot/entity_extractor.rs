use crate::domain::{
    chatbot::entities::{EntityCategory, EntitySet},
    fruit::catalog::FruitCatalog,
};

pub const DISEASE_KEYWORDS: [&str; 32] = [
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
    "blood pressure",
    "high cholesterol",
    "heart health",
    "digestive health",
];

pub const QUANTITY_KEYWORDS: [&str; 7] = [
    "how much", "how many", "quantity", "amount", "serving", "portion", "daily",
];

pub const SEASON_KEYWORDS: [&str; 6] = ["season", "available", "fresh", "when", "time", "month"];

pub const COOKING_KEYWORDS: [&str; 8] = [
    "recipe", "cook", "prepare", "salad", "smoothie", "juice", "bake", "grill",
];

pub const ALLERGY_KEYWORDS: [&str; 5] = ["allergic", "allergy", "intolerant", "sensitive", "reaction"];

pub const ORIGIN_KEYWORDS: [&str; 6] = ["where", "from", "origin", "country", "grown", "cultivated"];

pub const COMPARISON_KEYWORDS: [&str; 6] = ["vs", "versus", "better", "compare", "difference", "which"];

/// Keyword-containment extractor.
///
/// Every vocabulary entry found anywhere in the lowercased query is reported,
/// in vocabulary order. Matches may overlap ("blood pressure" inside
/// "high blood pressure") and substrings of longer words count ("vs" inside
/// "obvs"); both are accepted in exchange for recall.
#[derive(Debug, Clone, Default)]
pub struct EntityExtractor {
    fruits: Vec<String>,
}

impl EntityExtractor {
    pub fn new(fruits: Vec<String>) -> Self {
        Self {
            fruits: fruits.into_iter().map(|fruit| fruit.to_lowercase()).collect(),
        }
    }

    /// Fruit vocabulary taken from the catalog keys, in store order.
    pub fn from_catalog(catalog: &FruitCatalog) -> Self {
        Self::new(catalog.names())
    }

    pub fn fruits(&self) -> &[String] {
        &self.fruits
    }

    pub fn extract(&self, text: &str) -> EntitySet {
        let text = text.to_lowercase();
        let mut entities = EntitySet::default();

        let vocabularies: [(EntityCategory, &[&str]); 7] = [
            (EntityCategory::Diseases, &DISEASE_KEYWORDS),
            (EntityCategory::Quantities, &QUANTITY_KEYWORDS),
            (EntityCategory::Seasons, &SEASON_KEYWORDS),
            (EntityCategory::CookingMethods, &COOKING_KEYWORDS),
            (EntityCategory::Allergens, &ALLERGY_KEYWORDS),
            (EntityCategory::Origins, &ORIGIN_KEYWORDS),
            (EntityCategory::Comparisons, &COMPARISON_KEYWORDS),
        ];

        for (category, keywords) in vocabularies {
            entities.get_mut(category).extend(
                keywords
                    .iter()
                    .filter(|keyword| text.contains(**keyword))
                    .map(|keyword| keyword.to_string()),
            );
        }

        entities.fruits = self
            .fruits
            .iter()
            .filter(|fruit| fruit_mentioned(fruit, &text))
            .cloned()
            .collect();

        entities
    }
}

/// Tries, in order: the name itself, the name without a trailing "s",
/// the name with an added "s", and for names longer than four characters
/// the name without its last character.
pub fn fruit_mentioned(fruit: &str, text: &str) -> bool {
    if text.contains(fruit) {
        return true;
    }

    if let Some(singular) = fruit.strip_suffix('s')
        && text.contains(singular)
    {
        return true;
    }

    if text.contains(&format!("{fruit}s")) {
        return true;
    }

    if fruit.chars().count() > 4 {
        let mut chars = fruit.chars();
        chars.next_back();
        return text.contains(chars.as_str());
    }

    false
}
