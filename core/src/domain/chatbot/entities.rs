use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Reserved label returned when no corpus intent is close enough.
pub const DEFAULT_INTENT: &str = "default";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Intent {
    Greet,
    Goodbye,
    RecommendFruits,
    FruitInfo,
    DiseaseSpecific,
    QuantityAmount,
    SeasonalAvailability,
    RecipesCooking,
    AllergyWarnings,
    ShoppingCart,
    Comparison,
    GeneralHealth,
    OrganicNatural,
    StoragePreservation,
    OriginGeography,
    FunFacts,
    MealPlanning,
    Default,
    /// Label coming from custom training data with no dedicated branch.
    Other(String),
}

impl Intent {
    pub fn as_str(&self) -> &str {
        match self {
            Intent::Greet => "greet",
            Intent::Goodbye => "goodbye",
            Intent::RecommendFruits => "recommend_fruits",
            Intent::FruitInfo => "fruit_info",
            Intent::DiseaseSpecific => "disease_specific",
            Intent::QuantityAmount => "quantity_amount",
            Intent::SeasonalAvailability => "seasonal_availability",
            Intent::RecipesCooking => "recipes_cooking",
            Intent::AllergyWarnings => "allergy_warnings",
            Intent::ShoppingCart => "shopping_cart",
            Intent::Comparison => "comparison",
            Intent::GeneralHealth => "general_health",
            Intent::OrganicNatural => "organic_natural",
            Intent::StoragePreservation => "storage_preservation",
            Intent::OriginGeography => "origin_geography",
            Intent::FunFacts => "fun_facts",
            Intent::MealPlanning => "meal_planning",
            Intent::Default => DEFAULT_INTENT,
            Intent::Other(label) => label,
        }
    }
}

impl From<&str> for Intent {
    fn from(label: &str) -> Self {
        match label {
            "greet" => Intent::Greet,
            "goodbye" => Intent::Goodbye,
            "recommend_fruits" => Intent::RecommendFruits,
            "fruit_info" => Intent::FruitInfo,
            "disease_specific" => Intent::DiseaseSpecific,
            "quantity_amount" => Intent::QuantityAmount,
            "seasonal_availability" => Intent::SeasonalAvailability,
            "recipes_cooking" => Intent::RecipesCooking,
            "allergy_warnings" => Intent::AllergyWarnings,
            "shopping_cart" => Intent::ShoppingCart,
            "comparison" => Intent::Comparison,
            "general_health" => Intent::GeneralHealth,
            "organic_natural" => Intent::OrganicNatural,
            "storage_preservation" => Intent::StoragePreservation,
            "origin_geography" => Intent::OriginGeography,
            "fun_facts" => Intent::FunFacts,
            "meal_planning" => Intent::MealPlanning,
            DEFAULT_INTENT => Intent::Default,
            other => Intent::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityCategory {
    Diseases,
    Fruits,
    Quantities,
    Seasons,
    CookingMethods,
    Allergens,
    Origins,
    Comparisons,
}

impl EntityCategory {
    pub const ALL: [EntityCategory; 8] = [
        EntityCategory::Diseases,
        EntityCategory::Fruits,
        EntityCategory::Quantities,
        EntityCategory::Seasons,
        EntityCategory::CookingMethods,
        EntityCategory::Allergens,
        EntityCategory::Origins,
        EntityCategory::Comparisons,
    ];
}

/// Surface strings matched in one query, grouped by category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EntitySet {
    pub diseases: Vec<String>,
    pub fruits: Vec<String>,
    pub quantities: Vec<String>,
    pub seasons: Vec<String>,
    pub cooking_methods: Vec<String>,
    pub allergens: Vec<String>,
    pub origins: Vec<String>,
    pub comparisons: Vec<String>,
}

impl EntitySet {
    pub fn get(&self, category: EntityCategory) -> &[String] {
        match category {
            EntityCategory::Diseases => &self.diseases,
            EntityCategory::Fruits => &self.fruits,
            EntityCategory::Quantities => &self.quantities,
            EntityCategory::Seasons => &self.seasons,
            EntityCategory::CookingMethods => &self.cooking_methods,
            EntityCategory::Allergens => &self.allergens,
            EntityCategory::Origins => &self.origins,
            EntityCategory::Comparisons => &self.comparisons,
        }
    }

    pub fn get_mut(&mut self, category: EntityCategory) -> &mut Vec<String> {
        match category {
            EntityCategory::Diseases => &mut self.diseases,
            EntityCategory::Fruits => &mut self.fruits,
            EntityCategory::Quantities => &mut self.quantities,
            EntityCategory::Seasons => &mut self.seasons,
            EntityCategory::CookingMethods => &mut self.cooking_methods,
            EntityCategory::Allergens => &mut self.allergens,
            EntityCategory::Origins => &mut self.origins,
            EntityCategory::Comparisons => &mut self.comparisons,
        }
    }

    pub fn is_empty(&self) -> bool {
        EntityCategory::ALL
            .iter()
            .all(|category| self.get(*category).is_empty())
    }
}

/// One corpus utterance with its precomputed embedding.
#[derive(Debug, Clone, PartialEq)]
pub struct IntentExample {
    pub intent: String,
    pub utterance: String,
    pub embedding: Vec<f32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChatTurn {
    pub user: String,
    pub bot: String,
    pub created_at: DateTime<Utc>,
}

impl ChatTurn {
    pub fn new(user: String, bot: String) -> Self {
        Self {
            user,
            bot,
            created_at: Utc::now(),
        }
    }
}

/// Append-only conversation history kept in process memory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChatSession {
    pub session_id: String,
    pub history: Vec<ChatTurn>,
    pub created_at: DateTime<Utc>,
}

impl ChatSession {
    pub fn new(session_id: String) -> Self {
        Self {
            session_id,
            history: Vec::new(),
            created_at: Utc::now(),
        }
    }
}
