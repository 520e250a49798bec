use std::sync::Arc;

use rand::Rng;

use crate::domain::{
    chatbot::{
        entities::{EntitySet, Intent},
        lookup_tables::{self, GENERIC_ALLERGY_NOTE},
        templates::{ResponseTemplates, fill},
    },
    fruit::{catalog::FruitCatalog, entities::Allergen},
};

pub const DEFAULT_SERVING_SIZE: &str = "1 medium piece or 1 cup";
pub const YEAR_ROUND_SEASON: &str = "Year-round";
pub const UNKNOWN_FRUIT_SEASON: &str = "Available year-round in most regions";

/// Suggested when a recommendation is asked for without naming a condition.
const GENERAL_RECOMMENDATIONS: [&str; 5] = ["apples", "bananas", "oranges", "berries", "kiwi"];

const COMPARISON_PREVIEW_CHARS: usize = 100;
const NUTRITION_PREVIEW_ENTRIES: usize = 5;
const BENEFITS_PREVIEW_ENTRIES: usize = 3;

const FRUIT_INFO_CLARIFY: &str =
    "I'd be happy to tell you about a specific fruit. Which fruit are you interested in?";
const QUANTITY_CLARIFY: &str =
    "For most fruits, a typical serving is 1 medium piece or 1 cup of sliced fruit.";
const SEASON_CLARIFY: &str =
    "Different fruits are in season at different times. Which fruit are you interested in?";
const RECIPES_CLARIFY: &str =
    "I can suggest recipes for specific fruits. Which fruit would you like recipes for?";
const ALLERGY_CLARIFY: &str = "Most fruits are generally safe, but some people may be allergic to certain fruits. Which fruit are you concerned about?";
const COMPARISON_CLARIFY: &str =
    "To compare fruits, please mention at least two fruits you'd like to compare.";
const STORAGE_CLARIFY: &str =
    "Storage tips vary by fruit. Which fruit do you need storage advice for?";
const FUN_FACTS_CLARIFY: &str =
    "Fruits have amazing facts! Which fruit would you like to learn something interesting about?";
const MEAL_PLANNING_CLARIFY: &str =
    "Fruits work great in many meals! Which fruit would you like meal ideas for?";

/// Turns an intent and its entities into a reply.
///
/// Each intent with a dedicated branch reads the entities it needs and falls
/// back to a fixed clarification message when they are missing. Every other
/// intent goes through [`ResponseGenerator::fallback`].
#[derive(Debug, Clone)]
pub struct ResponseGenerator {
    catalog: Arc<FruitCatalog>,
    templates: ResponseTemplates,
}

impl ResponseGenerator {
    pub fn new(catalog: Arc<FruitCatalog>, templates: ResponseTemplates) -> Self {
        Self { catalog, templates }
    }

    pub fn templates(&self) -> &ResponseTemplates {
        &self.templates
    }

    pub fn generate<R: Rng + ?Sized>(
        &self,
        intent: &str,
        entities: &EntitySet,
        rng: &mut R,
    ) -> String {
        let intent = Intent::from(intent);
        let label = intent.as_str();

        match &intent {
            Intent::Greet => self.render(label, "Hello!", &[], rng),
            Intent::Goodbye => self.render(label, "Goodbye!", &[], rng),
            Intent::RecommendFruits => {
                let fruits = match entities.diseases.first() {
                    Some(condition) => self.catalog.recommend_for_condition(condition),
                    None => GENERAL_RECOMMENDATIONS.iter().map(|f| f.to_string()).collect(),
                };
                self.render(
                    label,
                    "I recommend: {fruits}",
                    &[("fruits", fruits.join(", ").as_str())],
                    rng,
                )
            }
            Intent::FruitInfo => match entities.fruits.first() {
                Some(fruit) => {
                    let info = self.fruit_info(fruit);
                    self.render(
                        label,
                        "{info}",
                        &[("fruit", fruit.as_str()), ("info", info.as_str())],
                        rng,
                    )
                }
                None => FRUIT_INFO_CLARIFY.to_string(),
            },
            Intent::QuantityAmount => match entities.fruits.first() {
                Some(fruit) => {
                    let amount = self.serving_size(fruit);
                    self.render(
                        label,
                        "A serving is {amount}",
                        &[("fruit", fruit.as_str()), ("amount", amount.as_str())],
                        rng,
                    )
                }
                None => QUANTITY_CLARIFY.to_string(),
            },
            Intent::SeasonalAvailability => match entities.fruits.first() {
                Some(fruit) => {
                    let season = self.season(fruit);
                    self.render(
                        label,
                        "{season}",
                        &[("fruit", fruit.as_str()), ("season", season.as_str())],
                        rng,
                    )
                }
                None => SEASON_CLARIFY.to_string(),
            },
            Intent::RecipesCooking => match entities.fruits.first() {
                Some(fruit) => {
                    let recipes = lookup_tables::recipes(fruit);
                    self.render(
                        label,
                        "Try these: {recipes}",
                        &[("fruit", fruit.as_str()), ("recipes", recipes.as_str())],
                        rng,
                    )
                }
                None => RECIPES_CLARIFY.to_string(),
            },
            Intent::AllergyWarnings => match entities.fruits.first() {
                Some(fruit) => {
                    let allergens = self.allergy_info(fruit);
                    self.render(
                        label,
                        "{allergens}",
                        &[("fruit", fruit.as_str()), ("allergens", allergens.as_str())],
                        rng,
                    )
                }
                None => ALLERGY_CLARIFY.to_string(),
            },
            Intent::Comparison => match entities.fruits.as_slice() {
                [first, second, ..] => {
                    let comparison = self.compare(first, second);
                    self.render(
                        label,
                        "{comparison}",
                        &[
                            ("fruit1", first.as_str()),
                            ("fruit2", second.as_str()),
                            ("comparison", comparison.as_str()),
                        ],
                        rng,
                    )
                }
                _ => COMPARISON_CLARIFY.to_string(),
            },
            Intent::StoragePreservation => match entities.fruits.first() {
                Some(fruit) => {
                    let tips = lookup_tables::storage_tips(fruit);
                    self.render(
                        label,
                        "{storage_tips}",
                        &[("fruit", fruit.as_str()), ("storage_tips", tips.as_str())],
                        rng,
                    )
                }
                None => STORAGE_CLARIFY.to_string(),
            },
            Intent::FunFacts => match entities.fruits.first() {
                Some(fruit) => {
                    let fact = lookup_tables::fun_fact(fruit);
                    self.render(
                        label,
                        "{fact}",
                        &[("fruit", fruit.as_str()), ("fact", fact.as_str())],
                        rng,
                    )
                }
                None => FUN_FACTS_CLARIFY.to_string(),
            },
            Intent::MealPlanning => match entities.fruits.first() {
                Some(fruit) => {
                    let meals = lookup_tables::meal_ideas(fruit);
                    self.render(
                        label,
                        "{meals}",
                        &[("fruit", fruit.as_str()), ("meals", meals.as_str())],
                        rng,
                    )
                }
                None => MEAL_PLANNING_CLARIFY.to_string(),
            },
            _ => self.fallback(entities, rng),
        }
    }

    /// Entity-driven answer for intents without a dedicated branch.
    pub fn fallback<R: Rng + ?Sized>(&self, entities: &EntitySet, rng: &mut R) -> String {
        if let Some(fruit) = entities.fruits.first() {
            return format!("Let me tell you about {fruit}: {}", self.fruit_info(fruit));
        }

        if let Some(condition) = entities.diseases.first() {
            let fruits = self.catalog.recommend_for_condition(condition);
            return format!(
                "For {condition}, I recommend these fruits: {}",
                fruits.join(", ")
            );
        }

        let hint = if !entities.quantities.is_empty() {
            "I can help with serving sizes and daily recommendations. Which fruit are you asking about?"
        } else if !entities.seasons.is_empty() {
            "I can tell you when fruits are in season. Which fruit interests you?"
        } else if !entities.cooking_methods.is_empty() {
            "I have many fruit recipes! Which fruit would you like recipes for?"
        } else if !entities.allergens.is_empty() {
            "I can provide allergy information for fruits. Which fruit are you concerned about?"
        } else if !entities.origins.is_empty() {
            "I can tell you about where fruits come from. Which fruit would you like to know about?"
        } else {
            return self.render(
                Intent::Default.as_str(),
                "I'm here to help with fruits and health!",
                &[],
                rng,
            );
        };

        hint.to_string()
    }

    /// Description, leading nutrition values, leading benefits and season,
    /// joined into one paragraph.
    pub fn fruit_info(&self, fruit: &str) -> String {
        let Some(record) = self.catalog.get(fruit) else {
            return format!("I'm sorry, I don't have information about {fruit}.");
        };

        let mut parts = Vec::new();

        if let Some(description) = &record.description {
            parts.push(format!("Description: {description}"));
        }

        let nutrition = record
            .nutrient_values()
            .filter(|(_, value)| *value > 0.0)
            .take(NUTRITION_PREVIEW_ENTRIES)
            .map(|(nutrient, value)| format!("{nutrient}: {value}"))
            .collect::<Vec<_>>();
        if !nutrition.is_empty() {
            parts.push(format!("Nutrition (per 100g): {}", nutrition.join(", ")));
        }

        if !record.health_benefits.is_empty() {
            let benefits = record
                .health_benefits
                .iter()
                .take(BENEFITS_PREVIEW_ENTRIES)
                .map(String::as_str)
                .collect::<Vec<_>>();
            parts.push(format!("Health benefits: {}", benefits.join(", ")));
        }

        if let Some(season) = &record.season {
            parts.push(format!("Best season: {season}"));
        }

        if parts.is_empty() {
            return format!("{fruit} is a healthy fruit with many nutritional benefits!");
        }

        parts.join(" ")
    }

    pub fn serving_size(&self, fruit: &str) -> String {
        self.catalog
            .serving_size(fruit)
            .unwrap_or(DEFAULT_SERVING_SIZE)
            .to_string()
    }

    pub fn season(&self, fruit: &str) -> String {
        if !self.catalog.contains(fruit) {
            return UNKNOWN_FRUIT_SEASON.to_string();
        }

        self.catalog
            .season(fruit)
            .unwrap_or(YEAR_ROUND_SEASON)
            .to_string()
    }

    /// Static note first, then the record's own allergens, then a generic note.
    pub fn allergy_info(&self, fruit: &str) -> String {
        if let Some(note) = lookup_tables::allergy_note(fruit) {
            return note.to_string();
        }

        let allergens = self.catalog.allergies(fruit);
        if !allergens.is_empty() {
            return allergens
                .iter()
                .map(Allergen::label)
                .collect::<Vec<_>>()
                .join(", ");
        }

        GENERIC_ALLERGY_NOTE.to_string()
    }

    pub fn compare(&self, first: &str, second: &str) -> String {
        if self.catalog.is_empty() {
            return format!(
                "Both {first} and {second} are healthy fruits with different nutritional profiles."
            );
        }

        format!(
            "{first}: {}... vs {second}: {}...",
            preview(&self.fruit_info(first)),
            preview(&self.fruit_info(second))
        )
    }

    fn render<R: Rng + ?Sized>(
        &self,
        intent: &str,
        fallback: &str,
        slots: &[(&str, &str)],
        rng: &mut R,
    ) -> String {
        let template = self.templates.pick(intent, rng).unwrap_or(fallback);
        fill(template, slots)
    }
}

fn preview(text: &str) -> &str {
    match text.char_indices().nth(COMPARISON_PREVIEW_CHARS) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fruit::entities::FruitRecord;
    use rand::{SeedableRng, rngs::StdRng};
    use serde_json::{Value, json};

    fn catalog() -> Arc<FruitCatalog> {
        let mut apple = FruitRecord::new("apples");
        apple.description = Some("Crisp orchard fruit.".to_string());
        apple.nutrition = [
            ("calories", 52.0),
            ("fat", 0.0),
            ("fiber", 2.4),
            ("iron", 0.1),
            ("potassium", 107.0),
            ("sugar", 10.4),
            ("vitamin_c", 4.6),
        ]
        .into_iter()
        .map(|(nutrient, value)| (nutrient.to_string(), Value::from(value)))
        .collect();
        apple.health_benefits = vec![
            "Supports heart health".to_string(),
            "Aids digestion".to_string(),
            "Helps regulate blood sugar".to_string(),
            "Boosts immunity".to_string(),
        ];
        apple.season = Some("Autumn".to_string());
        apple.serving_size = Some("1 medium apple".to_string());

        let mut fig = FruitRecord::new("fig");
        fig.possible_allergies = vec![Allergen::new("latex", Some("mild".to_string()))];

        Arc::new(FruitCatalog::new(vec![apple, fig]))
    }

    fn single_templates(intent: &str, template: &str) -> ResponseTemplates {
        let mut templates = ResponseTemplates::default();
        templates.merge(vec![(intent.to_string(), vec![template.to_string()])]);
        templates
    }

    fn generator() -> ResponseGenerator {
        ResponseGenerator::new(catalog(), ResponseTemplates::default())
    }

    fn fruits(names: &[&str]) -> EntitySet {
        EntitySet {
            fruits: names.iter().map(|name| name.to_string()).collect(),
            ..EntitySet::default()
        }
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_greet_comes_from_greet_templates() {
        let generator = generator();

        let response = generator.generate("greet", &EntitySet::default(), &mut rng());

        assert!(!response.is_empty());
        assert!(generator.templates().get("greet").contains(&response));
    }

    #[test]
    fn test_same_seed_same_response() {
        let generator = generator();

        let first = generator.generate("default", &EntitySet::default(), &mut rng());
        let second = generator.generate("default", &EntitySet::default(), &mut rng());

        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_season_is_year_round() {
        let generator = ResponseGenerator::new(
            catalog(),
            single_templates("seasonal_availability", "{fruit}: {season}"),
        );

        let response =
            generator.generate("seasonal_availability", &fruits(&["fig"]), &mut rng());

        assert_eq!(response, "fig: Year-round");
    }

    #[test]
    fn test_season_for_unknown_and_known_fruit() {
        let generator = generator();

        assert_eq!(generator.season("dragonfruit"), UNKNOWN_FRUIT_SEASON);
        assert_eq!(generator.season("apples"), "Autumn");
    }

    #[test]
    fn test_clarify_when_entity_missing() {
        let generator = generator();
        let none = EntitySet::default();

        assert_eq!(generator.generate("fruit_info", &none, &mut rng()), FRUIT_INFO_CLARIFY);
        assert_eq!(generator.generate("quantity_amount", &none, &mut rng()), QUANTITY_CLARIFY);
        assert_eq!(generator.generate("meal_planning", &none, &mut rng()), MEAL_PLANNING_CLARIFY);
        assert_eq!(
            generator.generate("comparison", &fruits(&["apples"]), &mut rng()),
            COMPARISON_CLARIFY
        );
    }

    #[test]
    fn test_recommend_without_condition_uses_general_list() {
        let generator =
            ResponseGenerator::new(catalog(), single_templates("recommend_fruits", "{fruits}"));

        let response = generator.generate("recommend_fruits", &EntitySet::default(), &mut rng());

        assert_eq!(response, "apples, bananas, oranges, berries, kiwi");
    }

    #[test]
    fn test_recommend_for_condition_reads_catalog() {
        let generator =
            ResponseGenerator::new(catalog(), single_templates("recommend_fruits", "{fruits}"));
        let entities = EntitySet {
            diseases: vec!["diabetes".to_string()],
            ..EntitySet::default()
        };

        let response = generator.generate("recommend_fruits", &entities, &mut rng());

        assert_eq!(response, "apples");
    }

    #[test]
    fn test_fruit_info_format() {
        let info = generator().fruit_info("apples");

        assert_eq!(
            info,
            "Description: Crisp orchard fruit. \
             Nutrition (per 100g): calories: 52, fiber: 2.4, iron: 0.1, potassium: 107, sugar: 10.4 \
             Health benefits: Supports heart health, Aids digestion, Helps regulate blood sugar \
             Best season: Autumn"
        );
    }

    #[test]
    fn test_loaded_document_keeps_nutrition_order_and_allergen_group() {
        let papaya = FruitRecord::from_json(
            &json!({
                "fruitName": "papaya",
                "nutritionalFacts": {
                    "vitamin_c": 92.7, "calories": 61, "sugar": 9,
                    "protein": 1.1, "fiber": 3, "carbs": 14.7
                },
                "possibleAllergies": {
                    "allergens": ["latex", "papain"],
                    "allergenSeverity": "moderate"
                }
            })
            .to_string(),
        )
        .unwrap();
        let generator = ResponseGenerator::new(
            Arc::new(FruitCatalog::new(vec![papaya])),
            ResponseTemplates::default(),
        );

        assert_eq!(
            generator.fruit_info("papaya"),
            "Nutrition (per 100g): vitamin_c: 92.7, calories: 61, sugar: 9, protein: 1.1, fiber: 3"
        );
        assert_eq!(generator.allergy_info("papaya"), "latex (moderate), papain (moderate)");
    }

    #[test]
    fn test_fruit_info_for_bare_and_unknown_records() {
        let generator = ResponseGenerator::new(
            Arc::new(FruitCatalog::new(vec![FruitRecord::new("lime")])),
            ResponseTemplates::default(),
        );

        assert_eq!(
            generator.fruit_info("lime"),
            "lime is a healthy fruit with many nutritional benefits!"
        );
        assert_eq!(
            generator.fruit_info("durian"),
            "I'm sorry, I don't have information about durian."
        );
    }

    #[test]
    fn test_serving_size_fallback() {
        let generator = generator();

        assert_eq!(generator.serving_size("apples"), "1 medium apple");
        assert_eq!(generator.serving_size("fig"), DEFAULT_SERVING_SIZE);
    }

    #[test]
    fn test_allergy_info_order() {
        let generator = generator();

        assert_eq!(generator.allergy_info("apples"), "oral allergy syndrome");
        assert_eq!(generator.allergy_info("fig"), "latex (mild)");
        assert_eq!(generator.allergy_info("lychee"), GENERIC_ALLERGY_NOTE);
    }

    #[test]
    fn test_compare_truncates_each_side() {
        let comparison = generator().compare("apples", "fig");

        let (left, right) = comparison.split_once("... vs ").unwrap();
        assert_eq!(left.chars().count(), "apples: ".len() + COMPARISON_PREVIEW_CHARS);
        assert!(right.starts_with("fig: fig is a healthy fruit"));
        assert!(comparison.ends_with("..."));
    }

    #[test]
    fn test_compare_with_empty_catalog() {
        let generator =
            ResponseGenerator::new(Arc::new(FruitCatalog::default()), ResponseTemplates::default());

        assert_eq!(
            generator.compare("kiwi", "mango"),
            "Both kiwi and mango are healthy fruits with different nutritional profiles."
        );
    }

    #[test]
    fn test_fallback_prefers_fruit_then_disease_then_hints() {
        let generator = generator();

        let with_fruit = generator.generate("shopping_cart", &fruits(&["fig"]), &mut rng());
        assert!(with_fruit.starts_with("Let me tell you about fig: "));

        let with_disease = EntitySet {
            diseases: vec!["diabetes".to_string()],
            origins: vec!["from".to_string()],
            ..EntitySet::default()
        };
        assert_eq!(
            generator.generate("default", &with_disease, &mut rng()),
            "For diabetes, I recommend these fruits: apples"
        );

        let with_origin = EntitySet {
            origins: vec!["where".to_string()],
            ..EntitySet::default()
        };
        assert!(
            generator
                .generate("origin_geography", &with_origin, &mut rng())
                .starts_with("I can tell you about where fruits come from")
        );
    }

    #[test]
    fn test_fallback_without_entities_uses_default_templates() {
        let generator = generator();

        let response = generator.generate("weather", &EntitySet::default(), &mut rng());

        assert!(generator.templates().get("default").contains(&response));
    }

    #[test]
    fn test_preview_is_char_safe() {
        let text = "é".repeat(150);

        assert_eq!(preview(&text).chars().count(), COMPARISON_PREVIEW_CHARS);
        assert_eq!(preview("short"), "short");
    }
}
