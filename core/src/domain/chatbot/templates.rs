use std::{collections::HashMap, sync::LazyLock};

use rand::{Rng, seq::SliceRandom};
use regex::{Captures, Regex};
use tracing::warn;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{(\w+)\}").unwrap_or_else(|_| unreachable!("placeholder pattern is valid"))
});

/// Response templates grouped by intent label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseTemplates {
    templates: HashMap<String, Vec<String>>,
}

impl ResponseTemplates {
    pub fn new() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }

    pub fn get(&self, intent: &str) -> &[String] {
        self.templates
            .get(intent)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Replaces the templates of every intent present in `responses`.
    ///
    /// Templates naming a placeholder the intent's branch does not supply are
    /// dropped. An intent left with no valid template keeps its current list.
    pub fn merge(&mut self, responses: Vec<(String, Vec<String>)>) {
        for (intent, templates) in responses {
            let (valid, invalid): (Vec<_>, Vec<_>) = templates
                .into_iter()
                .partition(|template| is_valid_template(&intent, template));

            for template in &invalid {
                warn!(intent = %intent, template = %template, "Dropping template with unknown placeholder");
            }

            if valid.is_empty() {
                continue;
            }

            self.templates.insert(intent, valid);
        }
    }

    /// Uniformly random template for the intent.
    pub fn pick<R: Rng + ?Sized>(&self, intent: &str, rng: &mut R) -> Option<&str> {
        self.get(intent).choose(rng).map(String::as_str)
    }
}

impl Default for ResponseTemplates {
    fn default() -> Self {
        let mut templates = Self::new();
        templates.templates = BUILTIN_RESPONSES
            .iter()
            .map(|(intent, templates)| {
                (
                    intent.to_string(),
                    templates.iter().map(|t| t.to_string()).collect(),
                )
            })
            .collect();
        templates
    }
}

/// Placeholders each intent branch fills. Intents not listed here only get
/// static templates.
pub fn allowed_slots(intent: &str) -> &'static [&'static str] {
    match intent {
        "recommend_fruits" => &["fruits"],
        "fruit_info" => &["fruit", "info"],
        "quantity_amount" => &["fruit", "amount"],
        "seasonal_availability" => &["fruit", "season"],
        "recipes_cooking" => &["fruit", "recipes"],
        "allergy_warnings" => &["fruit", "allergens"],
        "comparison" => &["fruit1", "fruit2", "comparison"],
        "storage_preservation" => &["fruit", "storage_tips"],
        "fun_facts" => &["fruit", "fact"],
        "meal_planning" => &["fruit", "meals"],
        _ => &[],
    }
}

pub fn placeholders(template: &str) -> Vec<&str> {
    PLACEHOLDER
        .captures_iter(template)
        .filter_map(|captures| captures.get(1).map(|name| name.as_str()))
        .collect()
}

pub fn is_valid_template(intent: &str, template: &str) -> bool {
    let allowed = allowed_slots(intent);
    placeholders(template)
        .iter()
        .all(|placeholder| allowed.contains(placeholder))
}

/// Substitutes `{slot}` occurrences in one pass. Unknown placeholders are
/// left as they are.
pub fn fill(template: &str, slots: &[(&str, &str)]) -> String {
    PLACEHOLDER
        .replace_all(template, |captures: &Captures| {
            let name = &captures[1];
            slots
                .iter()
                .find(|(slot, _)| *slot == name)
                .map(|(_, value)| value.to_string())
                .unwrap_or_else(|| captures[0].to_string())
        })
        .into_owned()
}

const BUILTIN_RESPONSES: [(&str, &[&str]); 13] = [
    (
        "greet",
        &[
            "Hello! I'm your fruit expert from Fruitopia. I can help you discover amazing fruits for your health and wellness. What would you like to know?",
            "Hi there! Welcome to Fruitopia. I'm here to help you find the perfect fruits for your needs. How can I assist you today?",
            "Greetings! I'm your friendly fruit nutritionist. I know everything about fruits and their health benefits. What can I help you with?",
            "Hey! Fruitopia's fruit expert here. Ready to explore the wonderful world of fruits with you. What's on your mind?",
        ],
    ),
    (
        "goodbye",
        &[
            "Goodbye! Remember to eat your fruits for better health. Come back anytime!",
            "Take care! Stay healthy and fruity. See you soon!",
            "Farewell! Don't forget that an apple a day keeps the doctor away. Bye!",
            "See you later! Keep enjoying those healthy fruits!",
        ],
    ),
    (
        "recommend_fruits",
        &[
            "Based on your health needs, here are some excellent fruit recommendations: {fruits}",
            "For your condition, I recommend these nutrient-rich fruits: {fruits}",
            "These fruits would be particularly beneficial for you: {fruits}",
            "Considering your health goals, try these fruits: {fruits}",
        ],
    ),
    (
        "fruit_info",
        &[
            "Here's what I know about {fruit}: {info}",
            "{fruit} is a wonderful fruit! {info}",
            "Let me tell you about {fruit}: {info}",
            "Here's some detailed information about {fruit}: {info}",
        ],
    ),
    (
        "quantity_amount",
        &[
            "For optimal health benefits, aim for {amount} of {fruit} per day",
            "A typical serving of {fruit} is {amount}",
            "The recommended daily amount of {fruit} is {amount}",
            "You should consume about {amount} of {fruit} daily",
        ],
    ),
    (
        "seasonal_availability",
        &[
            "{fruit} is typically in season during {season}",
            "You can find fresh {fruit} during {season}",
            "{fruit} is at its best and most nutritious when in season: {season}",
            "The peak season for {fruit} is {season}",
        ],
    ),
    (
        "recipes_cooking",
        &[
            "Here are some delicious ways to enjoy {fruit}: {recipes}",
            "Try these recipes featuring {fruit}: {recipes}",
            "{fruit} works great in these dishes: {recipes}",
            "Here are some cooking ideas with {fruit}: {recipes}",
        ],
    ),
    (
        "allergy_warnings",
        &[
            "Important: {fruit} contains {allergens}. Please consult your doctor if you have allergies",
            "Note: {fruit} may cause reactions in people with {allergens} allergies",
            "Caution: {fruit} contains {allergens} which some people are sensitive to",
            "Please be aware that {fruit} has {allergens} which may affect some individuals",
        ],
    ),
    (
        "comparison",
        &[
            "Comparing {fruit1} and {fruit2}: {comparison}",
            "Here's how {fruit1} and {fruit2} stack up: {comparison}",
            "The main differences between {fruit1} and {fruit2}: {comparison}",
            "{fruit1} vs {fruit2}: {comparison}",
        ],
    ),
    (
        "storage_preservation",
        &[
            "To keep {fruit} fresh: {storage_tips}",
            "Storage tips for {fruit}: {storage_tips}",
            "Here's how to store {fruit}: {storage_tips}",
            "{fruit} storage guide: {storage_tips}",
        ],
    ),
    (
        "fun_facts",
        &[
            "Fun fact about {fruit}: {fact}",
            "Did you know? {fact}",
            "Here's an interesting fact about {fruit}: {fact}",
            "Fun trivia: {fact}",
        ],
    ),
    (
        "meal_planning",
        &[
            "Here are some meal ideas featuring {fruit}: {meals}",
            "Try incorporating {fruit} into these meals: {meals}",
            "{fruit} works perfectly in these dishes: {meals}",
            "Meal planning with {fruit}: {meals}",
        ],
    ),
    (
        "default",
        &[
            "I'd love to help you with fruit-related questions! Could you please be more specific about what you're looking for?",
            "I'm here to help with all things fruit-related. Could you tell me more about what you need?",
            "I'm your fruit expert! Whether it's nutrition, recipes, or health benefits, I'm here to help. What would you like to know?",
            "Fruitopia has extensive knowledge about fruits. What specific information are you looking for?",
            "I can help with fruit recommendations, nutrition info, recipes, and more. How can I assist you today?",
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_builtin_templates_only_use_allowed_slots() {
        let templates = ResponseTemplates::default();

        for (intent, _) in BUILTIN_RESPONSES {
            assert!(!templates.get(intent).is_empty());
            for template in templates.get(intent) {
                assert!(is_valid_template(intent, template), "{intent}: {template}");
            }
        }
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(
            placeholders("{fruit1} vs {fruit2}: {comparison}"),
            vec!["fruit1", "fruit2", "comparison"]
        );
        assert!(placeholders("no slots here").is_empty());
    }

    #[test]
    fn test_fill_replaces_known_slots_once() {
        let filled = fill(
            "{fruit} has {info} {unknown}",
            &[("fruit", "Kiwi"), ("info", "a {fruit} twist")],
        );

        assert_eq!(filled, "Kiwi has a {fruit} twist {unknown}");
    }

    #[test]
    fn test_merge_drops_templates_with_unknown_placeholders() {
        let mut templates = ResponseTemplates::default();

        templates.merge(vec![(
            "fruit_info".to_string(),
            vec!["About {fruit}: {info}".to_string(), "{price} only".to_string()],
        )]);

        assert_eq!(templates.get("fruit_info"), ["About {fruit}: {info}".to_string()]);
    }

    #[test]
    fn test_merge_keeps_current_list_when_nothing_is_valid() {
        let mut templates = ResponseTemplates::default();
        let before = templates.get("greet").to_vec();

        templates.merge(vec![("greet".to_string(), vec!["Hi {name}".to_string()])]);

        assert_eq!(templates.get("greet"), before.as_slice());
    }

    #[test]
    fn test_merge_adds_new_intents() {
        let mut templates = ResponseTemplates::default();

        templates.merge(vec![(
            "shopping_cart".to_string(),
            vec!["Our shop is coming soon!".to_string()],
        )]);

        assert_eq!(templates.get("shopping_cart").len(), 1);
    }

    #[test]
    fn test_pick_is_deterministic_for_a_seed() {
        let templates = ResponseTemplates::default();

        let first = templates
            .pick("greet", &mut StdRng::seed_from_u64(7))
            .map(str::to_string);
        let second = templates
            .pick("greet", &mut StdRng::seed_from_u64(7))
            .map(str::to_string);

        assert_eq!(first, second);
        assert!(templates.get("greet").contains(&first.unwrap()));
        assert_eq!(templates.pick("missing", &mut StdRng::seed_from_u64(7)), None);
    }
}
