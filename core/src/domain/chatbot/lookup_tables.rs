//! Static per-fruit answers keyed by lowercase fruit name. Every lookup has a
//! generic fallback, so none of them can miss.

use crate::domain::fruit::catalog::capitalize;

pub fn recipes(fruit: &str) -> String {
    match fruit.to_lowercase().as_str() {
        "apples" => "apple pie, apple sauce, fruit salad, baked apples".to_string(),
        "bananas" => "smoothies, banana bread, banana splits, fruit salad".to_string(),
        "oranges" => "orange juice, fruit salad, orange marmalade, citrus salad".to_string(),
        "berries" => "berry smoothies, fruit salad, berry desserts, yogurt parfaits".to_string(),
        "kiwi" => "fruit salad, kiwi smoothies, tropical fruit bowls".to_string(),
        "mango" => "mango salsa, smoothies, tropical salads, mango chutney".to_string(),
        "pineapple" => {
            "pineapple salsa, tropical salads, grilled pineapple, fruit salad".to_string()
        }
        _ => format!("{fruit} smoothies, {fruit} salad, baked {fruit}, {fruit} desserts"),
    }
}

/// Known allergy note for the fruit, if the table has one.
pub fn allergy_note(fruit: &str) -> Option<&'static str> {
    match fruit.to_lowercase().as_str() {
        "strawberries" => Some("oral allergy syndrome (related to birch pollen)"),
        "bananas" => Some("latex-fruit syndrome"),
        "kiwi" => Some("severe allergic reactions in some individuals"),
        "apples" => Some("oral allergy syndrome"),
        "peaches" => Some("stone fruit allergies"),
        "citrus" => Some("citrus allergies (rare)"),
        "berries" => Some("potential for allergic reactions"),
        _ => None,
    }
}

pub const GENERIC_ALLERGY_NOTE: &str =
    "generally well-tolerated, but consult a doctor if you have concerns";

pub fn storage_tips(fruit: &str) -> String {
    let tips = match fruit.to_lowercase().as_str() {
        "apples" => "Store in refrigerator crisper drawer for up to 1 month",
        "bananas" => "Store at room temperature until ripe, then refrigerate",
        "oranges" => "Store at room temperature for 1-2 weeks",
        "berries" => "Refrigerate and use within 2-3 days",
        "kiwi" => "Store at room temperature until ripe, then refrigerate",
        "mango" => "Store at room temperature until ripe",
        "pineapple" => "Store at room temperature or refrigerate after cutting",
        _ => "Store in a cool, dry place or refrigerator depending on ripeness",
    };
    tips.to_string()
}

pub fn fun_fact(fruit: &str) -> String {
    match fruit.to_lowercase().as_str() {
        "apples" => "There are over 7,500 varieties of apples grown worldwide!".to_string(),
        "bananas" => "Bananas are technically berries, while strawberries are not!".to_string(),
        "oranges" => "Oranges are the largest citrus fruit by production volume.".to_string(),
        "kiwi" => {
            "Kiwis are native to China and were originally called Chinese gooseberries."
                .to_string()
        }
        "mango" => {
            "Mangoes are the national fruit of India, Pakistan, and the Philippines.".to_string()
        }
        "pineapple" => "Pineapples take about 2 years to grow and mature.".to_string(),
        "strawberries" => "Strawberries are the only fruit with seeds on the outside.".to_string(),
        _ => format!(
            "{} is packed with vitamins and nutrients that support good health!",
            capitalize(fruit)
        ),
    }
}

pub fn meal_ideas(fruit: &str) -> String {
    match fruit.to_lowercase().as_str() {
        "apples" => "Breakfast: apple slices with peanut butter. Lunch: apple salad. Snack: baked apples.".to_string(),
        "bananas" => "Breakfast: banana smoothies. Lunch: banana wraps. Snack: banana chips.".to_string(),
        "oranges" => "Breakfast: orange juice. Lunch: citrus salad. Snack: orange segments.".to_string(),
        "berries" => "Breakfast: berry yogurt parfait. Lunch: berry salad. Snack: mixed berries.".to_string(),
        "kiwi" => "Breakfast: kiwi fruit bowl. Lunch: tropical salad. Snack: kiwi slices.".to_string(),
        "mango" => "Breakfast: mango smoothie. Lunch: mango salsa with fish. Snack: mango slices.".to_string(),
        "pineapple" => "Breakfast: tropical fruit bowl. Lunch: pineapple salsa. Snack: grilled pineapple.".to_string(),
        _ => format!("Add {fruit} to smoothies, salads, desserts, or enjoy as a fresh snack!"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_entries_are_case_insensitive() {
        assert_eq!(recipes("Mango"), "mango salsa, smoothies, tropical salads, mango chutney");
        assert_eq!(allergy_note("KIWI"), Some("severe allergic reactions in some individuals"));
        assert_eq!(storage_tips("berries"), "Refrigerate and use within 2-3 days");
    }

    #[test]
    fn test_fallbacks_mention_the_fruit() {
        assert_eq!(
            recipes("papaya"),
            "papaya smoothies, papaya salad, baked papaya, papaya desserts"
        );
        assert_eq!(allergy_note("papaya"), None);
        assert_eq!(
            storage_tips("papaya"),
            "Store in a cool, dry place or refrigerator depending on ripeness"
        );
        assert_eq!(
            fun_fact("papaya"),
            "Papaya is packed with vitamins and nutrients that support good health!"
        );
        assert_eq!(
            meal_ideas("papaya"),
            "Add papaya to smoothies, salads, desserts, or enjoy as a fresh snack!"
        );
    }
}
