use crate::domain::fruit::catalog::FruitCatalog;

pub const MAX_RECOMMENDATIONS: usize = 5;

/// Returned when no record in the catalog matches the condition.
pub const DEFAULT_RECOMMENDATIONS: [&str; MAX_RECOMMENDATIONS] =
    ["apples", "bananas", "oranges", "berries", "citrus fruits"];

/// Condition terms that opt into the category heuristic.
const CONDITION_CATEGORIES: [&str; 4] = ["diabetes", "blood pressure", "heart", "cholesterol"];

/// Benefit phrases that satisfy the category heuristic.
const BENEFIT_CATEGORIES: [&str; 4] = ["blood sugar", "blood pressure", "heart", "cholesterol"];

impl FruitCatalog {
    /// Names of up to five fruits suited to a health condition.
    ///
    /// A fruit qualifies when the condition appears in its benefit or disease
    /// text, or when the condition names a cardiometabolic category and the
    /// fruit's benefits mention one. Results keep catalog order.
    pub fn recommend_for_condition(&self, condition: &str) -> Vec<String> {
        let condition = condition.to_lowercase();
        let in_category = CONDITION_CATEGORIES
            .iter()
            .any(|category| condition.contains(category));

        let recommendations = self
            .records()
            .filter(|record| {
                let benefits = record.benefits_text();
                benefits.contains(&condition)
                    || record.diseases_text().contains(&condition)
                    || (in_category
                        && BENEFIT_CATEGORIES
                            .iter()
                            .any(|benefit| benefits.contains(benefit)))
            })
            .map(|record| record.key())
            .take(MAX_RECOMMENDATIONS)
            .collect::<Vec<_>>();

        if recommendations.is_empty() {
            DEFAULT_RECOMMENDATIONS.iter().map(|name| name.to_string()).collect()
        } else {
            recommendations
        }
    }
}
