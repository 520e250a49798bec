use std::collections::HashMap;

use tracing::warn;

use crate::domain::fruit::{
    entities::{Allergen, FruitRecord},
    value_objects::{DiseaseMatch, DiseaseMatchKind},
};

/// Read-only, in-memory store of fruit records keyed by lowercase name.
///
/// Iteration follows insertion order, which is the order the records were
/// loaded in. Nothing is mutated after construction.
#[derive(Debug, Clone, Default)]
pub struct FruitCatalog {
    records: Vec<FruitRecord>,
    index: HashMap<String, usize>,
}

impl FruitCatalog {
    pub fn new(records: Vec<FruitRecord>) -> Self {
        let mut catalog = Self::default();

        for record in records {
            let key = record.key();
            if key.is_empty() {
                warn!("Skipping fruit record without a name");
                continue;
            }

            match catalog.index.get(&key) {
                Some(&position) => {
                    warn!(fruit = %key, "Duplicate fruit record, keeping the last one");
                    catalog.records[position] = record;
                }
                None => {
                    catalog.index.insert(key, catalog.records.len());
                    catalog.records.push(record);
                }
            }
        }

        catalog
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&FruitRecord> {
        self.index
            .get(&name.trim().to_lowercase())
            .map(|&position| &self.records[position])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn records(&self) -> impl Iterator<Item = &FruitRecord> {
        self.records.iter()
    }

    /// Lookup keys in store order.
    pub fn names(&self) -> Vec<String> {
        self.records.iter().map(FruitRecord::key).collect()
    }

    pub fn description(&self, name: &str) -> String {
        self.get(name)
            .and_then(|record| record.description.clone())
            .unwrap_or_else(|| format!("{} is a nutritious fruit.", title_case(name)))
    }

    /// Numeric nutrition entries in the order the data file lists them.
    pub fn nutrition(&self, name: &str) -> Vec<(String, f64)> {
        self.get(name)
            .map(|record| {
                record
                    .nutrient_values()
                    .map(|(nutrient, amount)| (nutrient.to_string(), amount))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn health_benefits(&self, name: &str) -> &[String] {
        self.get(name)
            .map(|record| record.health_benefits.as_slice())
            .unwrap_or_default()
    }

    pub fn allergies(&self, name: &str) -> &[Allergen] {
        self.get(name)
            .map(|record| record.possible_allergies.as_slice())
            .unwrap_or_default()
    }

    pub fn related_fruits(&self, name: &str) -> &[String] {
        self.get(name)
            .map(|record| record.related_fruits.as_slice())
            .unwrap_or_default()
    }

    pub fn warnings(&self, name: &str) -> &[String] {
        self.get(name)
            .map(|record| record.warnings.as_slice())
            .unwrap_or_default()
    }

    pub fn season(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|record| record.season.as_deref())
    }

    pub fn serving_size(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|record| record.serving_size.as_deref())
    }

    /// Fruits whose medical notes mention the disease, either as beneficial or
    /// as not recommended. Matching is a case-insensitive substring test.
    pub fn search_by_disease(&self, disease: &str) -> Vec<DiseaseMatch> {
        let disease = disease.trim().to_lowercase();
        let mut matches = Vec::new();

        for record in &self.records {
            let considerations = &record.medical_and_dietary_considerations;
            let notes = considerations
                .beneficial_for_diseases
                .iter()
                .map(|note| (DiseaseMatchKind::Beneficial, note))
                .chain(
                    considerations
                        .not_recommended_for_diseases
                        .iter()
                        .map(|note| (DiseaseMatchKind::NotRecommended, note)),
                );

            for (kind, note) in notes {
                if note.disease.to_lowercase().contains(&disease) {
                    matches.push(DiseaseMatch {
                        fruit: record.key(),
                        kind,
                        disease: note.disease.clone(),
                        reason: note.reason.clone(),
                        recommendation: note.recommendation.clone(),
                    });
                }
            }
        }

        matches
    }
}

pub fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fruit::entities::{DiseaseNote, MedicalConsiderations};

    fn apple() -> FruitRecord {
        FruitRecord {
            description: Some("Crunchy and sweet.".to_string()),
            health_benefits: vec!["Supports heart health".to_string()],
            warnings: vec!["Seeds contain amygdalin".to_string()],
            medical_and_dietary_considerations: MedicalConsiderations {
                beneficial_for_diseases: vec![DiseaseNote {
                    disease: "Type 2 Diabetes".to_string(),
                    reason: "Low glycemic index".to_string(),
                    recommendation: "One a day".to_string(),
                }],
                not_recommended_for_diseases: vec![],
            },
            ..FruitRecord::new("Apple")
        }
    }

    fn banana() -> FruitRecord {
        FruitRecord {
            medical_and_dietary_considerations: MedicalConsiderations {
                beneficial_for_diseases: vec![],
                not_recommended_for_diseases: vec![DiseaseNote {
                    disease: "diabetes".to_string(),
                    reason: "High sugar".to_string(),
                    recommendation: "Limit intake".to_string(),
                }],
            },
            ..FruitRecord::new("Banana")
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let catalog = FruitCatalog::new(vec![apple()]);

        assert!(catalog.contains("APPLE"));
        assert!(catalog.contains(" apple "));
        assert!(!catalog.contains("pear"));
    }

    #[test]
    fn test_names_keep_insertion_order() {
        let catalog = FruitCatalog::new(vec![banana(), apple()]);

        assert_eq!(catalog.names(), vec!["banana", "apple"]);
    }

    #[test]
    fn test_duplicate_keeps_position_and_last_record() {
        let mut second = apple();
        second.description = Some("Replaced".to_string());
        let catalog = FruitCatalog::new(vec![apple(), banana(), second]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.names(), vec!["apple", "banana"]);
        assert_eq!(catalog.description("apple"), "Replaced");
    }

    #[test]
    fn test_accessors_default_when_absent() {
        let catalog = FruitCatalog::new(vec![apple()]);

        assert_eq!(catalog.description("dragon fruit"), "Dragon Fruit is a nutritious fruit.");
        assert!(catalog.nutrition("pear").is_empty());
        assert!(catalog.health_benefits("pear").is_empty());
        assert!(catalog.allergies("pear").is_empty());
        assert!(catalog.related_fruits("pear").is_empty());
        assert!(catalog.warnings("pear").is_empty());
        assert_eq!(catalog.season("apple"), None);
        assert_eq!(catalog.warnings("apple").len(), 1);
    }

    #[test]
    fn test_search_by_disease_returns_both_kinds() {
        let catalog = FruitCatalog::new(vec![apple(), banana()]);

        let matches = catalog.search_by_disease("Diabetes");

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].fruit, "apple");
        assert_eq!(matches[0].kind, DiseaseMatchKind::Beneficial);
        assert_eq!(matches[1].fruit, "banana");
        assert_eq!(matches[1].kind, DiseaseMatchKind::NotRecommended);
        assert_eq!(matches[1].recommendation, "Limit intake");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("kiwi"), "Kiwi");
        assert_eq!(capitalize("MANGO"), "Mango");
        assert_eq!(capitalize(""), "");
    }
}
