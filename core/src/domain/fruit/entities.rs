use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Accepted spellings per field, highest precedence first.
const FIELD_SPELLINGS: [(&str, &[&str]); 8] = [
    ("name", &["fruitName", "fruit_name", "name"]),
    ("nutrition", &["nutritionalFacts", "nutrition"]),
    ("healthBenefits", &["healthBenefits", "health_benefits"]),
    ("season", &["season", "seasons"]),
    (
        "possibleAllergies",
        &["possibleAllergies", "possible_allergies", "allergens"],
    ),
    ("relatedFruits", &["relatedFruits", "related_fruits"]),
    ("servingSize", &["servingSize", "serving_size", "serving"]),
    (
        "medicalAndDietaryConsiderations",
        &[
            "medicalAndDietaryConsiderations",
            "medical_and_dietary_considerations",
        ],
    ),
];

/// One fruit document as found in the fruit data directory.
///
/// The derived serde layout is the canonical camelCase one. Data files may use
/// other spellings; [`FruitRecord::from_json`] folds them into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FruitRecord {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Nutrient name to numeric amount, in document order. Nested groups such
    /// as `macronutrients` are flattened; serving keys and non-numeric entries
    /// are dropped on load.
    #[serde(default, deserialize_with = "deserialize_nutrition")]
    #[schema(value_type = Object)]
    pub nutrition: Map<String, Value>,

    #[serde(default)]
    pub health_benefits: Vec<String>,

    #[serde(
        default,
        deserialize_with = "deserialize_season",
        skip_serializing_if = "Option::is_none"
    )]
    pub season: Option<String>,

    #[serde(default, deserialize_with = "deserialize_allergies")]
    pub possible_allergies: Vec<Allergen>,

    #[serde(default)]
    pub warnings: Vec<String>,

    #[serde(default)]
    pub related_fruits: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serving_size: Option<String>,

    /// Free-text conditions this fruit is associated with.
    #[serde(default)]
    pub diseases: Vec<String>,

    #[serde(default)]
    pub medical_and_dietary_considerations: MedicalConsiderations,
}

impl FruitRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            nutrition: Map::new(),
            health_benefits: Vec::new(),
            season: None,
            possible_allergies: Vec::new(),
            warnings: Vec::new(),
            related_fruits: Vec::new(),
            serving_size: None,
            diseases: Vec::new(),
            medical_and_dietary_considerations: MedicalConsiderations::default(),
        }
    }

    /// Parses a data file. When a field appears under several spellings the
    /// highest-precedence one is kept, so `fruitName` wins over `name`.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        let document: Value = serde_json::from_str(content)?;
        let document = match document {
            Value::Object(fields) => Value::Object(canonical_fields(fields)),
            other => other,
        };

        serde_json::from_value(document)
    }

    /// Numeric nutrition entries in document order.
    pub fn nutrient_values(&self) -> impl Iterator<Item = (&str, f64)> {
        self.nutrition.iter().filter_map(|(nutrient, amount)| {
            amount.as_f64().map(|amount| (nutrient.as_str(), amount))
        })
    }

    /// Lookup key of the record in the catalog.
    pub fn key(&self) -> String {
        self.name.trim().to_lowercase()
    }

    /// Health benefits joined and lowercased, used for substring matching.
    pub fn benefits_text(&self) -> String {
        self.health_benefits.join(" ").to_lowercase()
    }

    /// Associated diseases (free list plus the beneficial notes) joined and lowercased.
    pub fn diseases_text(&self) -> String {
        self.diseases
            .iter()
            .map(String::as_str)
            .chain(
                self.medical_and_dietary_considerations
                    .beneficial_for_diseases
                    .iter()
                    .map(|note| note.disease.as_str()),
            )
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Allergen {
    pub allergen: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
}

impl Allergen {
    pub fn new(allergen: impl Into<String>, severity: Option<String>) -> Self {
        Self {
            allergen: allergen.into(),
            severity,
        }
    }

    pub fn label(&self) -> String {
        match &self.severity {
            Some(severity) if !severity.is_empty() => format!("{} ({})", self.allergen, severity),
            _ => self.allergen.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MedicalConsiderations {
    #[serde(default)]
    pub beneficial_for_diseases: Vec<DiseaseNote>,
    #[serde(default)]
    pub not_recommended_for_diseases: Vec<DiseaseNote>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DiseaseNote {
    pub disease: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub recommendation: String,
}

fn canonical_fields(mut fields: Map<String, Value>) -> Map<String, Value> {
    for (canonical, spellings) in FIELD_SPELLINGS {
        let present = spellings
            .iter()
            .filter_map(|spelling| fields.remove(*spelling))
            .collect::<Vec<_>>();
        if let Some(value) = present.into_iter().next() {
            fields.insert(canonical.to_string(), value);
        }
    }

    fields
}

fn deserialize_nutrition<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let mut nutrition = Map::new();
    if let Some(Value::Object(facts)) = value {
        flatten_nutrition(facts, &mut nutrition);
    }

    Ok(nutrition)
}

fn flatten_nutrition(facts: Map<String, Value>, nutrition: &mut Map<String, Value>) {
    for (nutrient, amount) in facts {
        if nutrient.to_lowercase().starts_with("serving") {
            continue;
        }
        match amount {
            Value::Number(_) => {
                nutrition.insert(nutrient, amount);
            }
            Value::Object(group) => flatten_nutrition(group, nutrition),
            _ => {}
        }
    }
}

fn deserialize_season<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;

    Ok(match value {
        Some(Value::String(season)) => Some(season),
        Some(Value::Array(seasons)) => {
            let seasons = seasons
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>();
            (!seasons.is_empty()).then(|| seasons.join(", "))
        }
        _ => None,
    })
}

/// Accepts a list of names, a list of `{allergen|name, severity}` objects,
/// an `{allergens: [...], allergenSeverity}` group, or a map of allergen to
/// severity.
fn deserialize_allergies<'de, D>(deserializer: D) -> Result<Vec<Allergen>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;

    let allergens = match value {
        Some(Value::Array(entries)) => entries.into_iter().filter_map(allergen_from_entry).collect(),
        Some(Value::Object(mut map)) if map.contains_key("allergens") => {
            let severity = map
                .remove("allergenSeverity")
                .or_else(|| map.remove("severity"))
                .as_ref()
                .and_then(severity_from_value);
            match map.remove("allergens") {
                Some(Value::Array(entries)) => entries
                    .into_iter()
                    .filter_map(allergen_from_entry)
                    .map(|allergen| match allergen.severity {
                        Some(_) => allergen,
                        None => Allergen::new(allergen.allergen, severity.clone()),
                    })
                    .collect(),
                Some(Value::String(allergen)) if !allergen.is_empty() => {
                    vec![Allergen::new(allergen, severity)]
                }
                _ => Vec::new(),
            }
        }
        Some(Value::Object(map)) => map
            .into_iter()
            .map(|(allergen, severity)| Allergen::new(allergen, severity_from_value(&severity)))
            .collect(),
        Some(Value::String(allergen)) if !allergen.is_empty() => vec![Allergen::new(allergen, None)],
        _ => Vec::new(),
    };

    Ok(allergens)
}

fn allergen_from_entry(entry: Value) -> Option<Allergen> {
    match entry {
        Value::String(allergen) => Some(Allergen::new(allergen, None)),
        Value::Object(map) => {
            let allergen = ["allergen", "name", "type"]
                .iter()
                .find_map(|key| map.get(*key).and_then(Value::as_str))?;
            let severity = map.get("severity").and_then(severity_from_value);
            Some(Allergen::new(allergen, severity))
        }
        _ => None,
    }
}

fn severity_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(severity) => Some(severity.clone()),
        Value::Object(map) => map
            .get("severity")
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    }
}
