use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::fruit::entities::FruitRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DiseaseMatchKind {
    Beneficial,
    NotRecommended,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DiseaseMatch {
    pub fruit: String,
    pub kind: DiseaseMatchKind,
    pub disease: String,
    pub reason: String,
    pub recommendation: String,
}

#[derive(Debug, Clone)]
pub struct RecommendFruitsInput {
    pub disease: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub disease: String,
    /// Output of the condition heuristic, possibly the generic default list.
    pub fruits: Vec<String>,
    /// Records for the recommended names that exist in the catalog.
    pub records: Vec<FruitRecord>,
}
