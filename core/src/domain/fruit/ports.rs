use crate::domain::{
    common::entities::app_errors::CoreError,
    fruit::{
        entities::FruitRecord,
        value_objects::{DiseaseMatch, RecommendFruitsInput, Recommendation},
    },
};

/// Source of fruit documents, read once at startup.
#[cfg_attr(test, mockall::automock)]
pub trait FruitRepository: Send + Sync {
    fn load_all(&self) -> impl Future<Output = Result<Vec<FruitRecord>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait FruitService: Send + Sync {
    fn list_fruits(&self) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;

    fn get_fruit(
        &self,
        name: String,
    ) -> impl Future<Output = Result<FruitRecord, CoreError>> + Send;

    fn get_related_fruits(
        &self,
        name: String,
    ) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;

    fn recommend_fruits(
        &self,
        input: RecommendFruitsInput,
    ) -> impl Future<Output = Result<Recommendation, CoreError>> + Send;

    fn search_by_disease(
        &self,
        disease: String,
    ) -> impl Future<Output = Result<Vec<DiseaseMatch>, CoreError>> + Send;
}
