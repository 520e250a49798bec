use tracing::debug;

use crate::domain::{
    chatbot::ports::{ChatSessionRepository, Embedder},
    common::{entities::app_errors::CoreError, services::Service},
    fruit::{
        entities::FruitRecord,
        ports::FruitService,
        value_objects::{DiseaseMatch, RecommendFruitsInput, Recommendation},
    },
};

impl<E, CS> FruitService for Service<E, CS>
where
    E: Embedder,
    CS: ChatSessionRepository,
{
    async fn list_fruits(&self) -> Result<Vec<String>, CoreError> {
        Ok(self.catalog.names())
    }

    async fn get_fruit(&self, name: String) -> Result<FruitRecord, CoreError> {
        self.catalog.get(&name).cloned().ok_or_else(|| {
            debug!(fruit = %name, "Fruit not found");
            CoreError::NotFound
        })
    }

    async fn get_related_fruits(&self, name: String) -> Result<Vec<String>, CoreError> {
        Ok(self.catalog.related_fruits(&name).to_vec())
    }

    async fn recommend_fruits(
        &self,
        input: RecommendFruitsInput,
    ) -> Result<Recommendation, CoreError> {
        let disease = input.disease.trim().to_string();
        if disease.is_empty() {
            return Err(CoreError::Invalid);
        }

        let fruits = self.catalog.recommend_for_condition(&disease);
        let records = fruits
            .iter()
            .filter_map(|name| self.catalog.get(name).cloned())
            .collect();

        Ok(Recommendation {
            disease,
            fruits,
            records,
        })
    }

    async fn search_by_disease(&self, disease: String) -> Result<Vec<DiseaseMatch>, CoreError> {
        if disease.trim().is_empty() {
            return Err(CoreError::Invalid);
        }

        Ok(self.catalog.search_by_disease(&disease))
    }
}
