use crate::domain::{
    chatbot::ports::{ChatSessionRepository, Embedder},
    common::{entities::app_errors::CoreError, services::Service},
    health::{entities::HealthStatus, ports::HealthCheckService},
};

impl<E, CS> HealthCheckService for Service<E, CS>
where
    E: Embedder,
    CS: ChatSessionRepository,
{
    async fn health(&self) -> Result<HealthStatus, CoreError> {
        Ok(HealthStatus {
            fruits: self.catalog.len(),
            intents: self.classifier.intent_count(),
            examples: self.classifier.len(),
        })
    }
}
