use std::sync::PoisonError;

use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::{
    chatbot::{
        entities::{ChatSession, ChatTurn, EntitySet},
        ports::{ChatSessionRepository, ChatbotService, Embedder},
        value_objects::{ChatReply, MessageAnalysis, SendMessageInput},
    },
    common::{entities::app_errors::CoreError, services::Service},
};

impl<E, CS> Service<E, CS>
where
    E: Embedder,
    CS: ChatSessionRepository,
{
    async fn analyze(&self, message: &str) -> MessageAnalysis {
        let entities = self.extractor.extract(message);
        let intent = self.classifier.classify(message, &self.embedder).await;

        MessageAnalysis { intent, entities }
    }

    fn respond(&self, analysis: &MessageAnalysis) -> String {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        self.generator
            .generate(&analysis.intent, &analysis.entities, &mut *rng)
    }
}

impl<E, CS> ChatbotService for Service<E, CS>
where
    E: Embedder,
    CS: ChatSessionRepository,
{
    async fn send_message(&self, input: SendMessageInput) -> Result<ChatReply, CoreError> {
        let session_id = input
            .session_id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let analysis = self.analyze(&input.message).await;
        let response = self.respond(&analysis);

        let session = self
            .session_repository
            .append_turn(
                session_id.clone(),
                ChatTurn::new(input.message, response.clone()),
            )
            .await?;

        info!(
            session_id = %session_id,
            intent = %analysis.intent,
            turns = session.history.len(),
            "Chatbot message handled"
        );

        Ok(ChatReply {
            response,
            session_id,
            intent: analysis.intent,
            entities: analysis.entities,
        })
    }

    async fn get_session(&self, session_id: String) -> Result<ChatSession, CoreError> {
        self.session_repository
            .get_session(session_id.clone())
            .await?
            .ok_or_else(|| {
                debug!(session_id = %session_id, "Chat session not found");
                CoreError::NotFound
            })
    }

    async fn analyze_message(&self, message: String) -> Result<MessageAnalysis, CoreError> {
        Ok(self.analyze(&message).await)
    }

    async fn extract_entities(&self, text: String) -> Result<EntitySet, CoreError> {
        Ok(self.extractor.extract(&text))
    }
}
