use crate::domain::{
    chatbot::{
        corpus::TrainingData,
        entities::{ChatSession, ChatTurn, EntitySet},
        value_objects::{ChatReply, MessageAnalysis, SendMessageInput},
    },
    common::entities::app_errors::CoreError,
};

/// Sentence embedding backend. Vectors come back in input order, one per text.
#[cfg_attr(test, mockall::automock)]
pub trait Embedder: Send + Sync {
    fn embed(
        &self,
        texts: Vec<String>,
    ) -> impl Future<Output = Result<Vec<Vec<f32>>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ChatSessionRepository: Send + Sync {
    /// Appends a turn, creating the session on first use, and returns the
    /// session as it stands after the append.
    fn append_turn(
        &self,
        session_id: String,
        turn: ChatTurn,
    ) -> impl Future<Output = Result<ChatSession, CoreError>> + Send;

    fn get_session(
        &self,
        session_id: String,
    ) -> impl Future<Output = Result<Option<ChatSession>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait TrainingDataRepository: Send + Sync {
    fn load(&self) -> impl Future<Output = Result<TrainingData, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ChatbotService: Send + Sync {
    fn send_message(
        &self,
        input: SendMessageInput,
    ) -> impl Future<Output = Result<ChatReply, CoreError>> + Send;

    fn get_session(
        &self,
        session_id: String,
    ) -> impl Future<Output = Result<ChatSession, CoreError>> + Send;

    fn analyze_message(
        &self,
        message: String,
    ) -> impl Future<Output = Result<MessageAnalysis, CoreError>> + Send;

    fn extract_entities(
        &self,
        text: String,
    ) -> impl Future<Output = Result<EntitySet, CoreError>> + Send;
}
