use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::chatbot::entities::EntitySet;

#[derive(Debug, Clone)]
pub struct SendMessageInput {
    pub message: String,
    /// Blank or missing ids start a new session.
    pub session_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChatReply {
    pub response: String,
    pub session_id: String,
    pub intent: String,
    pub entities: EntitySet,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageAnalysis {
    pub intent: String,
    pub entities: EntitySet,
}
