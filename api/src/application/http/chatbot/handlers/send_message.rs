use crate::application::http::chatbot::validators::SendMessageValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use fruitopia_core::domain::chatbot::{ports::ChatbotService, value_objects::SendMessageInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct SendMessageResponse {
    pub response: String,
    pub session_id: String,
}

#[utoipa::path(
    post,
    path = "/message",
    tag = "chatbot",
    summary = "Send a chat message",
    description = "Classifies the message, extracts fruit and health entities and answers with a generated reply. A new session is started when no session_id is given.",
    request_body = SendMessageValidator,
    responses(
        (status = 200, body = SendMessageResponse),
        (status = 400, description = "Message is empty or too long"),
    ),
)]
pub async fn send_message(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SendMessageValidator>,
) -> Result<Response<SendMessageResponse>, ApiError> {
    let reply = state
        .service
        .send_message(SendMessageInput {
            message: payload.message,
            session_id: payload.session_id,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SendMessageResponse {
        response: reply.response,
        session_id: reply.session_id,
    }))
}
