use crate::application::http::nlp::validators::AnalyzeMessageValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use fruitopia_core::domain::chatbot::{ports::ChatbotService, value_objects::MessageAnalysis};

#[utoipa::path(
    post,
    path = "/analyze",
    tag = "nlp",
    summary = "Analyze a message",
    description = "Intent and entities of a message, without generating a reply or touching any session.",
    request_body = AnalyzeMessageValidator,
    responses(
        (status = 200, body = MessageAnalysis),
        (status = 400, description = "Message is empty or too long"),
    ),
)]
pub async fn analyze_message(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AnalyzeMessageValidator>,
) -> Result<Response<MessageAnalysis>, ApiError> {
    let analysis = state
        .service
        .analyze_message(payload.message)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(analysis))
}
