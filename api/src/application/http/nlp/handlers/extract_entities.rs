use crate::application::http::nlp::validators::ExtractEntitiesValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use fruitopia_core::domain::chatbot::{entities::EntitySet, ports::ChatbotService};

#[utoipa::path(
    post,
    path = "/extract",
    tag = "nlp",
    summary = "Extract entities",
    description = "Fruits, diseases, nutrients and the other entity categories found in the text.",
    request_body = ExtractEntitiesValidator,
    responses(
        (status = 200, body = EntitySet)
    ),
)]
pub async fn extract_entities(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ExtractEntitiesValidator>,
) -> Result<Response<EntitySet>, ApiError> {
    let entities = state
        .service
        .extract_entities(payload.text)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(entities))
}
