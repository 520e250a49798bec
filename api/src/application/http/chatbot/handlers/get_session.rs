use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use fruitopia_core::domain::chatbot::{entities::ChatSession, ports::ChatbotService};

#[utoipa::path(
    get,
    path = "/sessions/{session_id}",
    tag = "chatbot",
    summary = "Get a chat session",
    description = "Returns the ordered history of a session. History lives in memory and is lost on restart.",
    params(
        ("session_id" = String, Path, description = "Session ID"),
    ),
    responses(
        (status = 200, body = ChatSession),
        (status = 404, description = "Unknown session"),
    ),
)]
pub async fn get_session(
    Path(session_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<ChatSession>, ApiError> {
    let session = state
        .service
        .get_session(session_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(session))
}
