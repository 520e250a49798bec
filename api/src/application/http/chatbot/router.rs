use super::handlers::get_session::{__path_get_session, get_session};
use super::handlers::send_message::{__path_send_message, send_message};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(send_message, get_session))]
pub struct ChatbotApiDoc;

pub fn chatbot_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/chatbot/message", state.args.server.root_path),
            post(send_message),
        )
        .route(
            &format!(
                "{}/chatbot/sessions/{{session_id}}",
                state.args.server.root_path
            ),
            get(get_session),
        )
}
