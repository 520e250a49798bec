use super::handlers::analyze_message::{__path_analyze_message, analyze_message};
use super::handlers::extract_entities::{__path_extract_entities, extract_entities};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(extract_entities, analyze_message))]
pub struct NlpApiDoc;

pub fn nlp_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/nlp/extract", state.args.server.root_path),
            post(extract_entities),
        )
        .route(
            &format!("{}/nlp/analyze", state.args.server.root_path),
            post(analyze_message),
        )
}

#[cfg(test)]
mod tests {
    use fruitopia_core::domain::chatbot::{entities::EntitySet, value_objects::MessageAnalysis};
    use serde_json::json;
    use test_context::test_context;

    use crate::application::http::test::TestApp;

    #[test_context(TestApp)]
    #[tokio::test]
    async fn test_extract_entities(ctx: &mut TestApp) {
        let response = ctx
            .server
            .post("/nlp/extract")
            .json(&json!({ "text": "Is apple good for diabetes?" }))
            .await;

        response.assert_status_ok();
        let entities = response.json::<EntitySet>();
        assert_eq!(entities.fruits, vec!["apple".to_string()]);
        assert_eq!(entities.diseases, vec!["diabetes".to_string()]);
    }

    #[test_context(TestApp)]
    #[tokio::test]
    async fn test_analyze_greeting(ctx: &mut TestApp) {
        let analysis = ctx
            .server
            .post("/nlp/analyze")
            .json(&json!({ "message": "hello" }))
            .await
            .json::<MessageAnalysis>();

        assert_eq!(analysis.intent, "greet");
        assert!(analysis.entities.is_empty());
    }
}
