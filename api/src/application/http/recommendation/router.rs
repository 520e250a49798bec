use super::handlers::get_fruits_for_disease::get_fruits_for_disease;
use super::handlers::recommend_fruits::recommend_fruits;
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{get, post},
};

pub fn recommendation_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/recommend", state.args.server.root_path),
            post(recommend_fruits),
        )
        .route(
            &format!(
                "{}/diseases/{{disease}}/fruits",
                state.args.server.root_path
            ),
            get(get_fruits_for_disease),
        )
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use fruitopia_core::domain::fruit::{
        recommendation::DEFAULT_RECOMMENDATIONS, value_objects::DiseaseMatchKind,
    };
    use serde_json::json;
    use test_context::test_context;

    use crate::application::http::{
        recommendation::handlers::{
            get_fruits_for_disease::DiseaseFruitsResponse,
            recommend_fruits::RecommendFruitsResponse,
        },
        test::TestApp,
    };

    #[test_context(TestApp)]
    #[tokio::test]
    async fn test_recommend_matching_fruit(ctx: &mut TestApp) {
        let response = ctx
            .server
            .post("/recommend")
            .json(&json!({ "disease": "diabetes" }))
            .await;

        response.assert_status_ok();
        let recommendation = response.json::<RecommendFruitsResponse>();
        assert_eq!(recommendation.fruits, vec!["apple".to_string()]);
        assert_eq!(recommendation.recommended.len(), 1);
        assert_eq!(recommendation.recommended[0].name, "Apple");
    }

    #[test_context(TestApp)]
    #[tokio::test]
    async fn test_recommend_falls_back_to_defaults(ctx: &mut TestApp) {
        let recommendation = ctx
            .server
            .post("/recommend")
            .json(&json!({ "disease": "gout" }))
            .await
            .json::<RecommendFruitsResponse>();

        assert_eq!(recommendation.fruits, DEFAULT_RECOMMENDATIONS.to_vec());
        assert!(recommendation.recommended.is_empty());
    }

    #[test_context(TestApp)]
    #[tokio::test]
    async fn test_recommend_requires_disease(ctx: &mut TestApp) {
        let response = ctx
            .server
            .post("/recommend")
            .json(&json!({ "disease": "" }))
            .expect_failure()
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test_context(TestApp)]
    #[tokio::test]
    async fn test_disease_search(ctx: &mut TestApp) {
        let response = ctx.server.get("/diseases/diabetes/fruits").await;

        response.assert_status_ok();
        let result = response.json::<DiseaseFruitsResponse>();
        assert_eq!(result.disease, "diabetes");
        assert_eq!(result.matches.len(), 2);
        assert_eq!(result.matches[0].fruit, "apple");
        assert_eq!(result.matches[0].kind, DiseaseMatchKind::Beneficial);
        assert_eq!(result.matches[1].fruit, "banana");
        assert_eq!(result.matches[1].kind, DiseaseMatchKind::NotRecommended);
    }
}
