use crate::application::http::recommendation::validators::RecommendFruitsValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use fruitopia_core::domain::fruit::{
    entities::FruitRecord, ports::FruitService, value_objects::RecommendFruitsInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct RecommendFruitsResponse {
    pub disease: String,
    /// Recommended names, possibly the generic fallback list.
    pub fruits: Vec<String>,
    /// Records of the recommended names that exist in the catalog.
    pub recommended: Vec<FruitRecord>,
}

#[utoipa::path(
    post,
    path = "/recommend",
    tag = "recommendation",
    summary = "Recommend fruits for a condition",
    description = "Up to five fruits whose benefits or disease notes match the condition. A generic list is returned when nothing matches.",
    request_body = RecommendFruitsValidator,
    responses(
        (status = 200, body = RecommendFruitsResponse),
        (status = 400, description = "Disease is empty or too long"),
    ),
)]
pub async fn recommend_fruits(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RecommendFruitsValidator>,
) -> Result<Response<RecommendFruitsResponse>, ApiError> {
    let recommendation = state
        .service
        .recommend_fruits(RecommendFruitsInput {
            disease: payload.disease,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RecommendFruitsResponse {
        disease: recommendation.disease,
        fruits: recommendation.fruits,
        recommended: recommendation.records,
    }))
}
