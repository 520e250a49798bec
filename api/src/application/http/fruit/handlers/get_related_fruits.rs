use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use fruitopia_core::domain::fruit::ports::FruitService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct RelatedFruitsResponse {
    pub fruit: String,
    pub related: Vec<String>,
}

#[utoipa::path(
    get,
    path = "/{name}/related",
    tag = "fruit",
    summary = "Get related fruits",
    description = "Related fruit names listed in the record. Empty for unknown fruits.",
    params(
        ("name" = String, Path, description = "Fruit name"),
    ),
    responses(
        (status = 200, body = RelatedFruitsResponse)
    ),
)]
pub async fn get_related_fruits(
    Path(name): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<RelatedFruitsResponse>, ApiError> {
    let related = state
        .service
        .get_related_fruits(name.clone())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RelatedFruitsResponse {
        fruit: name.trim().to_lowercase(),
        related,
    }))
}
