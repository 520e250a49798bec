use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use fruitopia_core::domain::fruit::ports::FruitService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct ListFruitsResponse {
    pub fruits: Vec<String>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "fruit",
    summary = "List fruits",
    description = "Names of every fruit in the catalog, in load order.",
    responses(
        (status = 200, body = ListFruitsResponse)
    ),
)]
pub async fn list_fruits(
    State(state): State<AppState>,
) -> Result<Response<ListFruitsResponse>, ApiError> {
    let fruits = state.service.list_fruits().await.map_err(ApiError::from)?;

    Ok(Response::OK(ListFruitsResponse { fruits }))
}
