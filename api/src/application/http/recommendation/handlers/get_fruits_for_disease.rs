use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use fruitopia_core::domain::fruit::{ports::FruitService, value_objects::DiseaseMatch};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct DiseaseFruitsResponse {
    pub disease: String,
    pub matches: Vec<DiseaseMatch>,
}

#[utoipa::path(
    get,
    path = "/diseases/{disease}/fruits",
    tag = "recommendation",
    summary = "Search fruits by disease",
    description = "Fruits whose medical notes list the disease as beneficial or not recommended.",
    params(
        ("disease" = String, Path, description = "Disease name, matched as a case-insensitive substring"),
    ),
    responses(
        (status = 200, body = DiseaseFruitsResponse)
    ),
)]
pub async fn get_fruits_for_disease(
    Path(disease): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<DiseaseFruitsResponse>, ApiError> {
    let matches = state
        .service
        .search_by_disease(disease.clone())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DiseaseFruitsResponse { disease, matches }))
}
