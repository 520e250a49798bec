use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use fruitopia_core::domain::fruit::{entities::FruitRecord, ports::FruitService};

#[utoipa::path(
    get,
    path = "/{name}",
    tag = "fruit",
    summary = "Get fruit",
    description = "Full record of one fruit. The name is matched case-insensitively.",
    params(
        ("name" = String, Path, description = "Fruit name"),
    ),
    responses(
        (status = 200, body = FruitRecord),
        (status = 404, description = "Fruit not in the catalog"),
    ),
)]
pub async fn get_fruit(
    Path(name): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<FruitRecord>, ApiError> {
    let fruit = state
        .service
        .get_fruit(name)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(fruit))
}
