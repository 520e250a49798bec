use super::handlers::get_fruit::{__path_get_fruit, get_fruit};
use super::handlers::get_related_fruits::{__path_get_related_fruits, get_related_fruits};
use super::handlers::list_fruits::{__path_list_fruits, list_fruits};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(list_fruits, get_fruit, get_related_fruits))]
pub struct FruitApiDoc;

pub fn fruit_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/fruits", state.args.server.root_path),
            get(list_fruits),
        )
        .route(
            &format!("{}/fruits/{{name}}", state.args.server.root_path),
            get(get_fruit),
        )
        .route(
            &format!("{}/fruits/{{name}}/related", state.args.server.root_path),
            get(get_related_fruits),
        )
}
