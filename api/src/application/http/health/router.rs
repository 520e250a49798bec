use super::handlers::get_health::get_health;
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new().route(&format!("{}/health", root_path), get(get_health))
}
