use std::sync::Arc;

use fruitopia_core::application::FruitopiaService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: FruitopiaService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: FruitopiaService) -> Self {
        Self { args, service }
    }
}
