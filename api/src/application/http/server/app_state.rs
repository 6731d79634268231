use std::sync::Arc;

use nutridish_core::application::NutriDishService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: NutriDishService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: NutriDishService) -> Self {
        Self { args, service }
    }
}
