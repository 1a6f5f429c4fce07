use std::sync::Arc;

use dietplan_core::application::DietPlanService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: DietPlanService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: DietPlanService) -> Self {
        Self { args, service }
    }
}
