use std::sync::Arc;

use plately_core::application::PlatelyService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: PlatelyService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: PlatelyService) -> Self {
        Self { args, service }
    }
}
