use std::sync::Arc;

use pawcare_core::application::PawcareService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: PawcareService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: PawcareService) -> Self {
        Self { args, service }
    }
}
