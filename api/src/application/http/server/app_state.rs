use std::sync::Arc;

use allerscan_core::application::AllerscanService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: AllerscanService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: AllerscanService) -> Self {
        Self { args, service }
    }
}
