use crate::{config::Config, models::ServiceKind};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub service: ServiceKind,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(service: ServiceKind, config: Config) -> Self {
        Self {
            service,
            config: Arc::new(config),
        }
    }
}
