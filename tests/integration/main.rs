// Integration tests

mod router_test;

use storyquiz::{config::Config, AppState, ServiceKind};

// Test setup helpers
pub fn test_state(kind: ServiceKind) -> AppState {
    let config = Config::from_builder(Config::defaults(kind).expect("defaults"))
        .expect("Failed to build default config");
    AppState::new(kind, config)
}
