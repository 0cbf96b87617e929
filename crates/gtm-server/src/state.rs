use gtm_core::config::Config;
use gtm_core::input::EnumMode;
use std::sync::Arc;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn enum_mode(&self) -> EnumMode {
        self.config.enum_mode()
    }
}
